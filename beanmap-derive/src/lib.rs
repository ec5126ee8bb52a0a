// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! # Beanmap Derive Macro
//!
//! Provides `#[derive(Bean)]`, which generates the accessor method table for
//! a struct with named fields: per field a getter (`is` + UpperCamel for
//! `bool` fields, `get` + UpperCamel otherwise), a setter (`set` +
//! UpperCamel), and a `Default`-based zero-argument constructor. Property
//! names derive from the snake_case field names, so `long_name` becomes the
//! wire property `longName` exposed through `getLongName`/`setLongName`.
//!
//! **Supported field types:** `bool`, `i8`, `i16`, `i32`, `i64`, `f32`,
//! `f64`, `String`, `Vec<u8>`, `chrono::NaiveDate`, `chrono::NaiveDateTime`,
//! and `Option` of each. `Option` fields project absent values as null and
//! accept null on write.
//!
//! **Field attributes:**
//! - `#[bean(skip)]` excludes a field from the table entirely
//! - `#[bean(rename = "…")]` overrides the derived property name
//!
//! Computed accessors (a predicate derived from other fields, say) cannot be
//! expressed from a field list; implement `Bean` by hand with
//! `TypeDescriptor::builder` for those types.
//!
//! ```rust,ignore
//! use beanmap::Bean;
//!
//! #[derive(Bean, Default)]
//! struct Person {
//!     id: i32,
//!     name: Option<String>,
//!     active: bool,
//! }
//! // table: getId/setId, getName/setName, isActive/setActive
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;
mod util;

/// Derive macro generating a `Bean` implementation from a struct's fields.
///
/// The annotated type must also implement `Default`; the generated
/// descriptor uses it as the zero-argument constructor.
#[proc_macro_derive(Bean, attributes(bean))]
pub fn proc_macro_derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::derive_bean(&input)
}
