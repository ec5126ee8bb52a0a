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

//! # Beanmap
//!
//! Beanmap converts between objects following the accessor naming
//! convention and string-keyed property maps. [`to_map`] reads every
//! property a type exposes through `get`/`is` accessors into a
//! [`PropertyMap`]; [`from_map`] constructs a fresh instance and populates
//! it through matching `set` mutators.
//!
//! ## The accessor convention
//!
//! A zero-argument method qualifies as a getter iff its name is `get` or
//! `is` followed by an uppercase-led remainder; the property name is the
//! remainder with its first character lowercased. The uppercase rule is
//! strict: `isLongName` exposes `longName`, while `isolate` exposes nothing
//! at all. Setters are matched as `set` plus the capitalized property name
//! with a single parameter whose declared type accepts the incoming value.
//!
//! ## Deriving the method table
//!
//! ```rust
//! use beanmap::{from_map, to_map, Bean, Value};
//!
//! #[derive(Bean, Default, Debug, PartialEq)]
//! struct Person {
//!     id: i32,
//!     name: Option<String>,
//!     active: bool,
//! }
//!
//! # fn main() -> Result<(), beanmap::Error> {
//! let person = Person {
//!     id: 7,
//!     name: Some("Alice".to_string()),
//!     active: true,
//! };
//!
//! let map = to_map(&person)?;
//! assert_eq!(map.get("id"), Some(&Value::Int32(7)));
//! assert_eq!(map.get("active"), Some(&Value::Bool(true)));
//!
//! let rebuilt: Person = from_map(&map)?;
//! assert_eq!(rebuilt, person);
//! # Ok(())
//! # }
//! ```
//!
//! ## Hand-written tables
//!
//! Types with computed accessors implement [`Bean`] directly through
//! [`TypeDescriptor::builder`], declaring arbitrary method names; the
//! enumerator applies the naming convention to whatever the table declares.
//!
//! ```rust
//! use beanmap::{to_map, Bean, TypeDescriptor, Value, ValueType};
//!
//! #[derive(Default)]
//! struct Account {
//!     name: String,
//! }
//!
//! impl Bean for Account {
//!     fn type_descriptor() -> TypeDescriptor {
//!         TypeDescriptor::builder::<Account>("Account")
//!             .constructor(Account::default)
//!             .getter("getName", |a| Value::from(a.name.clone()))
//!             .getter("isLongName", |a| Value::from(a.name.len() > 10))
//!             .setter("setName", ValueType::String, |a, v| {
//!                 a.name = v.into_string()?;
//!                 Ok(())
//!             })
//!             .build()
//!     }
//! }
//!
//! let map = to_map(&Account { name: "Hi".to_string() }).unwrap();
//! assert_eq!(map.get("longName"), Some(&Value::Bool(false)));
//! ```
//!
//! ## Lenient building
//!
//! Externally supplied mappings may carry keys no mutator matches; those
//! entries are skipped and the remaining ones applied, so a partially
//! populated instance is a valid outcome. Projection is strict: any failing
//! accessor aborts the call.

pub use beanmap_core::{
    convert::{from_map, from_map_dyn, to_map, to_map_dyn},
    descriptor::{Bean, DescriptorBuilder, MethodDescriptor, TypeDescriptor},
    error::Error,
    introspect::{enumerate_getters, property_name_of, resolve_setter, AccessorBinding},
    value::{PropertyMap, Value, ValueType},
};
pub use beanmap_derive::Bean;
