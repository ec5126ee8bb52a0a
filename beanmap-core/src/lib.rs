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

//! # Beanmap Core
//!
//! Core implementation of the beanmap reflective converter: given an object
//! following the accessor naming convention, produce a key-value mapping of
//! its readable properties; given a type descriptor and such a mapping,
//! construct an instance with the corresponding properties set.
//!
//! ## Architecture
//!
//! - **`descriptor`**: method-table descriptors, the explicit stand-in for
//!   runtime reflection, plus the [`descriptor::Bean`] trait host types
//!   implement
//! - **`introspect`**: the property enumerator, classifying declared methods
//!   into read/write bindings by the `get`/`is`/`set` naming convention
//! - **`convert`**: the projector ([`convert::to_map`]) and builder
//!   ([`convert::from_map`])
//! - **`value`**: wire-level values, their runtime type tags and conversions
//! - **`error`**: error taxonomy and result handling
//! - **`util`**: string-case helpers shared by the enumerator
//!
//! ## Failure semantics
//!
//! Enumeration and instantiation failures abort a call, as does any accessor
//! failure during projection. A missing mutator binding during building is
//! not an error: the entry is skipped and the remaining entries proceed, so
//! externally supplied mappings may carry unknown or extra keys.
//!
//! ## Concurrency
//!
//! Conversions are synchronous and stateless across calls; descriptors are
//! derived fresh per call and thunks are `Send + Sync`, so concurrent use
//! needs no locking.
//!
//! ## Usage
//!
//! This crate is typically used through the higher-level `beanmap` crate,
//! which re-exports the public API together with the `Bean` derive macro.
//!
//! ```rust
//! use beanmap_core::convert::{from_map, to_map};
//! use beanmap_core::descriptor::{Bean, TypeDescriptor};
//! use beanmap_core::value::{Value, ValueType};
//!
//! #[derive(Default)]
//! struct Account {
//!     id: i32,
//! }
//!
//! impl Bean for Account {
//!     fn type_descriptor() -> TypeDescriptor {
//!         TypeDescriptor::builder::<Account>("Account")
//!             .constructor(Account::default)
//!             .getter("getId", |a| Value::from(a.id))
//!             .setter("setId", ValueType::Int32, |a, v| {
//!                 a.id = v.into_i32()?;
//!                 Ok(())
//!             })
//!             .build()
//!     }
//! }
//!
//! let map = to_map(&Account { id: 7 }).unwrap();
//! assert_eq!(map.get("id"), Some(&Value::Int32(7)));
//! let back: Account = from_map(&map).unwrap();
//! assert_eq!(back.id, 7);
//! ```

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod introspect;
pub mod util;
pub mod value;
