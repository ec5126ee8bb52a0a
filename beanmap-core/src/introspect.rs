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

//! Property enumeration.
//!
//! Classifies a descriptor's declared methods into read/write property
//! bindings by the accessor naming convention: `get`/`is` plus an
//! uppercase-led remainder for getters, `set` plus the capitalized property
//! name for setters. The uppercase rule is what separates `isLongName`
//! (property `longName`) from `isolate` (no property at all).

use crate::descriptor::{MethodDescriptor, TypeDescriptor};
use crate::util::{capitalize_first, decapitalize_first, starts_uppercase};
use crate::value::ValueType;

/// A property paired with the zero-argument read method exposing it.
pub struct AccessorBinding<'a> {
    /// Derived property name, e.g. `longName` for `isLongName`.
    pub property: String,
    /// The backing method.
    pub method: &'a MethodDescriptor,
}

/// Derives a property name from an accessor method name.
///
/// Strips a `get` or `is` prefix and decapitalizes the first remaining
/// character. Returns `None` when the name is not a property accessor:
/// the remainder is empty (`get`, `is`) or its first character is not
/// uppercase (`isolate`, `getaway`).
pub fn property_name_of(method_name: &str) -> Option<String> {
    let remainder = method_name
        .strip_prefix("get")
        .or_else(|| method_name.strip_prefix("is"))?;
    if !starts_uppercase(remainder) {
        return None;
    }
    Some(decapitalize_first(remainder))
}

/// Accessor method name a setter for `property` must carry.
pub fn setter_method_name(property: &str) -> String {
    format!("set{}", capitalize_first(property))
}

/// Enumerates the readable property bindings a descriptor declares.
///
/// A method qualifies iff it takes zero parameters, can be read through, and
/// its name derives a property name. Overloads carrying parameters are
/// excluded. When two methods derive the same property name, the first in
/// table order wins; later duplicates are dropped deterministically.
pub fn enumerate_getters(descriptor: &TypeDescriptor) -> Vec<AccessorBinding<'_>> {
    let mut bindings: Vec<AccessorBinding<'_>> = Vec::new();
    for method in descriptor.methods() {
        if method.param().is_some() || !method.readable() {
            continue;
        }
        let Some(property) = property_name_of(method.name()) else {
            continue;
        };
        if bindings.iter().any(|b| b.property == property) {
            continue;
        }
        bindings.push(AccessorBinding { property, method });
    }
    bindings
}

/// Resolves the mutator for `property` accepting a value of `value_type`.
///
/// Looks for a writable single-parameter method named `set` + capitalized
/// property name whose declared parameter accepts `value_type`. A `Null`
/// value carries no usable runtime type, so resolution falls back to the
/// declared parameter type and matches by name alone.
///
/// Absence is reported as `None`; the builder treats that as "skip this
/// entry", never as an error.
pub fn resolve_setter<'a>(
    descriptor: &'a TypeDescriptor,
    property: &str,
    value_type: ValueType,
) -> Option<&'a MethodDescriptor> {
    let target = setter_method_name(property);
    descriptor.methods().iter().find(|method| {
        method.name() == target
            && method.writable()
            && match method.param() {
                Some(param) => value_type == ValueType::Null || param.accepts(value_type),
                None => false,
            }
    })
}
