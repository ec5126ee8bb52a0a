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

//! Object/map conversion.
//!
//! [`to_map`] projects an instance's readable properties into a
//! [`PropertyMap`]; [`from_map`] constructs a fresh instance of a target
//! type and populates it from one. Both are single-pass, stateless
//! transformations safe to run concurrently.
//!
//! Failure semantics are asymmetric: reading all properties of a well-formed
//! bean should always succeed, so any accessor failure aborts projection.
//! A mapping supplied from outside must tolerate unknown or extra keys, so
//! unresolved entries are skipped during building; only a mutator that fails
//! *after* being resolved is fatal.

use std::any::Any;

use crate::descriptor::{Bean, TypeDescriptor};
use crate::error::Error;
use crate::introspect::{enumerate_getters, resolve_setter};
use crate::value::PropertyMap;

/// Projects an instance into a property map.
pub fn to_map<T: Bean>(instance: &T) -> Result<PropertyMap, Error> {
    let descriptor = T::type_descriptor();
    to_map_dyn(&descriptor, instance)
}

/// Projects a type-erased instance against an explicit descriptor.
///
/// Every getter binding is invoked and stored under its derived property
/// name, null results included verbatim. Any read failure aborts the call.
pub fn to_map_dyn(descriptor: &TypeDescriptor, instance: &dyn Any) -> Result<PropertyMap, Error> {
    let mut map = PropertyMap::new();
    for binding in enumerate_getters(descriptor) {
        let value = binding.method.invoke_read(instance)?;
        map.insert(binding.property, value);
    }
    Ok(map)
}

/// Constructs and populates a fresh instance of `T` from a property map.
pub fn from_map<T: Bean>(map: &PropertyMap) -> Result<T, Error> {
    let descriptor = T::type_descriptor();
    let instance = from_map_dyn(&descriptor, map)?;
    match instance.downcast::<T>() {
        Ok(boxed) => Ok(*boxed),
        Err(_) => Err(Error::instantiation(format!(
            "constructor for {} produced a foreign instance",
            descriptor.type_name()
        ))),
    }
}

/// Constructs and populates a type-erased instance against an explicit
/// descriptor.
///
/// Entries without a resolvable mutator are skipped (lenient), as are null
/// values aimed at parameters that cannot hold null. A partially populated
/// instance is a valid, non-error outcome.
pub fn from_map_dyn(
    descriptor: &TypeDescriptor,
    map: &PropertyMap,
) -> Result<Box<dyn Any>, Error> {
    let mut instance = descriptor.construct()?;
    for (property, value) in map {
        let Some(method) = resolve_setter(descriptor, property, value.value_type()) else {
            log::debug!(
                "no mutator for property {} on {}, entry skipped",
                property,
                descriptor.type_name()
            );
            continue;
        };
        if value.is_null() && !method.nullable() {
            log::debug!(
                "null value for non-nullable property {} on {}, entry skipped",
                property,
                descriptor.type_name()
            );
            continue;
        }
        method.invoke_write(instance.as_mut(), value.clone())?;
    }
    Ok(instance)
}
