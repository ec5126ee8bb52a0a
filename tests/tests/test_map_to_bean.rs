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

use beanmap_core::convert::{from_map, from_map_dyn, to_map};
use beanmap_core::descriptor::{Bean, TypeDescriptor};
use beanmap_core::error::Error;
use beanmap_core::value::{PropertyMap, Value, ValueType};

#[derive(Default, Debug, PartialEq)]
struct DemoBean {
    id: Option<i32>,
    name: Option<String>,
}

impl Bean for DemoBean {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<DemoBean>("DemoBean")
            .constructor(DemoBean::default)
            .getter("getId", |b| Value::from(b.id))
            .getter("getName", |b| Value::from(b.name.clone()))
            .nullable_setter("setId", ValueType::Int32, |b, v| {
                b.id = if v.is_null() { None } else { Some(v.into_i32()?) };
                Ok(())
            })
            .nullable_setter("setName", ValueType::String, |b, v| {
                b.name = if v.is_null() {
                    None
                } else {
                    Some(v.into_string()?)
                };
                Ok(())
            })
            .build()
    }
}

fn map_of(entries: &[(&str, Value)]) -> PropertyMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_builder_literal_scenario() {
    let map = map_of(&[
        ("id", Value::Int32(456)),
        ("name", Value::String("12345".to_string())),
    ]);
    let bean: DemoBean = from_map(&map).unwrap();

    assert_eq!(bean.id, Some(456));
    assert_eq!(bean.name.as_deref(), Some("12345"));
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let map = map_of(&[
        ("id", Value::Int32(1)),
        ("unknownKey", Value::String("x".to_string())),
    ]);
    let bean: DemoBean = from_map(&map).unwrap();

    assert_eq!(bean.id, Some(1));
    assert_eq!(bean.name, None);
}

#[test]
fn test_round_trip_preserves_properties() {
    let original = DemoBean {
        id: Some(100),
        name: Some("BBBBBBBBBBBBB".to_string()),
    };
    let map = to_map(&original).unwrap();
    let rebuilt: DemoBean = from_map(&map).unwrap();

    assert_eq!(rebuilt.id, original.id);
    assert_eq!(rebuilt.name, original.name);
}

#[test]
fn test_type_mismatch_entry_is_skipped() {
    // a string aimed at the i32 id finds no compatible mutator and is
    // skipped, leaving the default-constructed value in place
    let map = map_of(&[
        ("id", Value::String("not a number".to_string())),
        ("name", Value::String("kept".to_string())),
    ]);
    let bean: DemoBean = from_map(&map).unwrap();

    assert_eq!(bean.id, None);
    assert_eq!(bean.name.as_deref(), Some("kept"));
}

#[test]
fn test_narrow_integers_widen_on_write() {
    let map = map_of(&[("id", Value::Int16(456)), ("name", Value::Null)]);
    let bean: DemoBean = from_map(&map).unwrap();

    assert_eq!(bean.id, Some(456));
    assert_eq!(bean.name, None);
}

#[test]
fn test_null_values_populate_nullable_properties() {
    let map = map_of(&[("id", Value::Null), ("name", Value::Null)]);
    let bean: DemoBean = from_map(&map).unwrap();

    assert_eq!(bean, DemoBean::default());
}

#[test]
fn test_missing_constructor_fails_instantiation() {
    #[derive(Debug)]
    struct NoCtor;
    impl Bean for NoCtor {
        fn type_descriptor() -> TypeDescriptor {
            TypeDescriptor::builder::<NoCtor>("NoCtor")
                .getter("getId", |_| Value::from(1i32))
                .build()
        }
    }

    let err = from_map::<NoCtor>(&PropertyMap::new()).unwrap_err();
    assert!(matches!(err, Error::Instantiation(_)));
}

#[test]
fn test_dyn_builder_matches_typed_builder() {
    let descriptor = DemoBean::type_descriptor();
    let map = map_of(&[("id", Value::Int32(9))]);
    let instance = from_map_dyn(&descriptor, &map).unwrap();
    let bean = instance.downcast_ref::<DemoBean>().unwrap();

    assert_eq!(bean.id, Some(9));
}

#[test]
fn test_empty_map_yields_default_instance() {
    let bean: DemoBean = from_map(&PropertyMap::new()).unwrap();
    assert_eq!(bean, DemoBean::default());
}
