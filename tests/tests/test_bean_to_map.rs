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

use beanmap_core::convert::to_map;
use beanmap_core::descriptor::{Bean, TypeDescriptor};
use beanmap_core::error::Error;
use beanmap_core::value::{Value, ValueType};

/// A bean with a derived predicate and a trap accessor: `isolate` starts
/// with `is` but names no property because the next character is lowercase.
#[derive(Default, Debug, PartialEq)]
struct DemoBean {
    id: Option<i32>,
    name: Option<String>,
}

impl DemoBean {
    fn new(id: i32, name: &str) -> Self {
        DemoBean {
            id: Some(id),
            name: Some(name.to_string()),
        }
    }
}

impl Bean for DemoBean {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<DemoBean>("DemoBean")
            .constructor(DemoBean::default)
            .getter("getId", |b| Value::from(b.id))
            .getter("getName", |b| Value::from(b.name.clone()))
            .try_getter("isLongName", |b| {
                let name = b
                    .name
                    .as_deref()
                    .ok_or_else(|| Error::invocation("longName read before name was set"))?;
                Ok(Value::from(name.len() > 10))
            })
            .getter("isolate", |_| Value::from(0i32))
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

#[test]
fn test_literal_scenario() {
    let bean = DemoBean::new(100, "BBBBBBBBBBBBB");
    let map = to_map(&bean).unwrap();

    assert_eq!(map.get("id"), Some(&Value::Int32(100)));
    assert_eq!(
        map.get("name"),
        Some(&Value::String("BBBBBBBBBBBBB".to_string()))
    );
    assert_eq!(map.get("longName"), Some(&Value::Bool(true)));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_isolate_is_not_a_property() {
    let bean = DemoBean::new(100, "BBBBBBBBBBBBB");
    let map = to_map(&bean).unwrap();

    assert!(!map.contains_key("olate"));
    assert!(!map.contains_key("isolate"));
}

#[test]
fn test_derived_boolean_property() {
    let long = to_map(&DemoBean::new(1, "BBBBBBBBBBBBB")).unwrap();
    assert_eq!(long.get("longName"), Some(&Value::Bool(true)));

    let short = to_map(&DemoBean::new(1, "AB")).unwrap();
    assert_eq!(short.get("longName"), Some(&Value::Bool(false)));
}

#[test]
fn test_projection_is_idempotent() {
    let bean = DemoBean::new(42, "hello world wide");
    let first = to_map(&bean).unwrap();
    let second = to_map(&bean).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_null_property_projected_as_null_key() {
    let bean = DemoBean {
        id: Some(1),
        name: Some("ok".to_string()),
    };
    let map = to_map(&bean).unwrap();
    assert_eq!(map.get("name"), Some(&Value::String("ok".to_string())));

    // a null id still shows up as an explicit null entry
    let bean = DemoBean {
        id: None,
        name: Some("ok".to_string()),
    };
    let map = to_map(&bean).unwrap();
    assert_eq!(map.get("id"), Some(&Value::Null));
}

#[test]
fn test_failing_accessor_aborts_projection() {
    // isLongName reads through name; with no name set the accessor fails
    // and the whole projection fails with it.
    let bean = DemoBean {
        id: Some(1),
        name: None,
    };
    let err = to_map(&bean).unwrap_err();
    assert!(matches!(err, Error::Invocation(_)));
}
