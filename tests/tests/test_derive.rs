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

use beanmap_core::convert::{from_map, to_map};
use beanmap_core::descriptor::Bean as _;
use beanmap_core::value::{PropertyMap, Value};
use beanmap_derive::Bean;
use chrono::NaiveDate;

#[derive(Bean, Default, Debug, PartialEq)]
struct Person {
    id: i32,
    name: Option<String>,
    active: bool,
    score: f64,
}

#[test]
fn test_derived_table_round_trip() {
    let person = Person {
        id: 7,
        name: Some("Alice".to_string()),
        active: true,
        score: 99.5,
    };
    let map = to_map(&person).unwrap();

    assert_eq!(map.get("id"), Some(&Value::Int32(7)));
    assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(map.get("active"), Some(&Value::Bool(true)));
    assert_eq!(map.get("score"), Some(&Value::Float64(99.5)));

    let rebuilt: Person = from_map(&map).unwrap();
    assert_eq!(rebuilt, person);
}

#[test]
fn test_bool_fields_use_is_prefix() {
    let descriptor = Person::type_descriptor();
    let names: Vec<&str> = descriptor.methods().iter().map(|m| m.name()).collect();

    assert!(names.contains(&"isActive"));
    assert!(names.contains(&"setActive"));
    assert!(!names.contains(&"getActive"));
}

#[test]
fn test_snake_case_fields_become_camel_properties() {
    #[derive(Bean, Default, Debug, PartialEq)]
    struct Event {
        created_at_ms: i64,
    }

    let map = to_map(&Event { created_at_ms: 5 }).unwrap();
    assert_eq!(map.get("createdAtMs"), Some(&Value::Int64(5)));

    let descriptor = Event::type_descriptor();
    assert_eq!(descriptor.methods()[0].name(), "getCreatedAtMs");
}

#[test]
fn test_skip_and_rename_attributes() {
    #[derive(Bean, Default, Debug, PartialEq)]
    struct Session {
        #[bean(rename = "sessionId")]
        id: i64,
        #[bean(skip)]
        secret: String,
    }

    let session = Session {
        id: 31,
        secret: "hidden".to_string(),
    };
    let map = to_map(&session).unwrap();

    assert_eq!(map.get("sessionId"), Some(&Value::Int64(31)));
    assert!(!map.contains_key("id"));
    assert!(!map.contains_key("secret"));

    let mut incoming = PropertyMap::new();
    incoming.insert("sessionId".to_string(), Value::Int64(77));
    incoming.insert("secret".to_string(), Value::String("ignored".to_string()));
    let rebuilt: Session = from_map(&incoming).unwrap();

    assert_eq!(rebuilt.id, 77);
    assert_eq!(rebuilt.secret, "");
}

#[test]
fn test_option_fields_round_trip_null() {
    let person = Person {
        id: 1,
        name: None,
        active: false,
        score: 0.0,
    };
    let map = to_map(&person).unwrap();
    assert_eq!(map.get("name"), Some(&Value::Null));

    let rebuilt: Person = from_map(&map).unwrap();
    assert_eq!(rebuilt.name, None);
}

#[test]
fn test_date_and_binary_fields() {
    #[derive(Bean, Default, Debug, PartialEq)]
    struct Record {
        day: Option<NaiveDate>,
        payload: Vec<u8>,
    }

    let record = Record {
        day: NaiveDate::from_ymd_opt(2024, 2, 29),
        payload: vec![1, 2, 3],
    };
    let map = to_map(&record).unwrap();

    assert_eq!(
        map.get("day"),
        Some(&Value::LocalDate(
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        ))
    );
    assert_eq!(map.get("payload"), Some(&Value::Binary(vec![1, 2, 3])));

    let rebuilt: Record = from_map(&map).unwrap();
    assert_eq!(rebuilt, record);
}
