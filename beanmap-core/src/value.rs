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

//! Wire-level value model.
//!
//! A [`Value`] is what a property holds on the mapping side of a conversion:
//! a scalar, a string, binary data, a date/time, or an explicit null.
//! [`ValueType`] is its runtime type tag and drives mutator selection when
//! building an object from a mapping.

use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::Error;

/// Mapping from property name to value, the transient wire representation
/// produced by projection and consumed by building. Keys are unique; no
/// ordering is guaranteed.
pub type PropertyMap = HashMap<String, Value>;

/// Runtime type tag of a [`Value`].
///
/// The numeric ids follow the cross-language type table so tags stay stable
/// across peers; `Null` has no cross-language id and uses 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ValueType {
    Null = 0,
    Bool = 1,
    Int8 = 2,
    Int16 = 3,
    Int32 = 4,
    Int64 = 6,
    Float32 = 10,
    Float64 = 11,
    String = 12,
    Timestamp = 25,
    LocalDate = 26,
    Binary = 28,
}

impl ValueType {
    /// Whether a mutator parameter declared as `self` accepts a value of
    /// type `incoming` without loss.
    ///
    /// Exact matches always pass; integers widen (Int8 -> Int16 -> Int32 ->
    /// Int64) and Float32 widens to Float64. `Null` is handled by the
    /// declared-type fallback in setter resolution, not here.
    pub fn accepts(self, incoming: ValueType) -> bool {
        if self == incoming {
            return true;
        }
        matches!(
            (self, incoming),
            (ValueType::Int16, ValueType::Int8)
                | (ValueType::Int32, ValueType::Int8 | ValueType::Int16)
                | (
                    ValueType::Int64,
                    ValueType::Int8 | ValueType::Int16 | ValueType::Int32
                )
                | (ValueType::Float64, ValueType::Float32)
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single property value.
///
/// Properties are flat scalar/reference values; nested object graphs are
/// out of scope. Absent or null properties are represented verbatim as
/// [`Value::Null`] rather than omitted keys.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Binary(Vec<u8>),
    LocalDate(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Runtime type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int8(_) => ValueType::Int8,
            Value::Int16(_) => ValueType::Int16,
            Value::Int32(_) => ValueType::Int32,
            Value::Int64(_) => ValueType::Int64,
            Value::Float32(_) => ValueType::Float32,
            Value::Float64(_) => ValueType::Float64,
            Value::String(_) => ValueType::String,
            Value::Binary(_) => ValueType::Binary,
            Value::LocalDate(_) => ValueType::LocalDate,
            Value::Timestamp(_) => ValueType::Timestamp,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Consumes the value as a bool.
    pub fn into_bool(self) -> Result<bool, Error> {
        match self {
            Value::Bool(v) => Ok(v),
            other => Err(mismatch(ValueType::Bool, &other)),
        }
    }

    /// Consumes the value as an i8.
    pub fn into_i8(self) -> Result<i8, Error> {
        match self {
            Value::Int8(v) => Ok(v),
            other => Err(mismatch(ValueType::Int8, &other)),
        }
    }

    /// Consumes the value as an i16, widening from narrower integers.
    pub fn into_i16(self) -> Result<i16, Error> {
        match self {
            Value::Int8(v) => Ok(v as i16),
            Value::Int16(v) => Ok(v),
            other => Err(mismatch(ValueType::Int16, &other)),
        }
    }

    /// Consumes the value as an i32, widening from narrower integers.
    pub fn into_i32(self) -> Result<i32, Error> {
        match self {
            Value::Int8(v) => Ok(v as i32),
            Value::Int16(v) => Ok(v as i32),
            Value::Int32(v) => Ok(v),
            other => Err(mismatch(ValueType::Int32, &other)),
        }
    }

    /// Consumes the value as an i64, widening from narrower integers.
    pub fn into_i64(self) -> Result<i64, Error> {
        match self {
            Value::Int8(v) => Ok(v as i64),
            Value::Int16(v) => Ok(v as i64),
            Value::Int32(v) => Ok(v as i64),
            Value::Int64(v) => Ok(v),
            other => Err(mismatch(ValueType::Int64, &other)),
        }
    }

    pub fn into_f32(self) -> Result<f32, Error> {
        match self {
            Value::Float32(v) => Ok(v),
            other => Err(mismatch(ValueType::Float32, &other)),
        }
    }

    /// Consumes the value as an f64, widening from f32.
    pub fn into_f64(self) -> Result<f64, Error> {
        match self {
            Value::Float32(v) => Ok(v as f64),
            Value::Float64(v) => Ok(v),
            other => Err(mismatch(ValueType::Float64, &other)),
        }
    }

    pub fn into_string(self) -> Result<String, Error> {
        match self {
            Value::String(v) => Ok(v),
            other => Err(mismatch(ValueType::String, &other)),
        }
    }

    pub fn into_binary(self) -> Result<Vec<u8>, Error> {
        match self {
            Value::Binary(v) => Ok(v),
            other => Err(mismatch(ValueType::Binary, &other)),
        }
    }

    pub fn into_local_date(self) -> Result<NaiveDate, Error> {
        match self {
            Value::LocalDate(v) => Ok(v),
            other => Err(mismatch(ValueType::LocalDate, &other)),
        }
    }

    pub fn into_timestamp(self) -> Result<NaiveDateTime, Error> {
        match self {
            Value::Timestamp(v) => Ok(v),
            other => Err(mismatch(ValueType::Timestamp, &other)),
        }
    }
}

#[inline(never)]
fn mismatch(expected: ValueType, got: &Value) -> Error {
    Error::type_error(format!(
        "expected {} value, got {}",
        expected,
        got.value_type()
    ))
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::LocalDate(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => Value::from(inner),
            None => Value::Null,
        }
    }
}
