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

//! Method-table descriptors.
//!
//! Rust has no runtime method listing, so the introspection facility the
//! converter relies on is an explicit table: a [`TypeDescriptor`] lists the
//! accessor methods a type declares, each as a [`MethodDescriptor`] carrying
//! the accessor name in the lower-camel wire convention (`getId`,
//! `isLongName`, `setName`), the declared parameter type, and invoke thunks
//! over `dyn Any`. Tables are hand-built through [`DescriptorBuilder`] or
//! generated by `#[derive(Bean)]` from a struct's fields.
//!
//! A descriptor is stable for the lifetime of a conversion call. Thunks are
//! `Send + Sync`, so callers may cache or share descriptors freely.

use std::any::Any;
use std::marker::PhantomData;

use crate::error::Error;
use crate::value::{Value, ValueType};

type ReadThunk = Box<dyn Fn(&dyn Any) -> Result<Value, Error> + Send + Sync>;
type WriteThunk = Box<dyn Fn(&mut dyn Any, Value) -> Result<(), Error> + Send + Sync>;
type Constructor = Box<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// A type whose instances can be converted to and from a property map.
///
/// Implemented by hand through [`TypeDescriptor::builder`] when the type has
/// computed accessors, or generated by `#[derive(Bean)]` for plain structs
/// with named fields.
pub trait Bean: Any {
    /// Builds the method table describing this type's accessors.
    ///
    /// Descriptors are built fresh per call; implementations must be pure so
    /// repeated calls observe the same table.
    fn type_descriptor() -> TypeDescriptor
    where
        Self: Sized;
}

/// One declared method of a type.
///
/// Whether the method is usable as a getter or setter is decided by the
/// property enumerator from its name and parameter list, not here: the
/// descriptor only records what the type declares.
pub struct MethodDescriptor {
    name: String,
    param: Option<ValueType>,
    nullable: bool,
    read: Option<ReadThunk>,
    write: Option<WriteThunk>,
}

impl MethodDescriptor {
    /// Accessor name in the lower-camel wire convention, e.g. `getId`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter type; `None` for zero-argument methods.
    pub fn param(&self) -> Option<ValueType> {
        self.param
    }

    /// Whether the parameter can hold [`Value::Null`].
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the method can be read through.
    pub fn readable(&self) -> bool {
        self.read.is_some()
    }

    /// Whether the method can be written through.
    pub fn writable(&self) -> bool {
        self.write.is_some()
    }

    /// Invokes the read thunk on `instance`.
    pub fn invoke_read(&self, instance: &dyn Any) -> Result<Value, Error> {
        match &self.read {
            Some(thunk) => thunk(instance),
            None => Err(Error::invocation(format!(
                "method {} is not readable",
                self.name
            ))),
        }
    }

    /// Invokes the write thunk on `instance` with `value`.
    pub fn invoke_write(&self, instance: &mut dyn Any, value: Value) -> Result<(), Error> {
        match &self.write {
            Some(thunk) => thunk(instance, value),
            None => Err(Error::invocation(format!(
                "method {} is not writable",
                self.name
            ))),
        }
    }
}

/// The declared method table of a type, plus its zero-argument constructor.
pub struct TypeDescriptor {
    type_name: String,
    constructor: Option<Constructor>,
    methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    /// Starts a typed builder for `T`.
    pub fn builder<T: Any>(type_name: &str) -> DescriptorBuilder<T> {
        DescriptorBuilder {
            descriptor: TypeDescriptor {
                type_name: type_name.to_string(),
                constructor: None,
                methods: Vec::new(),
            },
            _marker: PhantomData,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Declared methods, in declaration order.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Constructs a fresh default instance.
    pub fn construct(&self) -> Result<Box<dyn Any>, Error> {
        match &self.constructor {
            Some(ctor) => Ok(ctor()),
            None => Err(Error::instantiation(format!(
                "type {} has no zero-argument constructor",
                self.type_name
            ))),
        }
    }
}

/// Typed builder for a [`TypeDescriptor`].
///
/// User closures see `&T` / `&mut T`; the builder wraps them with the
/// `dyn Any` downcast. A downcast failure means the descriptor was invoked
/// on a foreign instance and surfaces as an invocation failure.
pub struct DescriptorBuilder<T> {
    descriptor: TypeDescriptor,
    _marker: PhantomData<T>,
}

impl<T: Any> DescriptorBuilder<T> {
    /// Registers the zero-argument constructor.
    pub fn constructor<F>(mut self, f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.descriptor.constructor = Some(Box::new(move || Box::new(f())));
        self
    }

    /// Declares a zero-argument read method.
    pub fn getter<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        let method = name.to_string();
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            param: None,
            nullable: false,
            read: Some(Box::new(move |instance| {
                let target = instance.downcast_ref::<T>().ok_or_else(|| {
                    Error::invocation(format!("{} invoked on a foreign instance", method))
                })?;
                Ok(f(target))
            })),
            write: None,
        });
        self
    }

    /// Declares a zero-argument read method whose computation can fail.
    ///
    /// Reads are strict: an error from the closure aborts the whole
    /// projection, since a failing getter indicates a caller bug.
    pub fn try_getter<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&T) -> Result<Value, Error> + Send + Sync + 'static,
    {
        let method = name.to_string();
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            param: None,
            nullable: false,
            read: Some(Box::new(move |instance| {
                let target = instance.downcast_ref::<T>().ok_or_else(|| {
                    Error::invocation(format!("{} invoked on a foreign instance", method))
                })?;
                f(target)
            })),
            write: None,
        });
        self
    }

    /// Declares a single-argument write method with parameter type `param`.
    pub fn setter<F>(self, name: &str, param: ValueType, f: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.push_setter(name, param, false, f)
    }

    /// Declares a write method whose parameter also accepts [`Value::Null`].
    pub fn nullable_setter<F>(self, name: &str, param: ValueType, f: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.push_setter(name, param, true, f)
    }

    /// Declares a method without attaching thunks, recording only its shape.
    ///
    /// Used to model declared overloads such as `getName(int)` that exist on
    /// the type but never qualify as accessors.
    pub fn method(mut self, name: &str, param: Option<ValueType>) -> Self {
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            param,
            nullable: false,
            read: None,
            write: None,
        });
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }

    fn push_setter<F>(mut self, name: &str, param: ValueType, nullable: bool, f: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<(), Error> + Send + Sync + 'static,
    {
        let method = name.to_string();
        self.descriptor.methods.push(MethodDescriptor {
            name: name.to_string(),
            param: Some(param),
            nullable,
            read: None,
            write: Some(Box::new(move |instance, value| {
                let target = instance.downcast_mut::<T>().ok_or_else(|| {
                    Error::invocation(format!("{} invoked on a foreign instance", method))
                })?;
                f(target, value)
            })),
        });
        self
    }
}
