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

use std::borrow::Cow;

use thiserror::Error;

/// Global flag to check if BEANMAP_PANIC_ON_ERROR environment variable is set at compile time.
/// Set BEANMAP_PANIC_ON_ERROR=1 at compile time to enable panic on error.
pub const PANIC_ON_ERROR: bool = option_env!("BEANMAP_PANIC_ON_ERROR").is_some();

/// Error type for beanmap conversion operations.
///
/// Always construct errors through the static constructor functions
/// ([`Error::enumeration`], [`Error::invocation`], [`Error::instantiation`],
/// [`Error::type_error`]) rather than the enum variants. The constructors
/// accept anything convertible into a `Cow<'static, str>` and honor the
/// `BEANMAP_PANIC_ON_ERROR` debug flag, which makes every error panic at its
/// creation site so the source shows up in a backtrace.
///
/// Absence of a matching mutator is deliberately *not* an error: setter
/// resolution returns `Option` and the builder skips unresolved entries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The type's method table could not be used for introspection.
    ///
    /// Do not construct this variant directly; use [`Error::enumeration`] instead.
    #[error("{0}")]
    Enumeration(Cow<'static, str>),

    /// A bound accessor or mutator thunk failed.
    ///
    /// Do not construct this variant directly; use [`Error::invocation`] instead.
    #[error("{0}")]
    Invocation(Cow<'static, str>),

    /// The target type lacks a usable zero-argument constructor, or
    /// construction itself failed.
    ///
    /// Do not construct this variant directly; use [`Error::instantiation`] instead.
    #[error("{0}")]
    Instantiation(Cow<'static, str>),

    /// A value conversion was asked for an incompatible kind.
    ///
    /// Do not construct this variant directly; use [`Error::type_error`] instead.
    #[error("{0}")]
    TypeError(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::Enumeration`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn enumeration<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Enumeration(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Invocation`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invocation<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Invocation(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Instantiation`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn instantiation<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Instantiation(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeError`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TypeError(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use beanmap_core::ensure;
/// use beanmap_core::error::Error;
///
/// fn check_arity(n: usize) -> Result<(), Error> {
///     ensure!(n == 0, Error::enumeration("getter must take no parameters"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Returns early with an [`Error::Invocation`].
///
/// # Examples
/// ```
/// use beanmap_core::bail;
/// use beanmap_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("thunk rejected value");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::invocation($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::invocation(format!($fmt, $($arg)*)))
    };
}
