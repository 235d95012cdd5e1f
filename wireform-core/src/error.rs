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

//! Error type shared by every decoder in the framework.
//!
//! Decoding is the only partial operation in the crate: encoding is total and
//! never fails. Every malformed-input condition is expressed as a typed
//! [`enum@Error`] value returned to the caller; nothing in the decode path
//! panics or reads out of bounds.
//!
//! Error constructors sit on the cold path of every buffer read, so they keep
//! the `#[inline(always)] #[cold] #[track_caller]` treatment: the functions
//! are rarely executed, but their inlining behavior affects how the hot
//! (successful) read paths optimize.

use std::borrow::Cow;

use thiserror::Error;

/// Global flag checked at compile time via the `WIREFORM_PANIC_ON_ERROR`
/// environment variable. When set, every error constructor panics at the
/// point of creation instead of returning, which turns the error site into a
/// backtrace during debugging.
pub const PANIC_ON_ERROR: bool = option_env!("WIREFORM_PANIC_ON_ERROR").is_some();

/// Error type for decode operations.
///
/// Construct variants through the static constructor functions
/// ([`Error::buffer_out_of_bound`], [`Error::unknown_discriminator`],
/// [`Error::invalid_data`], [`Error::conversion_error`],
/// [`Error::decode_error`]) rather than directly: the constructors accept
/// anything convertible into `Cow<'static, str>` and honor
/// [`PANIC_ON_ERROR`].
///
/// # Example
/// ```
/// use wireform_core::error::Error;
///
/// let err = Error::decode_error("field 3 of 6 failed");
/// let err = Error::unknown_discriminator(format!("unexpected tag {:#04x}", 0x7a));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Buffer shorter than a read requires, or the start offset is already
    /// at or past the end of the buffer.
    #[error("buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// A discriminator byte of an optional or sum codec was not in the
    /// recognized set.
    #[error("{0}")]
    UnknownDiscriminator(Cow<'static, str>),

    /// Structurally invalid input, such as a negative length prefix or a
    /// string payload that is not valid UTF-8.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    /// An adapter's partial mapping rejected a successfully decoded value.
    #[error("{0}")]
    ConversionError(Cow<'static, str>),

    /// A combinator-level failure annotated with the identity of the failing
    /// sub-field, branch or element and the underlying cause.
    #[error("{0}")]
    DecodeError(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::BufferOutOfBound`] for a read of `length` bytes
    /// at `offset` in a buffer holding `capacity` bytes.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, capacity: usize) -> Self {
        let err = Error::BufferOutOfBound(offset, length, capacity);
        if PANIC_ON_ERROR {
            panic!("WIREFORM_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnknownDiscriminator`] from a message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_discriminator<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnknownDiscriminator(s.into());
        if PANIC_ON_ERROR {
            panic!("WIREFORM_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidData`] from a message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidData(s.into());
        if PANIC_ON_ERROR {
            panic!("WIREFORM_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::ConversionError`] from a message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn conversion_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::ConversionError(s.into());
        if PANIC_ON_ERROR {
            panic!("WIREFORM_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DecodeError`] from a message.
    ///
    /// Combinators use this to annotate a sub-codec failure with the failing
    /// field, branch or element before propagating it upward.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn decode_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DecodeError(s.into());
        if PANIC_ON_ERROR {
            panic!("WIREFORM_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use wireform_core::ensure;
/// use wireform_core::error::Error;
///
/// fn check_count(n: i32) -> Result<(), Error> {
///     ensure!(n >= 0, "count {} must not be negative", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::DecodeError`].
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::decode_error($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::decode_error(format!($fmt, $($arg)*)))
    };
}
