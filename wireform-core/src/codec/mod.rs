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

//! Codec contracts and the combinator surface built on them.
//!
//! A codec for `A` is two independent capabilities bound to the same type:
//!
//! - [`Encoder`], `encode(&A) -> Rope`: total, pure, deterministic;
//! - [`Decoder`], `decode(&[u8], offset) -> Result<Decoded<A>, Error>`:
//!   partial, failing on malformed input or an out-of-range offset.
//!
//! [`Codec`] is the blanket union of both. Codecs are stateless values,
//! constructed once and reused for any number of calls; concurrent use of a
//! shared codec from multiple threads is safe by construction.
//!
//! Combinators wrap one or more codecs: products are tuples of codecs
//! ([`product`]), [`option::option`] adds a presence discriminator,
//! [`sum`] covers two- and three-way tagged unions, [`collection`] covers
//! count-prefixed sequences and maps, and [`adapt`] derives domain codecs
//! from existing ones by mapping values at the boundary. A combinator tree is
//! built once and reused; decode threads a cumulative offset through the
//! tree, short-circuiting on the first failure.
//!
//! Every decoder honors the framing invariant: it consumes exactly the bytes
//! of its own logical length and never inspects anything past them, so
//! trailing data after a well-formed value is ignored.

use std::marker::PhantomData;

use crate::buffer::Rope;
use crate::error::Error;

pub mod adapt;
pub mod aggregate;
pub mod collection;
pub mod datetime;
pub mod ident;
pub mod option;
pub mod primitive;
pub mod product;
pub mod string;
pub mod sum;

/// A positional decode outcome: the decoded value plus the count of bytes it
/// consumed, so callers can chain decoders over a shared buffer without
/// re-scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded<A> {
    pub value: A,
    pub bytes_read: usize,
}

impl<A> Decoded<A> {
    pub fn new(value: A, bytes_read: usize) -> Decoded<A> {
        Decoded { value, bytes_read }
    }

    /// Transforms the value, keeping the byte count.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Decoded<B> {
        Decoded {
            value: f(self.value),
            bytes_read: self.bytes_read,
        }
    }

    /// Transforms the value with a fallible conversion, keeping the byte
    /// count on success.
    pub fn try_map<B>(self, f: impl FnOnce(A) -> Result<B, Error>) -> Result<Decoded<B>, Error> {
        Ok(Decoded {
            value: f(self.value)?,
            bytes_read: self.bytes_read,
        })
    }
}

/// The write half of a codec: turns a value into its wire bytes.
pub trait Encoder<A> {
    /// Encodes `value` as a [`Rope`]. Total; never fails.
    fn encode(&self, value: &A) -> Rope;
}

/// The read half of a codec: reconstructs a value from a buffer position.
pub trait Decoder<A> {
    /// Decodes a value starting at `offset`, reporting how many bytes were
    /// consumed. Never reads past the value's own logical length.
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error>;
}

/// A full codec: both halves bound to the same type.
pub trait Codec<A>: Encoder<A> + Decoder<A> {}

impl<A, C: Encoder<A> + Decoder<A> + ?Sized> Codec<A> for C {}

impl<A, C: Encoder<A> + ?Sized> Encoder<A> for &C {
    fn encode(&self, value: &A) -> Rope {
        (**self).encode(value)
    }
}

impl<A, C: Decoder<A> + ?Sized> Decoder<A> for &C {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        (**self).decode(buffer, offset)
    }
}

impl<A, C: Encoder<A> + ?Sized> Encoder<A> for Box<C> {
    fn encode(&self, value: &A) -> Rope {
        (**self).encode(value)
    }
}

impl<A, C: Decoder<A> + ?Sized> Decoder<A> for Box<C> {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        (**self).decode(buffer, offset)
    }
}

/// Adapter methods available on every sized codec.
///
/// These derive a codec for a new type from an existing one without touching
/// byte-level logic, in the manner of [`Iterator`] adapters.
pub trait CodecExt<A>: Codec<A> + Sized {
    /// Maps the decoded value through a fallible conversion and the encoded
    /// value through its inverse projection.
    ///
    /// Conversion failures propagate as decode errors.
    fn map<B, D, S>(self, decode_conversion: D, encode_conversion: S) -> adapt::Mapped<Self, D, S, A, B>
    where
        D: Fn(A) -> Result<B, Error>,
        S: Fn(&B) -> A,
    {
        adapt::Mapped::new(self, decode_conversion, encode_conversion)
    }

    /// [`CodecExt::map`] for conversions that cannot fail.
    fn map_no_fail<B, D, S>(
        self,
        decode_conversion: D,
        encode_conversion: S,
    ) -> adapt::MappedNoFail<Self, D, S, A, B>
    where
        D: Fn(A) -> B,
        S: Fn(&B) -> A,
    {
        adapt::MappedNoFail::new(self, decode_conversion, encode_conversion)
    }

    /// [`CodecExt::map`] for conversions failing with an arbitrary error
    /// type; failures are wrapped into a [`Error::ConversionError`] naming
    /// the source and target types.
    fn map_try<B, E, D, S>(
        self,
        decode_conversion: D,
        encode_conversion: S,
    ) -> adapt::MappedTry<Self, D, S, A, B>
    where
        D: Fn(A) -> Result<B, E>,
        E: std::fmt::Display,
        S: Fn(&B) -> A,
    {
        adapt::MappedTry::new(self, decode_conversion, encode_conversion)
    }

    /// Rewrites this codec's decode failures without touching its success
    /// behavior, typically to add surrounding context.
    fn map_error<F>(self, f: F) -> adapt::MapError<Self, F>
    where
        F: Fn(Error) -> Error,
    {
        adapt::MapError::new(self, f)
    }

    /// Labels this codec's decode failures with `label` and the failing
    /// offset.
    fn context(self, label: &'static str) -> adapt::Context<Self> {
        adapt::Context::new(self, label)
    }
}

impl<A, C: Codec<A> + Sized> CodecExt<A> for C {}

/// Encodes `value` and immediately decodes the bytes back, yielding a deep
/// copy of the value through its wire representation.
pub fn round_trip<A, C: Codec<A>>(codec: &C, value: &A) -> Result<A, Error> {
    let bytes = codec.encode(value).to_vec();
    Ok(codec.decode(&bytes, 0)?.value)
}

/// A codec assembled from independent encode and decode halves.
pub struct Joint<SE, DE> {
    encoder: SE,
    decoder: DE,
}

/// Joins a standalone encoder and a standalone decoder for the same type
/// into a full codec, for halves that are implemented separately (such as a
/// sequence encoder paired with a custom rebuilding decoder).
pub fn join<A, SE: Encoder<A>, DE: Decoder<A>>(encoder: SE, decoder: DE) -> Joint<SE, DE> {
    Joint { encoder, decoder }
}

impl<A, SE: Encoder<A>, DE> Encoder<A> for Joint<SE, DE> {
    fn encode(&self, value: &A) -> Rope {
        self.encoder.encode(value)
    }
}

impl<A, SE, DE: Decoder<A>> Decoder<A> for Joint<SE, DE> {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        self.decoder.decode(buffer, offset)
    }
}

/// An ad-hoc codec assembled from two closures.
pub struct FnCodec<S, D, A> {
    serialize: S,
    deserialize: D,
    _marker: PhantomData<fn() -> A>,
}

/// Builds a codec directly from a serialize and a deserialize function, for
/// one-off shapes not worth a dedicated combinator.
pub fn from_fns<A, S, D>(serialize: S, deserialize: D) -> FnCodec<S, D, A>
where
    S: Fn(&A) -> Rope,
    D: Fn(&[u8], usize) -> Result<Decoded<A>, Error>,
{
    FnCodec {
        serialize,
        deserialize,
        _marker: PhantomData,
    }
}

impl<A, S, D> Encoder<A> for FnCodec<S, D, A>
where
    S: Fn(&A) -> Rope,
{
    fn encode(&self, value: &A) -> Rope {
        (self.serialize)(value)
    }
}

impl<A, S, D> Decoder<A> for FnCodec<S, D, A>
where
    D: Fn(&[u8], usize) -> Result<Decoded<A>, Error>,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        (self.deserialize)(buffer, offset)
    }
}
