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

//! Adapter combinators: bijective or partial type mappings over an existing
//! codec, used to derive domain codecs from primitive ones without touching
//! byte-level logic.
//!
//! Constructed through the [`CodecExt`](crate::codec::CodecExt) methods
//! rather than directly.

use std::any::type_name;
use std::marker::PhantomData;

use crate::buffer::Rope;
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// A codec for `B` over a codec for `A`, with a fallible decode-side
/// conversion.
pub struct Mapped<C, D, S, A, B> {
    inner: C,
    decode_conversion: D,
    encode_conversion: S,
    _marker: PhantomData<fn(A) -> B>,
}

impl<C, D, S, A, B> Mapped<C, D, S, A, B> {
    pub(crate) fn new(inner: C, decode_conversion: D, encode_conversion: S) -> Self {
        Mapped {
            inner,
            decode_conversion,
            encode_conversion,
            _marker: PhantomData,
        }
    }
}

impl<C, D, S, A, B> Encoder<B> for Mapped<C, D, S, A, B>
where
    C: Encoder<A>,
    S: Fn(&B) -> A,
{
    fn encode(&self, value: &B) -> Rope {
        self.inner.encode(&(self.encode_conversion)(value))
    }
}

impl<C, D, S, A, B> Decoder<B> for Mapped<C, D, S, A, B>
where
    C: Decoder<A>,
    D: Fn(A) -> Result<B, Error>,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<B>, Error> {
        self.inner
            .decode(buffer, offset)?
            .try_map(&self.decode_conversion)
    }
}

/// [`Mapped`] with an infallible decode-side conversion.
pub struct MappedNoFail<C, D, S, A, B> {
    inner: C,
    decode_conversion: D,
    encode_conversion: S,
    _marker: PhantomData<fn(A) -> B>,
}

impl<C, D, S, A, B> MappedNoFail<C, D, S, A, B> {
    pub(crate) fn new(inner: C, decode_conversion: D, encode_conversion: S) -> Self {
        MappedNoFail {
            inner,
            decode_conversion,
            encode_conversion,
            _marker: PhantomData,
        }
    }
}

impl<C, D, S, A, B> Encoder<B> for MappedNoFail<C, D, S, A, B>
where
    C: Encoder<A>,
    S: Fn(&B) -> A,
{
    fn encode(&self, value: &B) -> Rope {
        self.inner.encode(&(self.encode_conversion)(value))
    }
}

impl<C, D, S, A, B> Decoder<B> for MappedNoFail<C, D, S, A, B>
where
    C: Decoder<A>,
    D: Fn(A) -> B,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<B>, Error> {
        Ok(self
            .inner
            .decode(buffer, offset)?
            .map(&self.decode_conversion))
    }
}

/// [`Mapped`] whose decode-side conversion fails with an arbitrary error
/// type; the failure is wrapped into a [`Error::ConversionError`] naming the
/// source and target types.
pub struct MappedTry<C, D, S, A, B> {
    inner: C,
    decode_conversion: D,
    encode_conversion: S,
    _marker: PhantomData<fn(A) -> B>,
}

impl<C, D, S, A, B> MappedTry<C, D, S, A, B> {
    pub(crate) fn new(inner: C, decode_conversion: D, encode_conversion: S) -> Self {
        MappedTry {
            inner,
            decode_conversion,
            encode_conversion,
            _marker: PhantomData,
        }
    }
}

impl<C, D, S, A, B> Encoder<B> for MappedTry<C, D, S, A, B>
where
    C: Encoder<A>,
    S: Fn(&B) -> A,
{
    fn encode(&self, value: &B) -> Rope {
        self.inner.encode(&(self.encode_conversion)(value))
    }
}

impl<C, D, S, E, A, B> Decoder<B> for MappedTry<C, D, S, A, B>
where
    C: Decoder<A>,
    D: Fn(A) -> Result<B, E>,
    E: std::fmt::Display,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<B>, Error> {
        self.inner.decode(buffer, offset)?.try_map(|a| {
            (self.decode_conversion)(a).map_err(|e| {
                Error::conversion_error(format!(
                    "mapping from {} to {} failed: {}",
                    type_name::<A>(),
                    type_name::<B>(),
                    e
                ))
            })
        })
    }
}

/// Rewrites an existing codec's decode failures without touching its success
/// behavior.
pub struct MapError<C, F> {
    inner: C,
    rewrite: F,
}

impl<C, F> MapError<C, F> {
    pub(crate) fn new(inner: C, rewrite: F) -> Self {
        MapError { inner, rewrite }
    }
}

impl<A, C: Encoder<A>, F> Encoder<A> for MapError<C, F> {
    fn encode(&self, value: &A) -> Rope {
        self.inner.encode(value)
    }
}

impl<A, C, F> Decoder<A> for MapError<C, F>
where
    C: Decoder<A>,
    F: Fn(Error) -> Error,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        self.inner.decode(buffer, offset).map_err(&self.rewrite)
    }
}

/// Labels an existing codec's decode failures with a name and the failing
/// offset.
///
/// This is the general form of the leaf decode boundary: any decoder can be
/// wrapped so its failures localize themselves.
pub struct Context<C> {
    inner: C,
    label: &'static str,
}

impl<C> Context<C> {
    pub(crate) fn new(inner: C, label: &'static str) -> Self {
        Context { inner, label }
    }
}

impl<A, C: Encoder<A>> Encoder<A> for Context<C> {
    fn encode(&self, value: &A) -> Rope {
        self.inner.encode(value)
    }
}

impl<A, C: Decoder<A>> Decoder<A> for Context<C> {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        self.inner.decode(buffer, offset).map_err(|e| {
            Error::decode_error(format!(
                "decoding {} at offset {} failed: {}",
                self.label, offset, e
            ))
        })
    }
}
