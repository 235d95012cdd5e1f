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

//! The optional combinator: a presence discriminator ahead of the payload.

use crate::buffer::{self, Rope};
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;
use crate::types::OptionTag;

static NONE_TAG: &[u8] = &[OptionTag::None as u8];
static SOME_TAG: &[u8] = &[OptionTag::Some as u8];

/// Codec for `Option<A>` over a codec for `A`.
///
/// `None` encodes as the single byte `b'n'`; `Some(v)` as `b's'` followed by
/// the inner codec's bytes.
pub struct OptionCodec<C> {
    inner: C,
}

/// Wraps `inner` into a codec for optional values.
pub fn option<A, C: Decoder<A> + Encoder<A>>(inner: C) -> OptionCodec<C> {
    OptionCodec { inner }
}

impl<A, C: Encoder<A>> Encoder<Option<A>> for OptionCodec<C> {
    fn encode(&self, value: &Option<A>) -> Rope {
        match value {
            Some(inner) => Rope::from_static(SOME_TAG) + self.inner.encode(inner),
            None => Rope::from_static(NONE_TAG),
        }
    }
}

impl<A, C: Decoder<A>> Decoder<Option<A>> for OptionCodec<C> {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<Option<A>>, Error> {
        // read_u8 rejects both an empty buffer and an offset at or past the
        // end before any payload work happens
        let tag = buffer::read_u8(buffer, offset)?;
        match OptionTag::try_from(tag) {
            Ok(OptionTag::None) => Ok(Decoded::new(None, 1)),
            Ok(OptionTag::Some) => {
                let inner = self.inner.decode(buffer, offset + 1)?;
                Ok(Decoded::new(Some(inner.value), inner.bytes_read + 1))
            }
            Err(_) => Err(Error::unknown_discriminator(format!(
                "option: unknown discriminator {:#04x} at offset {}",
                tag, offset
            ))),
        }
    }
}
