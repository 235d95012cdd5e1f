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

//! Sum-type combinators: two-way [`Either`] and three-way [`OneOf`].
//!
//! Both follow the optional combinator's shape (a tag byte selects which
//! inner codec applies to the remaining bytes) and the product combinator's
//! error-reporting style: a failing payload decode is annotated with the
//! branch it belongs to.

use crate::buffer::{self, Rope};
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;
use crate::types::{Either, EitherTag, OneOf, OneOfTag};

static LEFT_TAG: &[u8] = &[EitherTag::Left as u8];
static RIGHT_TAG: &[u8] = &[EitherTag::Right as u8];
static A_TAG: &[u8] = &[OneOfTag::A as u8];
static B_TAG: &[u8] = &[OneOfTag::B as u8];
static C_TAG: &[u8] = &[OneOfTag::C as u8];

/// Codec for [`Either<L, R>`]: tag `b'l'` or `b'r'`, then the branch bytes.
pub struct EitherCodec<CL, CR> {
    left: CL,
    right: CR,
}

/// Combines two codecs into a codec for their two-way sum.
pub fn either<L, R, CL, CR>(left: CL, right: CR) -> EitherCodec<CL, CR>
where
    CL: Encoder<L> + Decoder<L>,
    CR: Encoder<R> + Decoder<R>,
{
    EitherCodec { left, right }
}

impl<L, R, CL: Encoder<L>, CR: Encoder<R>> Encoder<Either<L, R>> for EitherCodec<CL, CR> {
    fn encode(&self, value: &Either<L, R>) -> Rope {
        match value {
            Either::Left(l) => Rope::from_static(LEFT_TAG) + self.left.encode(l),
            Either::Right(r) => Rope::from_static(RIGHT_TAG) + self.right.encode(r),
        }
    }
}

impl<L, R, CL: Decoder<L>, CR: Decoder<R>> Decoder<Either<L, R>> for EitherCodec<CL, CR> {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<Either<L, R>>, Error> {
        let tag = buffer::read_u8(buffer, offset)?;
        match EitherTag::try_from(tag) {
            Ok(EitherTag::Left) => {
                let branch = self.left.decode(buffer, offset + 1).map_err(|e| {
                    Error::decode_error(format!("either: left branch failed: {}", e))
                })?;
                Ok(Decoded::new(Either::Left(branch.value), branch.bytes_read + 1))
            }
            Ok(EitherTag::Right) => {
                let branch = self.right.decode(buffer, offset + 1).map_err(|e| {
                    Error::decode_error(format!("either: right branch failed: {}", e))
                })?;
                Ok(Decoded::new(Either::Right(branch.value), branch.bytes_read + 1))
            }
            Err(_) => Err(Error::unknown_discriminator(format!(
                "either: unknown discriminator {:#04x} at offset {}",
                tag, offset
            ))),
        }
    }
}

/// Codec for [`OneOf<A, B, C>`]: tag `b'a'`, `b'b'` or `b'c'`, then the
/// branch bytes.
pub struct OneOfCodec<CA, CB, CC> {
    a: CA,
    b: CB,
    c: CC,
}

/// Combines three codecs into a codec for their three-way sum.
pub fn one_of<A, B, C, CA, CB, CC>(a: CA, b: CB, c: CC) -> OneOfCodec<CA, CB, CC>
where
    CA: Encoder<A> + Decoder<A>,
    CB: Encoder<B> + Decoder<B>,
    CC: Encoder<C> + Decoder<C>,
{
    OneOfCodec { a, b, c }
}

impl<A, B, C, CA, CB, CC> Encoder<OneOf<A, B, C>> for OneOfCodec<CA, CB, CC>
where
    CA: Encoder<A>,
    CB: Encoder<B>,
    CC: Encoder<C>,
{
    fn encode(&self, value: &OneOf<A, B, C>) -> Rope {
        match value {
            OneOf::A(a) => Rope::from_static(A_TAG) + self.a.encode(a),
            OneOf::B(b) => Rope::from_static(B_TAG) + self.b.encode(b),
            OneOf::C(c) => Rope::from_static(C_TAG) + self.c.encode(c),
        }
    }
}

impl<A, B, C, CA, CB, CC> Decoder<OneOf<A, B, C>> for OneOfCodec<CA, CB, CC>
where
    CA: Decoder<A>,
    CB: Decoder<B>,
    CC: Decoder<C>,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<OneOf<A, B, C>>, Error> {
        let tag = buffer::read_u8(buffer, offset)?;
        let branch = match OneOfTag::try_from(tag) {
            Ok(OneOfTag::A) => self
                .a
                .decode(buffer, offset + 1)
                .map(|d| d.map(OneOf::A))
                .map_err(|e| Error::decode_error(format!("oneOf: branch a failed: {}", e)))?,
            Ok(OneOfTag::B) => self
                .b
                .decode(buffer, offset + 1)
                .map(|d| d.map(OneOf::B))
                .map_err(|e| Error::decode_error(format!("oneOf: branch b failed: {}", e)))?,
            Ok(OneOfTag::C) => self
                .c
                .decode(buffer, offset + 1)
                .map(|d| d.map(OneOf::C))
                .map_err(|e| Error::decode_error(format!("oneOf: branch c failed: {}", e)))?,
            Err(_) => {
                return Err(Error::unknown_discriminator(format!(
                    "oneOf: unknown discriminator {:#04x} at offset {}",
                    tag, offset
                )))
            }
        };
        Ok(Decoded::new(branch.value, branch.bytes_read + 1))
    }
}
