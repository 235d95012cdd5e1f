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

//! Product combinators: a tuple of codecs is a codec for the tuple of their
//! types, for arities 2 through 8.
//!
//! Encoding concatenates each field's bytes in declared order with no tags;
//! the schema lives in code, not in the bytes. Decoding is pure sequential
//! composition: field 1 at `offset`, field 2 at `offset + bytes_read(1)`,
//! and so on, short-circuiting on the first failure with an error naming the
//! failing field's ordinal position. No backtracking, no re-reading.
//!
//! Domain codecs derive from tuple codecs through `map_no_fail`:
//!
//! ```
//! use wireform_core::codec::primitive::{BoolCodec, U32Codec};
//! use wireform_core::codec::CodecExt;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Probe {
//!     enabled: bool,
//!     interval: u32,
//! }
//!
//! let codec = (BoolCodec, U32Codec).map_no_fail(
//!     |(enabled, interval)| Probe { enabled, interval },
//!     |p: &Probe| (p.enabled, p.interval),
//! );
//! ```

use crate::buffer::Rope;
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// Pairs a key codec with a value codec, the product-of-2 used by map
/// codecs for their entries.
pub fn pair<K, V, KC, VC>(key: KC, value: VC) -> (KC, VC)
where
    KC: Encoder<K> + Decoder<K>,
    VC: Encoder<V> + Decoder<V>,
{
    (key, value)
}

macro_rules! impl_product_codec {
    ($arity:literal => $(($idx:tt, $C:ident, $A:ident)),+) => {
        impl<$($A,)+ $($C,)+> Encoder<($($A,)+)> for ($($C,)+)
        where
            $($C: Encoder<$A>,)+
        {
            fn encode(&self, value: &($($A,)+)) -> Rope {
                let mut rope = Rope::new();
                $( rope = rope + self.$idx.encode(&value.$idx); )+
                rope
            }
        }

        impl<$($A,)+ $($C,)+> Decoder<($($A,)+)> for ($($C,)+)
        where
            $($C: Decoder<$A>,)+
        {
            fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<($($A,)+)>, Error> {
                let mut read = 0usize;
                let value = ($(
                    {
                        let field = self.$idx.decode(buffer, offset + read).map_err(|e| {
                            Error::decode_error(format!(
                                "product{}: field {} of {} failed: {}",
                                $arity,
                                $idx + 1usize,
                                $arity,
                                e
                            ))
                        })?;
                        read += field.bytes_read;
                        field.value
                    },
                )+);
                Ok(Decoded::new(value, read))
            }
        }
    };
}

impl_product_codec!(2 => (0, C0, A0), (1, C1, A1));
impl_product_codec!(3 => (0, C0, A0), (1, C1, A1), (2, C2, A2));
impl_product_codec!(4 => (0, C0, A0), (1, C1, A1), (2, C2, A2), (3, C3, A3));
impl_product_codec!(5 => (0, C0, A0), (1, C1, A1), (2, C2, A2), (3, C3, A3), (4, C4, A4));
impl_product_codec!(6 => (0, C0, A0), (1, C1, A1), (2, C2, A2), (3, C3, A3), (4, C4, A4), (5, C5, A5));
impl_product_codec!(7 => (0, C0, A0), (1, C1, A1), (2, C2, A2), (3, C3, A3), (4, C4, A4), (5, C5, A5), (6, C6, A6));
impl_product_codec!(8 => (0, C0, A0), (1, C1, A1), (2, C2, A2), (3, C3, A3), (4, C4, A4), (5, C5, A5), (6, C6, A6), (7, C7, A7));
