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

//! Fixed-width primitive codecs.
//!
//! Every codec here reads exactly its declared width, little-endian. The
//! width is exposed as an associated `WIDTH` constant so composite formats
//! can be sized without encoding.

use byteorder::{ByteOrder, LittleEndian};

use crate::buffer::{self, Rope};
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// Codec for `bool` as a single byte.
///
/// Encodes `true` as `1` and `false` as `0`; any nonzero byte decodes as
/// `true`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolCodec;

impl BoolCodec {
    pub const WIDTH: usize = 1;
}

impl Encoder<bool> for BoolCodec {
    fn encode(&self, value: &bool) -> Rope {
        Rope::from_static(if *value { &[1] } else { &[0] })
    }
}

impl Decoder<bool> for BoolCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<bool>, Error> {
        let byte = buffer::read_u8(buffer, offset)?;
        Ok(Decoded::new(byte != 0, Self::WIDTH))
    }
}

/// Codec for `u8` as a single byte.
#[derive(Clone, Copy, Debug, Default)]
pub struct U8Codec;

impl U8Codec {
    pub const WIDTH: usize = 1;
}

impl Encoder<u8> for U8Codec {
    fn encode(&self, value: &u8) -> Rope {
        Rope::from_vec(vec![*value])
    }
}

impl Decoder<u8> for U8Codec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<u8>, Error> {
        Ok(Decoded::new(buffer::read_u8(buffer, offset)?, Self::WIDTH))
    }
}

/// Codec for `i8` as a single byte.
#[derive(Clone, Copy, Debug, Default)]
pub struct I8Codec;

impl I8Codec {
    pub const WIDTH: usize = 1;
}

impl Encoder<i8> for I8Codec {
    fn encode(&self, value: &i8) -> Rope {
        Rope::from_vec(vec![*value as u8])
    }
}

impl Decoder<i8> for I8Codec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<i8>, Error> {
        Ok(Decoded::new(buffer::read_i8(buffer, offset)?, Self::WIDTH))
    }
}

macro_rules! numeric_codec {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $width:expr, $read:path, $write:path) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $name {
            pub const WIDTH: usize = $width;
        }

        impl Encoder<$ty> for $name {
            fn encode(&self, value: &$ty) -> Rope {
                let mut buf = [0u8; $width];
                $write(&mut buf, *value);
                Rope::from_vec(buf.to_vec())
            }
        }

        impl Decoder<$ty> for $name {
            fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<$ty>, Error> {
                Ok(Decoded::new($read(buffer, offset)?, Self::WIDTH))
            }
        }
    };
}

numeric_codec!(
    /// Codec for `u16` as 2 little-endian bytes.
    U16Codec, u16, 2, buffer::read_u16, LittleEndian::write_u16
);
numeric_codec!(
    /// Codec for `i16` as 2 little-endian bytes.
    I16Codec, i16, 2, buffer::read_i16, LittleEndian::write_i16
);
numeric_codec!(
    /// Codec for `u32` as 4 little-endian bytes.
    U32Codec, u32, 4, buffer::read_u32, LittleEndian::write_u32
);
numeric_codec!(
    /// Codec for `i32` as 4 little-endian bytes.
    I32Codec, i32, 4, buffer::read_i32, LittleEndian::write_i32
);
numeric_codec!(
    /// Codec for `u64` as 8 little-endian bytes.
    U64Codec, u64, 8, buffer::read_u64, LittleEndian::write_u64
);
numeric_codec!(
    /// Codec for `i64` as 8 little-endian bytes.
    I64Codec, i64, 8, buffer::read_i64, LittleEndian::write_i64
);
numeric_codec!(
    /// Codec for `f32` as 4 little-endian bytes.
    F32Codec, f32, 4, buffer::read_f32, LittleEndian::write_f32
);
numeric_codec!(
    /// Codec for `f64` as 8 little-endian bytes.
    F64Codec, f64, 8, buffer::read_f64, LittleEndian::write_f64
);

/// Codec for `()`: encodes zero bytes and decodes without consuming any.
///
/// Useful as the payload of parameterless variants; a domain type with no
/// fields derives its codec via `UnitCodec.map_no_fail(..)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitCodec;

impl Encoder<()> for UnitCodec {
    fn encode(&self, _value: &()) -> Rope {
        Rope::new()
    }
}

impl Decoder<()> for UnitCodec {
    fn decode(&self, _buffer: &[u8], _offset: usize) -> Result<Decoded<()>, Error> {
        Ok(Decoded::new((), 0))
    }
}
