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

//! Length-prefixed variable-width codecs: strings and raw byte arrays.
//!
//! Both encode as a 4-byte `i32` count followed by the payload. For strings
//! the count is the UTF-8 byte length, not the character count.

use crate::buffer::{self, Rope, LEN_PREFIX_WIDTH};
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// Codec for UTF-8 strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringCodec;

impl Encoder<String> for StringCodec {
    fn encode(&self, value: &String) -> Rope {
        buffer::len_prefix(value.len()) + Rope::from_vec(value.as_bytes().to_vec())
    }
}

impl Decoder<String> for StringCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<String>, Error> {
        let len = buffer::read_len(buffer, offset)?;
        let bytes = buffer::read_exact(buffer, offset + LEN_PREFIX_WIDTH, len)?;
        let value = std::str::from_utf8(bytes)
            .map_err(|e| {
                Error::invalid_data(format!(
                    "string payload at offset {} is not valid UTF-8: {}",
                    offset + LEN_PREFIX_WIDTH,
                    e
                ))
            })?
            .to_owned();
        Ok(Decoded::new(value, LEN_PREFIX_WIDTH + len))
    }
}

/// Codec for raw byte arrays.
#[derive(Clone, Copy, Debug, Default)]
pub struct BytesCodec;

impl Encoder<Vec<u8>> for BytesCodec {
    fn encode(&self, value: &Vec<u8>) -> Rope {
        buffer::len_prefix(value.len()) + Rope::from_vec(value.clone())
    }
}

impl Decoder<Vec<u8>> for BytesCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<Vec<u8>>, Error> {
        let len = buffer::read_len(buffer, offset)?;
        let bytes = buffer::read_exact(buffer, offset + LEN_PREFIX_WIDTH, len)?;
        Ok(Decoded::new(bytes.to_vec(), LEN_PREFIX_WIDTH + len))
    }
}
