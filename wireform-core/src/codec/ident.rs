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

//! Identifier codecs: UUIDs and URLs.

use url::Url;
use uuid::Uuid;

use crate::buffer::{self, Rope};
use crate::codec::string::StringCodec;
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// Codec for [`Uuid`] as its 16-byte RFC 4122 binary layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidCodec;

impl UuidCodec {
    pub const WIDTH: usize = 16;
}

impl Encoder<Uuid> for UuidCodec {
    fn encode(&self, value: &Uuid) -> Rope {
        Rope::from_vec(value.as_bytes().to_vec())
    }
}

impl Decoder<Uuid> for UuidCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<Uuid>, Error> {
        let bytes = buffer::read_exact(buffer, offset, Self::WIDTH)?;
        let value = Uuid::from_slice(bytes)
            .map_err(|e| Error::invalid_data(format!("invalid UUID at offset {}: {}", offset, e)))?;
        Ok(Decoded::new(value, Self::WIDTH))
    }
}

/// Codec for [`Url`] as a length-prefixed UTF-8 string of its textual form.
///
/// Texts that do not parse back into a URL are reported as conversion
/// failures.
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlCodec;

impl Encoder<Url> for UrlCodec {
    fn encode(&self, value: &Url) -> Rope {
        StringCodec.encode(&value.as_str().to_owned())
    }
}

impl Decoder<Url> for UrlCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<Url>, Error> {
        StringCodec.decode(buffer, offset)?.try_map(|text| {
            Url::parse(&text)
                .map_err(|e| Error::conversion_error(format!("invalid URL '{}': {}", text, e)))
        })
    }
}
