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

//! Date/time codecs over an 8-byte signed epoch offset.
//!
//! Two resolutions are provided: microseconds for lossless round-tripping of
//! sub-millisecond timestamps, and milliseconds for interoperability with
//! formats that store coarse unix timestamps. Both delegate the byte work to
//! [`I64Codec`]; an epoch offset the target resolution cannot represent is a
//! decode error, not a clamped value.

use chrono::{DateTime, Utc};

use crate::buffer::Rope;
use crate::codec::primitive::I64Codec;
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// Codec for [`DateTime<Utc>`] as unix microseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeMicrosCodec;

impl Encoder<DateTime<Utc>> for DateTimeMicrosCodec {
    fn encode(&self, value: &DateTime<Utc>) -> Rope {
        I64Codec.encode(&value.timestamp_micros())
    }
}

impl Decoder<DateTime<Utc>> for DateTimeMicrosCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<DateTime<Utc>>, Error> {
        I64Codec.decode(buffer, offset)?.try_map(|micros| {
            DateTime::from_timestamp_micros(micros).ok_or_else(|| {
                Error::conversion_error(format!(
                    "timestamp {} microseconds is out of range",
                    micros
                ))
            })
        })
    }
}

/// Codec for [`DateTime<Utc>`] as unix milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeMillisCodec;

impl Encoder<DateTime<Utc>> for DateTimeMillisCodec {
    fn encode(&self, value: &DateTime<Utc>) -> Rope {
        I64Codec.encode(&value.timestamp_millis())
    }
}

impl Decoder<DateTime<Utc>> for DateTimeMillisCodec {
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<DateTime<Utc>>, Error> {
        I64Codec.decode(buffer, offset)?.try_map(|millis| {
            DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                Error::conversion_error(format!(
                    "timestamp {} milliseconds is out of range",
                    millis
                ))
            })
        })
    }
}
