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

//! # Wireform Core
//!
//! A composable binary serialization framework: a small set of primitive
//! codecs and combinators that build a byte-exact reader/writer for an
//! arbitrary typed value out of codecs for its parts.
//!
//! ## Architecture
//!
//! - **`buffer`**: the [`Rope`](buffer::Rope) byte builder every encoder
//!   returns, plus checked little-endian reads every decoder is built on
//! - **`codec`**: the [`Encoder`](codec::Encoder) / [`Decoder`](codec::Decoder)
//!   contracts, primitive codecs, and the structural and adapter combinators
//! - **`types`**: discriminator tag bytes and the `Either`/`OneOf` sum values
//! - **`error`**: the typed failure every decoder returns
//! - **`pool`**: an optional mutex-guarded object pool for transient buffers
//!
//! ## Key concepts
//!
//! A codec is a stateless, reusable value: build the combinator tree once,
//! share it freely (including across threads) and use it for any number of
//! `encode`/`decode` calls. Encoding is total and produces a rope whose
//! chunks are concatenated in O(1); only the outermost caller linearizes.
//! Decoding is positional: every decoder reports the bytes it consumed so
//! combinators can thread an offset forward without re-scanning, and every
//! malformed input comes back as a typed [`Error`](error::Error), never a
//! panic.
//!
//! The wire format is implicit in the codec tree: products concatenate
//! fields with no tags, optionals and sums spend one discriminator byte,
//! strings and collections carry a 4-byte count. All multi-byte values are
//! little-endian on every host.
//!
//! ## Usage
//!
//! ```
//! use wireform_core::codec::primitive::{BoolCodec, U32Codec};
//! use wireform_core::codec::string::StringCodec;
//! use wireform_core::codec::{Decoder, Encoder};
//!
//! let codec = (BoolCodec, U32Codec, StringCodec);
//! let value = (true, 42u32, "hi".to_owned());
//!
//! let bytes = codec.encode(&value).to_vec();
//! let decoded = codec.decode(&bytes, 0).unwrap();
//! assert_eq!(decoded.value, value);
//! assert_eq!(decoded.bytes_read, bytes.len());
//! ```

pub mod buffer;
pub mod codec;
pub mod error;
pub mod pool;
pub mod types;

pub use buffer::Rope;
pub use codec::{round_trip, Codec, CodecExt, Decoded, Decoder, Encoder};
pub use error::Error;
pub use types::{Either, OneOf};
