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

//! The aggregate combinator: a fold over a sequence of meta descriptors.
//!
//! Where products fix their arity statically, `aggregate` expresses codecs
//! whose shape is data-driven: a list of metas (for example, one per
//! configured sub-field) plus a serialize and a deserialize step function
//! parameterized by each meta. Encoding folds over the metas concatenating
//! each step's bytes; decoding folds over the metas threading the offset and
//! an accumulator, stopping at the first failure.

use crate::buffer::Rope;
use crate::codec::{Decoded, Decoder, Encoder};
use crate::error::Error;

/// Codec for `A` assembled from per-meta serialize/deserialize steps.
pub struct AggregateCodec<A, M, S, D> {
    metas: Vec<M>,
    start: A,
    serialize_step: S,
    deserialize_step: D,
}

/// Builds an aggregate codec.
///
/// `start` seeds the accumulator of every decode call and is cloned per
/// call. Each deserialize step receives the buffer, the absolute offset to
/// read at, the current meta and the accumulator so far, and returns the
/// updated accumulator plus the bytes the step consumed.
pub fn aggregate<A, M, S, D>(
    metas: Vec<M>,
    start: A,
    serialize_step: S,
    deserialize_step: D,
) -> AggregateCodec<A, M, S, D>
where
    A: Clone,
    S: Fn(&A, &M) -> Rope,
    D: Fn(&[u8], usize, &M, A) -> Result<Decoded<A>, Error>,
{
    AggregateCodec {
        metas,
        start,
        serialize_step,
        deserialize_step,
    }
}

impl<A, M, S, D> Encoder<A> for AggregateCodec<A, M, S, D>
where
    S: Fn(&A, &M) -> Rope,
{
    fn encode(&self, value: &A) -> Rope {
        self.metas
            .iter()
            .fold(Rope::new(), |rope, meta| {
                rope + (self.serialize_step)(value, meta)
            })
    }
}

impl<A, M, S, D> Decoder<A> for AggregateCodec<A, M, S, D>
where
    A: Clone,
    D: Fn(&[u8], usize, &M, A) -> Result<Decoded<A>, Error>,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<A>, Error> {
        let mut acc = self.start.clone();
        let mut read = 0usize;
        for meta in &self.metas {
            let step = (self.deserialize_step)(buffer, offset + read, meta, acc)?;
            acc = step.value;
            read += step.bytes_read;
        }
        Ok(Decoded::new(acc, read))
    }
}
