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

//! Homogeneous collection combinators.
//!
//! A collection encodes as a 4-byte element count followed by each element's
//! bytes in iteration order. The decoded container is rebuilt through
//! [`FromIterator`], so the same element codec produces a `Vec`, a set, or a
//! map depending only on the target type. A declared count that outruns the
//! available bytes fails with an element-index-identified error, never a
//! silent short collection; an absurd count costs nothing up front because
//! elements materialize one at a time.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::buffer::{self, Rope, LEN_PREFIX_WIDTH};
use crate::codec::{Codec, Decoded, Decoder, Encoder};
use crate::error::Error;

/// Codec for a homogeneous sequence rebuilt into container `C`.
pub struct SeqCodec<C, A, EC> {
    elem: EC,
    _marker: PhantomData<fn() -> (C, A)>,
}

/// Wraps an element codec into a codec for any [`FromIterator`] container.
pub fn seq<C, A, EC: Codec<A>>(elem: EC) -> SeqCodec<C, A, EC> {
    SeqCodec {
        elem,
        _marker: PhantomData,
    }
}

/// [`seq`] pinned to `Vec<A>`.
pub fn vec<A, EC: Codec<A>>(elem: EC) -> SeqCodec<Vec<A>, A, EC> {
    seq(elem)
}

/// [`seq`] pinned to `HashSet<A>`.
pub fn hash_set<A: Eq + Hash, EC: Codec<A>>(elem: EC) -> SeqCodec<HashSet<A>, A, EC> {
    seq(elem)
}

/// [`seq`] pinned to `BTreeSet<A>`.
pub fn btree_set<A: Ord, EC: Codec<A>>(elem: EC) -> SeqCodec<BTreeSet<A>, A, EC> {
    seq(elem)
}

impl<C, A, EC> Encoder<C> for SeqCodec<C, A, EC>
where
    EC: Encoder<A>,
    for<'a> &'a C: IntoIterator<Item = &'a A>,
{
    fn encode(&self, value: &C) -> Rope {
        let mut count = 0usize;
        let mut body = Rope::new();
        for item in value {
            body = body + self.elem.encode(item);
            count += 1;
        }
        buffer::len_prefix(count) + body
    }
}

impl<C, A, EC> Decoder<C> for SeqCodec<C, A, EC>
where
    EC: Decoder<A>,
    C: FromIterator<A>,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<C>, Error> {
        let count = buffer::read_len(buffer, offset)?;
        let mut read = LEN_PREFIX_WIDTH;
        let value = (0..count)
            .map(|idx| match self.elem.decode(buffer, offset + read) {
                Ok(elem) => {
                    read += elem.bytes_read;
                    Ok(elem.value)
                }
                Err(e) => Err(Error::decode_error(format!(
                    "collection: element {} of {} failed: {}",
                    idx, count, e
                ))),
            })
            .collect::<Result<C, Error>>()?;
        Ok(Decoded::new(value, read))
    }
}

/// Codec for a map rebuilt into container `M`, encoded as a count-prefixed
/// sequence of key/value pairs.
pub struct MapCodec<M, K, V, KC, VC> {
    key: KC,
    value: VC,
    _marker: PhantomData<fn() -> (M, K, V)>,
}

/// Combines a key and a value codec into a codec for any map-shaped
/// [`FromIterator`] container.
pub fn map<M, K, V, KC: Codec<K>, VC: Codec<V>>(key: KC, value: VC) -> MapCodec<M, K, V, KC, VC> {
    MapCodec {
        key,
        value,
        _marker: PhantomData,
    }
}

/// [`map`] pinned to `HashMap<K, V>`.
pub fn hash_map<K: Eq + Hash, V, KC: Codec<K>, VC: Codec<V>>(
    key: KC,
    value: VC,
) -> MapCodec<HashMap<K, V>, K, V, KC, VC> {
    map(key, value)
}

/// [`map`] pinned to `BTreeMap<K, V>`.
pub fn btree_map<K: Ord, V, KC: Codec<K>, VC: Codec<V>>(
    key: KC,
    value: VC,
) -> MapCodec<BTreeMap<K, V>, K, V, KC, VC> {
    map(key, value)
}

impl<M, K, V, KC, VC> Encoder<M> for MapCodec<M, K, V, KC, VC>
where
    KC: Encoder<K>,
    VC: Encoder<V>,
    for<'a> &'a M: IntoIterator<Item = (&'a K, &'a V)>,
{
    fn encode(&self, value: &M) -> Rope {
        let mut count = 0usize;
        let mut body = Rope::new();
        for (k, v) in value {
            body = body + self.key.encode(k) + self.value.encode(v);
            count += 1;
        }
        buffer::len_prefix(count) + body
    }
}

impl<M, K, V, KC, VC> Decoder<M> for MapCodec<M, K, V, KC, VC>
where
    KC: Decoder<K>,
    VC: Decoder<V>,
    M: FromIterator<(K, V)>,
{
    fn decode(&self, buffer: &[u8], offset: usize) -> Result<Decoded<M>, Error> {
        let count = buffer::read_len(buffer, offset)?;
        let mut read = LEN_PREFIX_WIDTH;
        let value = (0..count)
            .map(|idx| {
                let k = self.key.decode(buffer, offset + read).map_err(|e| {
                    Error::decode_error(format!(
                        "map: key of entry {} of {} failed: {}",
                        idx, count, e
                    ))
                })?;
                read += k.bytes_read;
                let v = self.value.decode(buffer, offset + read).map_err(|e| {
                    Error::decode_error(format!(
                        "map: value of entry {} of {} failed: {}",
                        idx, count, e
                    ))
                })?;
                read += v.bytes_read;
                Ok((k.value, v.value))
            })
            .collect::<Result<M, Error>>()?;
        Ok(Decoded::new(value, read))
    }
}
