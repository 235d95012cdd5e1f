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

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use wireform_core::codec::collection;
use wireform_core::codec::primitive::{U16Codec, U32Codec, U8Codec};
use wireform_core::codec::string::StringCodec;
use wireform_core::codec::{Decoder, Encoder};
use wireform_core::error::Error;

#[test]
fn test_vec_wire_layout() {
    let codec = collection::vec(U16Codec);
    let bytes = codec.encode(&vec![0x0102u16, 0x0304]).to_vec();
    assert_eq!(bytes, vec![0x02, 0x00, 0x00, 0x00, 0x02, 0x01, 0x04, 0x03]);
}

#[test]
fn test_vec_round_trip_and_length_accounting() {
    let codec = collection::vec(StringCodec);
    let value = vec!["one".to_owned(), "two".to_owned(), "".to_owned()];
    let bytes = codec.encode(&value).to_vec();

    let element_bytes: usize = value.iter().map(|s| 4 + s.len()).sum();
    assert_eq!(bytes.len(), 4 + element_bytes);

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, 4 + element_bytes);
}

#[test]
fn test_empty_collection_is_just_the_count() {
    let codec = collection::vec(U32Codec);
    let bytes = codec.encode(&Vec::new()).to_vec();
    assert_eq!(bytes, vec![0, 0, 0, 0]);
    let decoded = codec.decode(&bytes, 0).unwrap();
    assert!(decoded.value.is_empty());
    assert_eq!(decoded.bytes_read, 4);
}

#[test]
fn test_sets_round_trip() {
    let hash_codec = collection::hash_set(U32Codec);
    let value: HashSet<u32> = [3u32, 1, 4, 1, 5].into_iter().collect();
    let bytes = hash_codec.encode(&value).to_vec();
    assert_eq!(hash_codec.decode(&bytes, 0).unwrap().value, value);

    let btree_codec = collection::btree_set(StringCodec);
    let value: BTreeSet<String> = ["b".to_owned(), "a".to_owned()].into_iter().collect();
    let bytes = btree_codec.encode(&value).to_vec();
    assert_eq!(btree_codec.decode(&bytes, 0).unwrap().value, value);
}

#[test]
fn test_maps_round_trip() {
    let codec = collection::hash_map(StringCodec, U32Codec);
    let mut value = HashMap::new();
    value.insert("alpha".to_owned(), 1u32);
    value.insert("beta".to_owned(), 2);
    let bytes = codec.encode(&value).to_vec();

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, bytes.len());

    let codec = collection::btree_map(U8Codec, StringCodec);
    let mut value = BTreeMap::new();
    value.insert(1u8, "one".to_owned());
    value.insert(2, "two".to_owned());
    let bytes = codec.encode(&value).to_vec();
    assert_eq!(codec.decode(&bytes, 0).unwrap().value, value);
}

#[test]
fn test_btree_map_wire_layout_is_count_then_pairs() {
    let codec = collection::btree_map(U8Codec, U8Codec);
    let mut value = BTreeMap::new();
    value.insert(1u8, 10u8);
    value.insert(2, 20);
    assert_eq!(
        codec.encode(&value).to_vec(),
        vec![0x02, 0x00, 0x00, 0x00, 1, 10, 2, 20]
    );
}

#[test]
fn test_declared_count_exceeding_data_names_the_element() {
    // count says 3, data holds 2 elements
    let codec = collection::vec(U16Codec);
    let bytes = vec![0x03, 0x00, 0x00, 0x00, 1, 0, 2, 0];
    let err = codec.decode(&bytes, 0).unwrap_err();
    assert!(matches!(err, Error::DecodeError(_)));
    let message = err.to_string();
    assert!(message.contains("element 2 of 3"), "message: {message}");
}

#[test]
fn test_huge_declared_count_fails_instead_of_allocating() {
    let codec = collection::vec(U32Codec);
    let bytes = vec![0xFF, 0xFF, 0xFF, 0x7F];
    assert!(codec.decode(&bytes, 0).is_err());
}

#[test]
fn test_negative_count_is_invalid_data() {
    let codec = collection::vec(U8Codec);
    let bytes = vec![0xFF, 0xFF, 0xFF, 0xFF, 1, 2];
    assert!(matches!(
        codec.decode(&bytes, 0),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_bad_map_value_names_entry_and_side() {
    let codec = collection::hash_map(U8Codec, U16Codec);
    // one entry, key present, value truncated
    let bytes = vec![0x01, 0x00, 0x00, 0x00, 7, 0xAB];
    let err = codec.decode(&bytes, 0).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("value of entry 0 of 1"),
        "message: {message}"
    );
}

#[test]
fn test_nested_collections() {
    let codec = collection::vec(collection::vec(U8Codec));
    let value = vec![vec![1u8, 2], vec![], vec![3]];
    let bytes = codec.encode(&value).to_vec();

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn test_trailing_data_ignored() {
    let codec = collection::vec(U8Codec);
    let mut bytes = codec.encode(&vec![5u8, 6]).to_vec();
    let expected_read = bytes.len();
    bytes.extend_from_slice(&[0xEE; 8]);

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, vec![5, 6]);
    assert_eq!(decoded.bytes_read, expected_read);
}
