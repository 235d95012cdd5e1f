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

use wireform_core::codec::option::option;
use wireform_core::codec::primitive::{BoolCodec, U16Codec, U32Codec, U64Codec, U8Codec};
use wireform_core::codec::product::pair;
use wireform_core::codec::string::StringCodec;
use wireform_core::codec::{Decoder, Encoder};
use wireform_core::error::Error;

#[test]
fn test_three_field_byte_layout() {
    let codec = (BoolCodec, U32Codec, StringCodec);
    let value = (true, 42u32, "hi".to_owned());

    let bytes = codec.encode(&value).to_vec();
    assert_eq!(
        bytes,
        vec![0x01, 0x2A, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, b'h', b'i']
    );

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, 11);
}

#[test]
fn test_bytes_read_is_the_field_sum() {
    let codec = (U8Codec, U16Codec, U32Codec, U64Codec);
    let bytes = codec.encode(&(1u8, 2u16, 3u32, 4u64)).to_vec();
    assert_eq!(bytes.len(), 1 + 2 + 4 + 8);
    assert_eq!(codec.decode(&bytes, 0).unwrap().bytes_read, 15);
}

#[test]
fn test_fields_concatenate_in_declared_order() {
    let codec = (U8Codec, U8Codec);
    assert_eq!(codec.encode(&(0xAB, 0xCD)).to_vec(), vec![0xAB, 0xCD]);
}

#[test]
fn test_pair_round_trip() {
    let codec = pair(StringCodec, U32Codec);
    let value = ("key".to_owned(), 7u32);
    let bytes = codec.encode(&value).to_vec();
    assert_eq!(codec.decode(&bytes, 0).unwrap().value, value);
}

#[test]
fn test_variable_width_fields_thread_the_offset() {
    let codec = (StringCodec, StringCodec, U8Codec);
    let value = ("first".to_owned(), "second one".to_owned(), 0xEEu8);
    let bytes = codec.encode(&value).to_vec();

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn test_failure_names_the_field_ordinal() {
    // field 3 of 3 is truncated
    let codec = (U8Codec, U8Codec, U32Codec);
    let err = codec.decode(&[1, 2, 3], 0).unwrap_err();
    assert!(matches!(err, Error::DecodeError(_)));
    let message = err.to_string();
    assert!(message.contains("field 3 of 3"), "message: {message}");
    assert!(message.contains("buffer out of bound"), "message: {message}");
}

#[test]
fn test_first_failure_short_circuits() {
    let codec = (U32Codec, U8Codec);
    let err = codec.decode(&[], 0).unwrap_err();
    assert!(err.to_string().contains("field 1 of 2"));
}

#[test]
fn test_arity_eight_round_trip() {
    let codec = (
        BoolCodec, U8Codec, U16Codec, U32Codec, U64Codec, StringCodec, BoolCodec, U8Codec,
    );
    let value = (
        true,
        1u8,
        2u16,
        3u32,
        4u64,
        "middle".to_owned(),
        false,
        0xFFu8,
    );
    let bytes = codec.encode(&value).to_vec();

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn test_products_compose_with_other_combinators() {
    let codec = (U8Codec, option((U16Codec, StringCodec)));
    let value = (9u8, Some((512u16, "inner".to_owned())));
    let bytes = codec.encode(&value).to_vec();

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn test_trailing_data_ignored() {
    let codec = (U8Codec, U16Codec);
    let mut bytes = codec.encode(&(1u8, 2u16)).to_vec();
    bytes.extend_from_slice(&[9, 9, 9, 9]);

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, (1u8, 2u16));
    assert_eq!(decoded.bytes_read, 3);
}
