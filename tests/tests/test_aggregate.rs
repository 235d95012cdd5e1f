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

use wireform_core::codec::aggregate::aggregate;
use wireform_core::codec::primitive::{BoolCodec, U32Codec};
use wireform_core::codec::string::StringCodec;
use wireform_core::codec::{Decoded, Decoder, Encoder};
use wireform_core::error::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Field {
    Retries,
    Verbose,
    Endpoint,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Settings {
    retries: u32,
    verbose: bool,
    endpoint: String,
}

// the field list stands in for externally configured sub-fields: the codec's
// shape follows the metas, not a fixed arity
fn settings_codec(
    fields: Vec<Field>,
) -> impl Encoder<Settings> + Decoder<Settings> {
    aggregate(
        fields,
        Settings::default(),
        |s: &Settings, field: &Field| match field {
            Field::Retries => U32Codec.encode(&s.retries),
            Field::Verbose => BoolCodec.encode(&s.verbose),
            Field::Endpoint => StringCodec.encode(&s.endpoint),
        },
        |buffer: &[u8], offset: usize, field: &Field, acc: Settings| match field {
            Field::Retries => {
                let step = U32Codec.decode(buffer, offset)?;
                Ok(Decoded::new(
                    Settings {
                        retries: step.value,
                        ..acc
                    },
                    step.bytes_read,
                ))
            }
            Field::Verbose => {
                let step = BoolCodec.decode(buffer, offset)?;
                Ok(Decoded::new(
                    Settings {
                        verbose: step.value,
                        ..acc
                    },
                    step.bytes_read,
                ))
            }
            Field::Endpoint => {
                let step = StringCodec.decode(buffer, offset)?;
                Ok(Decoded::new(
                    Settings {
                        endpoint: step.value,
                        ..acc
                    },
                    step.bytes_read,
                ))
            }
        },
    )
}

#[test]
fn test_round_trip_over_all_fields() {
    let codec = settings_codec(vec![Field::Retries, Field::Verbose, Field::Endpoint]);
    let value = Settings {
        retries: 4,
        verbose: true,
        endpoint: "tcp://broker:9000".to_owned(),
    };
    let bytes = codec.encode(&value).to_vec();
    assert_eq!(bytes.len(), 4 + 1 + 4 + value.endpoint.len());

    let decoded = codec.decode(&bytes, 0).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn test_meta_subset_reads_and_writes_only_those_fields() {
    let codec = settings_codec(vec![Field::Verbose]);
    let value = Settings {
        retries: 123,
        verbose: true,
        endpoint: "ignored".to_owned(),
    };
    let bytes = codec.encode(&value).to_vec();
    assert_eq!(bytes, vec![1]);

    let decoded = codec.decode(&bytes, 0).unwrap();
    // untouched fields keep the starting value
    assert_eq!(
        decoded.value,
        Settings {
            verbose: true,
            ..Settings::default()
        }
    );
    assert_eq!(decoded.bytes_read, 1);
}

#[test]
fn test_meta_order_defines_the_wire_order() {
    let forward = settings_codec(vec![Field::Retries, Field::Verbose]);
    let backward = settings_codec(vec![Field::Verbose, Field::Retries]);
    let value = Settings {
        retries: 0x0102_0304,
        verbose: true,
        ..Settings::default()
    };
    assert_eq!(
        forward.encode(&value).to_vec(),
        vec![0x04, 0x03, 0x02, 0x01, 0x01]
    );
    assert_eq!(
        backward.encode(&value).to_vec(),
        vec![0x01, 0x04, 0x03, 0x02, 0x01]
    );
}

#[test]
fn test_empty_meta_list_is_a_zero_byte_codec() {
    let codec = settings_codec(Vec::new());
    assert!(codec.encode(&Settings::default()).is_empty());
    let decoded = codec.decode(&[], 0).unwrap();
    assert_eq!(decoded.value, Settings::default());
    assert_eq!(decoded.bytes_read, 0);
}

#[test]
fn test_first_failing_step_stops_the_fold() {
    let codec = settings_codec(vec![Field::Retries, Field::Endpoint]);
    // retries present, endpoint truncated after its length prefix
    let bytes = vec![1, 0, 0, 0, 0x0A, 0x00, 0x00, 0x00];
    assert!(matches!(
        codec.decode(&bytes, 0),
        Err(Error::BufferOutOfBound(..))
    ));
}
