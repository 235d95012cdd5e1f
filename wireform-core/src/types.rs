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

//! Wire-level discriminator tags and the sum value types they select.
//!
//! Each optional or sum codec writes a single printable tag byte ahead of its
//! payload. The tags are plain ASCII so that raw dumps of encoded data stay
//! legible. A byte outside the recognized set is reported through the
//! `TryFromPrimitive` conversion as an unknown discriminator.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Discriminator byte for [`Option`] payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OptionTag {
    None = b'n',
    Some = b's',
}

/// Discriminator byte for [`Either`] payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum EitherTag {
    Left = b'l',
    Right = b'r',
}

/// Discriminator byte for [`OneOf`] payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OneOfTag {
    A = b'a',
    B = b'b',
    C = b'c',
}

/// A value of one of two types.
///
/// Unlike [`Result`], neither side carries an error connotation; the codec
/// layer uses it as the decoded shape of a two-way sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }
}

/// A value of one of three types, the decoded shape of a three-way sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OneOf<A, B, C> {
    A(A),
    B(B),
    C(C),
}

impl<A, B, C> OneOf<A, B, C> {
    pub fn is_a(&self) -> bool {
        matches!(self, OneOf::A(_))
    }

    pub fn is_b(&self) -> bool {
        matches!(self, OneOf::B(_))
    }

    pub fn is_c(&self) -> bool {
        matches!(self, OneOf::C(_))
    }
}
