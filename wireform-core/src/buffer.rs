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

//! Binary buffer primitives.
//!
//! The write side is [`Rope`], an immutable byte sequence with O(1)
//! concatenation. Every encoder returns a `Rope`; structural combinators
//! concatenate many small field ropes, and only the outermost caller pays for
//! a single linearization via [`Rope::to_vec`]. Eagerly copying on every
//! concatenation would degrade to O(n²) across a string of field writes.
//!
//! The read side is a family of checked little-endian reads over
//! `(&[u8], offset)`. Each read validates bounds up front and reports
//! truncation as [`Error::BufferOutOfBound`], so primitive decoders only
//! implement the happy path and nothing in the decode path can panic or read
//! past the buffer.
//!
//! All multi-byte values use little-endian order on the wire, on every host.

use std::fmt;
use std::ops::Add;
use std::sync::Arc;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::Error;

/// Width in bytes of the `i32` length prefix used by strings, byte arrays
/// and collections.
pub const LEN_PREFIX_WIDTH: usize = 4;

enum Node {
    Owned(Arc<[u8]>),
    Static(&'static [u8]),
    Concat(Arc<Node>, Arc<Node>),
}

/// An immutable, concatenation-efficient byte sequence.
///
/// `Rope` is the output type of every encoder. Concatenation via `+` builds
/// a chunk tree over shared nodes instead of copying either operand;
/// [`Rope::to_vec`] flattens the tree into a contiguous buffer in one pass
/// with the exact capacity known up front.
///
/// Ropes are cheap to clone and freely shared across threads.
///
/// # Example
/// ```
/// use wireform_core::buffer::Rope;
///
/// let head = Rope::from_static(b"he");
/// let tail = Rope::from_vec(vec![b'l', b'l', b'o']);
/// assert_eq!((head + tail).to_vec(), b"hello");
/// ```
#[derive(Clone, Default)]
pub struct Rope {
    node: Option<Arc<Node>>,
    len: usize,
}

impl Rope {
    /// The empty byte sequence, the identity element of concatenation.
    pub fn new() -> Rope {
        Rope::default()
    }

    /// Wraps an owned byte buffer without copying it.
    pub fn from_vec(bytes: Vec<u8>) -> Rope {
        if bytes.is_empty() {
            return Rope::new();
        }
        let len = bytes.len();
        Rope {
            node: Some(Arc::new(Node::Owned(bytes.into()))),
            len,
        }
    }

    /// Wraps a static byte slice, typically a precomputed discriminator.
    pub fn from_static(bytes: &'static [u8]) -> Rope {
        if bytes.is_empty() {
            return Rope::new();
        }
        Rope {
            node: Some(Arc::new(Node::Static(bytes))),
            len: bytes.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Flattens the chunk tree into a contiguous buffer.
    ///
    /// Allocates exactly once and walks the tree iteratively, so arbitrarily
    /// deep concatenation chains cannot overflow the call stack.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len);
        let Some(root) = &self.node else {
            return out;
        };
        let mut stack: Vec<&Node> = vec![root.as_ref()];
        while let Some(node) = stack.pop() {
            match node {
                Node::Owned(bytes) => out.extend_from_slice(bytes),
                Node::Static(bytes) => out.extend_from_slice(bytes),
                Node::Concat(left, right) => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        out
    }
}

impl Add for Rope {
    type Output = Rope;

    /// Concatenates two ropes in O(1) by linking their roots.
    fn add(self, rhs: Rope) -> Rope {
        match (self.node, rhs.node) {
            (None, node) => Rope {
                node,
                len: rhs.len,
            },
            (node, None) => Rope {
                node,
                len: self.len,
            },
            (Some(left), Some(right)) => Rope {
                node: Some(Arc::new(Node::Concat(left, right))),
                len: self.len + rhs.len,
            },
        }
    }
}

impl From<Vec<u8>> for Rope {
    fn from(bytes: Vec<u8>) -> Rope {
        Rope::from_vec(bytes)
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope").field("len", &self.len).finish()
    }
}

#[inline]
fn check_bounds(buffer: &[u8], offset: usize, width: usize) -> Result<(), Error> {
    match offset.checked_add(width) {
        Some(end) if end <= buffer.len() => Ok(()),
        _ => Err(Error::buffer_out_of_bound(offset, width, buffer.len())),
    }
}

/// Borrows `len` bytes starting at `offset`, or fails on truncation.
#[inline]
pub fn read_exact(buffer: &[u8], offset: usize, len: usize) -> Result<&[u8], Error> {
    check_bounds(buffer, offset, len)?;
    Ok(&buffer[offset..offset + len])
}

#[inline]
pub fn read_u8(buffer: &[u8], offset: usize) -> Result<u8, Error> {
    check_bounds(buffer, offset, 1)?;
    Ok(buffer[offset])
}

#[inline]
pub fn read_i8(buffer: &[u8], offset: usize) -> Result<i8, Error> {
    Ok(read_u8(buffer, offset)? as i8)
}

#[inline]
pub fn read_u16(buffer: &[u8], offset: usize) -> Result<u16, Error> {
    Ok(LittleEndian::read_u16(read_exact(buffer, offset, 2)?))
}

#[inline]
pub fn read_i16(buffer: &[u8], offset: usize) -> Result<i16, Error> {
    Ok(LittleEndian::read_i16(read_exact(buffer, offset, 2)?))
}

#[inline]
pub fn read_u32(buffer: &[u8], offset: usize) -> Result<u32, Error> {
    Ok(LittleEndian::read_u32(read_exact(buffer, offset, 4)?))
}

#[inline]
pub fn read_i32(buffer: &[u8], offset: usize) -> Result<i32, Error> {
    Ok(LittleEndian::read_i32(read_exact(buffer, offset, 4)?))
}

#[inline]
pub fn read_u64(buffer: &[u8], offset: usize) -> Result<u64, Error> {
    Ok(LittleEndian::read_u64(read_exact(buffer, offset, 8)?))
}

#[inline]
pub fn read_i64(buffer: &[u8], offset: usize) -> Result<i64, Error> {
    Ok(LittleEndian::read_i64(read_exact(buffer, offset, 8)?))
}

#[inline]
pub fn read_f32(buffer: &[u8], offset: usize) -> Result<f32, Error> {
    Ok(LittleEndian::read_f32(read_exact(buffer, offset, 4)?))
}

#[inline]
pub fn read_f64(buffer: &[u8], offset: usize) -> Result<f64, Error> {
    Ok(LittleEndian::read_f64(read_exact(buffer, offset, 8)?))
}

/// Reads the `i32` length prefix of a string, byte array or collection.
///
/// Negative prefixes are rejected as [`Error::InvalidData`].
#[inline]
pub fn read_len(buffer: &[u8], offset: usize) -> Result<usize, Error> {
    let len = read_i32(buffer, offset)?;
    crate::ensure!(
        len >= 0,
        Error::invalid_data(format!("negative length prefix {} at offset {}", len, offset))
    );
    Ok(len as usize)
}

/// Encodes a length prefix as 4 little-endian bytes.
#[inline]
pub fn len_prefix(len: usize) -> Rope {
    let mut buf = [0u8; LEN_PREFIX_WIDTH];
    LittleEndian::write_i32(&mut buf, len as i32);
    Rope::from_vec(buf.to_vec())
}
