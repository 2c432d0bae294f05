// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounds-checked read/write cursors over byte slices.
//!
//! The codec writes and parses every length prefix through these, for
//! slices and streams alike; stream payloads go through `std::io` directly.

use crate::error::{Error, Result};
use crate::varint;

/// Generate write methods for fixed-width integers.
///
/// Each generated method checks bounds (reporting the total size the buffer
/// would need), converts with `$conv`, copies and advances.
macro_rules! impl_write {
    ($name:ident, $type:ty, $conv:ident) => {
        pub fn $name(&mut self, value: $type) -> Result<()> {
            self.write_bytes(&value.$conv())
        }
    };
}

/// Generate read methods for fixed-width integers.
macro_rules! impl_read {
    ($name:ident, $type:ty, $size:expr, $conv:ident) => {
        pub fn $name(&mut self) -> Result<$type> {
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(self.read_bytes($size)?);
            Ok(<$type>::$conv(bytes))
        }
    };
}

/// Mutable cursor for writing into a caller-owned buffer.
pub struct CursorMut<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_write!(write_u16_be, u16, to_be_bytes);
    impl_write!(write_u32_be, u32, to_be_bytes);
    impl_write!(write_u32_le, u32, to_le_bytes);
    impl_write!(write_u64_be, u64, to_be_bytes);

    pub fn write_vlong(&mut self, value: i64) -> Result<()> {
        let mut buf = [0u8; varint::MAX_VLONG_SIZE];
        let n = varint::encode_vlong(value, &mut buf);
        self.write_bytes(&buf[..n])
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        let end = self.offset + data.len();
        if end > self.buffer.len() {
            return Err(Error::BufferTooSmall {
                required: end,
                available: self.buffer.len(),
            });
        }
        self.buffer[self.offset..end].copy_from_slice(data);
        self.offset = end;
        Ok(())
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Immutable cursor for reading (zero-copy).
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_read!(read_u16_be, u16, 2, from_be_bytes);
    impl_read!(read_u32_be, u32, 4, from_be_bytes);
    impl_read!(read_u32_le, u32, 4, from_le_bytes);
    impl_read!(read_u64_be, u64, 8, from_be_bytes);

    pub fn read_vlong(&mut self) -> Result<i64> {
        let (value, used) = varint::decode_vlong(&self.buffer[self.offset..])?;
        self.offset += used;
        Ok(value)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::TruncatedInput {
                needed: len as u64,
                available: self.remaining() as u64,
            });
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }
}
