// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hadoop `WritableUtils` zero-compressed variable-length integers.
//!
//! ## Layout
//!
//! - `-112..=127`: a single byte holding the value.
//! - Otherwise a marker byte followed by 1-8 big-endian magnitude bytes.
//!   Markers `-113..=-120` are positive values with 1-8 bytes, markers
//!   `-121..=-128` are negative values (stored one's-complemented).
//!
//! ```text
//!   128  -> 8F 80
//!   256  -> 8E 01 00
//!  -113  -> 87 70
//! ```

use std::io::{Read, Write};

use crate::error::{Error, LengthError, Result};
use crate::stream::read_full;

/// Largest encoded vlong: marker + 8 bytes.
pub const MAX_VLONG_SIZE: usize = 9;

/// Encoded size of `value` in bytes (1-9).
pub fn vlong_size(value: i64) -> usize {
    if (-112..=127).contains(&value) {
        return 1;
    }
    let magnitude = if value < 0 { !value } else { value };
    let data_bits = 64 - magnitude.leading_zeros() as usize;
    1 + data_bits.div_ceil(8)
}

/// Total encoded size announced by the first byte.
pub fn decode_vint_size(first: u8) -> usize {
    let marker = i32::from(first as i8);
    if marker >= -112 {
        1
    } else if marker < -120 {
        (-119 - marker) as usize
    } else {
        (-111 - marker) as usize
    }
}

fn is_negative_vint(first: u8) -> bool {
    let marker = first as i8;
    marker < -120 || (-112..0).contains(&marker)
}

fn assemble(first: u8, rest: &[u8]) -> i64 {
    if rest.is_empty() {
        return i64::from(first as i8);
    }
    let mut value: i64 = 0;
    for &b in rest {
        value = (value << 8) | i64::from(b);
    }
    if is_negative_vint(first) {
        !value
    } else {
        value
    }
}

/// Encode `value` into `buf`, returning the number of bytes used.
pub fn encode_vlong(value: i64, buf: &mut [u8; MAX_VLONG_SIZE]) -> usize {
    if (-112..=127).contains(&value) {
        buf[0] = value as u8;
        return 1;
    }

    let mut marker: i32 = -112;
    let mut magnitude = value;
    if magnitude < 0 {
        magnitude = !magnitude;
        marker = -120;
    }
    let mut tmp = magnitude;
    while tmp != 0 {
        tmp >>= 8;
        marker -= 1;
    }
    buf[0] = marker as i8 as u8;

    let n = if marker < -120 {
        (-(marker + 120)) as usize
    } else {
        (-(marker + 112)) as usize
    };
    for i in 0..n {
        let shift = (n - 1 - i) * 8;
        buf[1 + i] = (magnitude >> shift) as u8;
    }
    1 + n
}

/// Decode a vlong from the start of `buf`, returning `(value, consumed)`.
pub fn decode_vlong(buf: &[u8]) -> Result<(i64, usize)> {
    let Some(&first) = buf.first() else {
        return Err(Error::TruncatedInput {
            needed: 1,
            available: 0,
        });
    };
    let size = decode_vint_size(first);
    if buf.len() < size {
        return Err(Error::TruncatedInput {
            needed: size as u64,
            available: buf.len() as u64,
        });
    }
    Ok((assemble(first, &buf[1..size]), size))
}

pub fn write_vlong<W: Write + ?Sized>(value: i64, out: &mut W) -> Result<()> {
    let mut buf = [0u8; MAX_VLONG_SIZE];
    let n = encode_vlong(value, &mut buf);
    out.write_all(&buf[..n])?;
    Ok(())
}

pub fn read_vlong<R: Read + ?Sized>(input: &mut R) -> Result<i64> {
    let mut first = [0u8; 1];
    read_full(input, &mut first)?;
    let size = decode_vint_size(first[0]);
    let mut rest = [0u8; MAX_VLONG_SIZE - 1];
    read_full(input, &mut rest[..size - 1]).map_err(|e| match e {
        // Report the whole field, marker included.
        Error::TruncatedInput { needed, available } => Error::TruncatedInput {
            needed: needed + 1,
            available: available + 1,
        },
        other => other,
    })?;
    Ok(assemble(first[0], &rest[..size - 1]))
}

pub fn write_vint<W: Write + ?Sized>(value: i32, out: &mut W) -> Result<()> {
    write_vlong(i64::from(value), out)
}

/// Read a vlong and require it to fit in `i32`.
pub fn read_vint<R: Read + ?Sized>(input: &mut R) -> Result<i32> {
    let value = read_vlong(input)?;
    i32::try_from(value).map_err(|_| Error::MalformedLength(LengthError::VarIntOverflow(value)))
}
