// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hadoop pipes `SerialUtils` primitives.
//!
//! Stream functions read or write one value on a `Read`/`Write`. The buffer
//! functions [`serialize_string`] and [`deserialize_string`] are the names
//! exposed through the C binding.
//!
//! | Value  | Wire form |
//! |--------|-----------|
//! | int    | vint |
//! | long   | vlong |
//! | float  | 4-byte big-endian IEEE 754 |
//! | string | vint byte length + UTF-8 bytes |

use std::io::{Read, Write};

use crate::codec::StringCodec;
use crate::error::Result;
use crate::stream::read_full;

pub use crate::varint::{read_vint, read_vlong, write_vint, write_vlong};

const DEFAULT_CODEC: StringCodec = StringCodec::hadoop();

pub fn write_float<W: Write + ?Sized>(value: f32, out: &mut W) -> Result<()> {
    out.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub fn read_float<R: Read + ?Sized>(input: &mut R) -> Result<f32> {
    let mut b = [0u8; 4];
    read_full(input, &mut b)?;
    Ok(f32::from_be_bytes(b))
}

/// Write `value` with the Hadoop string framing.
pub fn write_string<W: Write + ?Sized>(value: &str, out: &mut W) -> Result<()> {
    DEFAULT_CODEC.encode(value, out)
}

pub fn read_string<R: Read + ?Sized>(input: &mut R) -> Result<String> {
    DEFAULT_CODEC.decode(input)
}

/// Serialize `value` into a new buffer using the Hadoop string framing.
pub fn serialize_string(value: &str) -> Result<Vec<u8>> {
    DEFAULT_CODEC.encode_to_vec(value)
}

/// Deserialize the first string record in `buf`.
///
/// Bytes after the first record are ignored.
pub fn deserialize_string(buf: &[u8]) -> Result<String> {
    DEFAULT_CODEC.decode_from_slice(buf).map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_string_writes_payload() {
        let bytes = serialize_string("pydoop").expect("serialize");
        assert_eq!(bytes, b"\x06pydoop");
        assert_eq!(deserialize_string(&bytes).expect("deserialize"), "pydoop");
    }

    #[test]
    fn test_mixed_record_stream() {
        let mut out = Vec::new();
        write_vint(42, &mut out).unwrap();
        write_vlong(-1 << 40, &mut out).unwrap();
        write_float(1.5, &mut out).unwrap();
        write_string("key\tvalue", &mut out).unwrap();

        let mut input: &[u8] = &out;
        assert_eq!(read_vint(&mut input).unwrap(), 42);
        assert_eq!(read_vlong(&mut input).unwrap(), -1 << 40);
        assert_eq!(read_float(&mut input).unwrap(), 1.5);
        assert_eq!(read_string(&mut input).unwrap(), "key\tvalue");
        assert!(input.is_empty());
    }

    #[test]
    fn test_float_is_big_endian() {
        let mut out = Vec::new();
        write_float(1.0, &mut out).unwrap();
        assert_eq!(out, [0x3F, 0x80, 0x00, 0x00]);
        assert!(read_float(&mut &out[..3]).unwrap_err().is_truncation());
    }
}
