// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Length-prefixed string codec.
//!
//! A record is `[length prefix][payload]`: the payload byte count in the
//! configured [`LengthPrefix`], then exactly that many bytes of text in the
//! configured [`TextEncoding`].
//!
//! Encoding validates the text and the length before touching the sink, so a
//! failed `encode` writes nothing. Decoding validates the prefix before any
//! payload is read or allocated.

use std::io::{Read, Write};

use crate::config::{CodecConfig, LengthPrefix};
use crate::cursor::{Cursor, CursorMut};
use crate::error::{Error, LengthError, Result};
use crate::stream::{read_exact_vec, read_full};
use crate::text::{decode_text, encode_text, encoded_text_len};
use crate::varint;

/// Stateless string encoder/decoder.
///
/// # Example
///
/// ```
/// use sercore::StringCodec;
///
/// let codec = StringCodec::default();
/// let mut buf = Vec::new();
/// codec.encode("hello", &mut buf)?;
/// assert_eq!(buf, b"\x05hello");
///
/// let decoded = codec.decode(&mut buf.as_slice())?;
/// assert_eq!(decoded, "hello");
/// # Ok::<(), sercore::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringCodec {
    config: CodecConfig,
}

impl StringCodec {
    /// Build a codec from a configuration fixed at integration time.
    ///
    /// `config` must pass [`CodecConfig::validate`]; debug builds assert it.
    /// Use [`StringCodec::try_new`] for configurations read at runtime.
    pub fn new(config: CodecConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid codec config: {:?}",
            config
        );
        Self { config }
    }

    /// Build a codec, rejecting a limit the prefix cannot carry.
    pub fn try_new(config: CodecConfig) -> core::result::Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Hadoop pipes format (vint prefix, UTF-8).
    pub const fn hadoop() -> Self {
        Self {
            config: CodecConfig::hadoop(),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Write `value` as one length-prefixed record to `out`.
    pub fn encode<W: Write + ?Sized>(&self, value: &str, out: &mut W) -> Result<()> {
        let payload = encode_text(value, self.config.encoding)?;
        let len = payload.len() as u64;
        self.check_len(len)?;

        let (prefix, n) = self.prefix_bytes(len)?;
        out.write_all(&prefix[..n])?;
        out.write_all(&payload)?;
        log::trace!("[sercore] encoded record: prefix={}B payload={}B", n, len);
        Ok(())
    }

    /// Read one length-prefixed record from `input`.
    pub fn decode<R: Read + ?Sized>(&self, input: &mut R) -> Result<String> {
        let len = self.read_prefix(input)?;
        let payload = read_exact_vec(input, len)?;
        log::trace!("[sercore] decoded record: payload={}B", len);
        decode_text(payload, self.config.encoding)
    }

    pub fn encode_to_vec(&self, value: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len(value)?);
        self.encode(value, &mut out)?;
        Ok(out)
    }

    /// Encode into a caller-provided buffer, returning the bytes written.
    ///
    /// On [`Error::BufferTooSmall`], `required` is the full record size and
    /// `buf` is left untouched.
    pub fn encode_into(&self, value: &str, buf: &mut [u8]) -> Result<usize> {
        let payload = encode_text(value, self.config.encoding)?;
        let len = payload.len() as u64;
        self.check_len(len)?;

        let required = self.config.prefix.encoded_size(len) + payload.len();
        if required > buf.len() {
            return Err(Error::BufferTooSmall {
                required,
                available: buf.len(),
            });
        }
        let mut cursor = CursorMut::new(buf);
        self.write_prefix(&mut cursor, len)?;
        cursor.write_bytes(&payload)?;
        Ok(cursor.offset())
    }

    /// Decode the first record in `buf`, returning it and the bytes consumed.
    pub fn decode_from_slice(&self, buf: &[u8]) -> Result<(String, usize)> {
        let mut cursor = Cursor::new(buf);
        let raw = self.read_raw_prefix(&mut cursor)?;
        let len = self.validate_declared(raw)?;
        let len = usize::try_from(len).map_err(|_| {
            Error::MalformedLength(LengthError::TooLarge {
                length: len,
                max: usize::MAX as u64,
            })
        })?;
        let payload = cursor.read_bytes(len)?;
        let value = decode_text(payload.to_vec(), self.config.encoding)?;
        Ok((value, cursor.offset()))
    }

    /// Size of the full record for `value`.
    pub fn encoded_len(&self, value: &str) -> Result<usize> {
        let len = encoded_text_len(value, self.config.encoding)?;
        self.check_len(len as u64)?;
        Ok(self.config.prefix.encoded_size(len as u64) + len)
    }

    fn check_len(&self, len: u64) -> Result<()> {
        let prefix = self.config.prefix;
        if len > prefix.max_representable() {
            return Err(LengthError::Unrepresentable {
                length: len,
                prefix,
            }
            .into());
        }
        if len > self.config.max_len {
            return Err(LengthError::TooLarge {
                length: len,
                max: self.config.max_len,
            }
            .into());
        }
        Ok(())
    }

    fn prefix_bytes(&self, len: u64) -> Result<([u8; varint::MAX_VLONG_SIZE], usize)> {
        let mut buf = [0u8; varint::MAX_VLONG_SIZE];
        let mut cursor = CursorMut::new(&mut buf);
        self.write_prefix(&mut cursor, len)?;
        let n = cursor.offset();
        Ok((buf, n))
    }

    // `len` is already bounded to the prefix capacity by check_len.
    fn write_prefix(&self, cursor: &mut CursorMut<'_>, len: u64) -> Result<()> {
        match self.config.prefix {
            LengthPrefix::VarInt => cursor.write_vlong(len as i64),
            LengthPrefix::U16Be => cursor.write_u16_be(len as u16),
            LengthPrefix::U32Be => cursor.write_u32_be(len as u32),
            LengthPrefix::U32Le => cursor.write_u32_le(len as u32),
            LengthPrefix::U64Be => cursor.write_u64_be(len),
        }
    }

    fn read_raw_prefix(&self, cursor: &mut Cursor<'_>) -> Result<RawLength> {
        Ok(match self.config.prefix {
            LengthPrefix::VarInt => RawLength::Signed(cursor.read_vlong()?),
            LengthPrefix::U16Be => RawLength::Unsigned(u64::from(cursor.read_u16_be()?)),
            LengthPrefix::U32Be => RawLength::Unsigned(u64::from(cursor.read_u32_be()?)),
            LengthPrefix::U32Le => RawLength::Unsigned(u64::from(cursor.read_u32_le()?)),
            LengthPrefix::U64Be => RawLength::Unsigned(cursor.read_u64_be()?),
        })
    }

    fn read_prefix<R: Read + ?Sized>(&self, input: &mut R) -> Result<u64> {
        let raw = match self.config.prefix.fixed_width() {
            None => RawLength::Signed(varint::read_vlong(input)?),
            Some(width) => {
                let mut buf = [0u8; 8];
                read_full(input, &mut buf[..width])?;
                self.read_raw_prefix(&mut Cursor::new(&buf[..width]))?
            }
        };
        self.validate_declared(raw)
    }

    fn validate_declared(&self, raw: RawLength) -> Result<u64> {
        let len = match raw {
            RawLength::Signed(v) if v < 0 => {
                log::debug!("[sercore] rejecting negative length prefix {}", v);
                return Err(LengthError::Negative(v).into());
            }
            RawLength::Signed(v) if v > i64::from(i32::MAX) => {
                log::debug!("[sercore] rejecting vint length {} beyond i32", v);
                return Err(LengthError::VarIntOverflow(v).into());
            }
            RawLength::Signed(v) => v as u64,
            RawLength::Unsigned(v) => v,
        };
        if len > self.config.max_len {
            log::debug!(
                "[sercore] rejecting length {} above max {}",
                len,
                self.config.max_len
            );
            return Err(LengthError::TooLarge {
                length: len,
                max: self.config.max_len,
            }
            .into());
        }
        Ok(len)
    }
}

/// Length prefix as read off the wire, before range checks.
#[derive(Debug, Clone, Copy)]
enum RawLength {
    Signed(i64),
    Unsigned(u64),
}
