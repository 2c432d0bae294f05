// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec configuration: length-prefix format, maximum payload length and
//! text encoding.
//!
//! The defaults match the Hadoop pipes wire format (vint length, UTF-8
//! payload). Both sides of a channel must agree on the configuration; it is
//! never transmitted.
//!
//! # Example
//!
//! ```
//! use sercore::{CodecConfig, LengthPrefix, TextEncoding};
//!
//! let config = CodecConfig::default()
//!     .with_prefix(LengthPrefix::U32Be)
//!     .with_max_len(1 << 20)
//!     .with_encoding(TextEncoding::Utf8);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

/// Default maximum payload length (64 MiB).
pub const DEFAULT_MAX_STRING_LEN: u64 = 64 * 1024 * 1024;

/// Integer encoding of the length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthPrefix {
    /// Hadoop `WritableUtils` zero-compressed vint (1-5 bytes for lengths).
    #[default]
    VarInt,
    /// 2-byte big-endian unsigned.
    U16Be,
    /// 4-byte big-endian unsigned.
    U32Be,
    /// 4-byte little-endian unsigned.
    U32Le,
    /// 8-byte big-endian unsigned.
    U64Be,
}

impl LengthPrefix {
    /// Largest length this prefix can carry.
    pub const fn max_representable(self) -> u64 {
        match self {
            LengthPrefix::VarInt => i32::MAX as u64,
            LengthPrefix::U16Be => u16::MAX as u64,
            LengthPrefix::U32Be | LengthPrefix::U32Le => u32::MAX as u64,
            LengthPrefix::U64Be => u64::MAX,
        }
    }

    /// Width in bytes for fixed-width prefixes, `None` for `VarInt`.
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            LengthPrefix::VarInt => None,
            LengthPrefix::U16Be => Some(2),
            LengthPrefix::U32Be | LengthPrefix::U32Le => Some(4),
            LengthPrefix::U64Be => Some(8),
        }
    }

    /// Number of prefix bytes used to encode `len`.
    ///
    /// Lengths past `i64::MAX` are sized as `i64::MAX` for `VarInt`; the codec
    /// rejects them long before, at `max_representable()`.
    pub fn encoded_size(self, len: u64) -> usize {
        match self.fixed_width() {
            Some(width) => width,
            None => crate::varint::vlong_size(i64::try_from(len).unwrap_or(i64::MAX)),
        }
    }

    #[cfg_attr(not(feature = "config-loaders"), allow(dead_code))]
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "VARINT" | "VINT" => Some(LengthPrefix::VarInt),
            "U16_BE" => Some(LengthPrefix::U16Be),
            "U32_BE" => Some(LengthPrefix::U32Be),
            "U32_LE" => Some(LengthPrefix::U32Le),
            "U64_BE" => Some(LengthPrefix::U64Be),
            _ => None,
        }
    }
}

/// Byte encoding of the string payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// 7-bit US-ASCII; any byte or char above 0x7F is rejected.
    Ascii,
    /// ISO-8859-1; chars above U+00FF cannot be encoded.
    Latin1,
}

impl TextEncoding {
    pub const fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    #[cfg_attr(not(feature = "config-loaders"), allow(dead_code))]
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().replace('-', "_").as_str() {
            "UTF8" | "UTF_8" => Some(TextEncoding::Utf8),
            "ASCII" | "US_ASCII" => Some(TextEncoding::Ascii),
            "LATIN1" | "LATIN_1" | "ISO_8859_1" => Some(TextEncoding::Latin1),
            _ => None,
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Codec configuration, fixed at integration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    pub prefix: LengthPrefix,
    pub max_len: u64,
    pub encoding: TextEncoding,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::hadoop()
    }
}

impl CodecConfig {
    /// Hadoop pipes format: vint prefix, UTF-8 payload, 64 MiB limit.
    pub const fn hadoop() -> Self {
        Self {
            prefix: LengthPrefix::VarInt,
            max_len: DEFAULT_MAX_STRING_LEN,
            encoding: TextEncoding::Utf8,
        }
    }

    #[must_use]
    pub const fn with_prefix(mut self, prefix: LengthPrefix) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub const fn with_max_len(mut self, max_len: u64) -> Self {
        self.max_len = max_len;
        self
    }

    #[must_use]
    pub const fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Effective limit: the smaller of `max_len` and the prefix capacity.
    pub fn effective_max_len(&self) -> u64 {
        self.max_len.min(self.prefix.max_representable())
    }

    /// Reject configurations whose limit the prefix cannot express.
    pub fn validate(&self) -> Result<(), String> {
        let cap = self.prefix.max_representable();
        if self.max_len > cap {
            return Err(format!(
                "max_len {} exceeds {:?} capacity {}",
                self.max_len, self.prefix, cap
            ));
        }
        Ok(())
    }
}
