// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Conversion between `str` and payload bytes for each [`TextEncoding`].

use std::borrow::Cow;

use crate::config::TextEncoding;
use crate::error::{Error, Result};

/// Encode `value` as payload bytes. UTF-8 borrows; other encodings allocate.
pub fn encode_text(value: &str, encoding: TextEncoding) -> Result<Cow<'_, [u8]>> {
    match encoding {
        TextEncoding::Utf8 => Ok(Cow::Borrowed(value.as_bytes())),
        TextEncoding::Ascii => {
            if let Some((offset, ch)) = value.char_indices().find(|(_, c)| !c.is_ascii()) {
                return Err(Error::encoding(
                    encoding,
                    format!("character U+{:04X} at offset {}", ch as u32, offset),
                ));
            }
            Ok(Cow::Borrowed(value.as_bytes()))
        }
        TextEncoding::Latin1 => {
            let mut out = Vec::with_capacity(value.len());
            for (offset, ch) in value.char_indices() {
                let Ok(byte) = u8::try_from(u32::from(ch)) else {
                    return Err(Error::encoding(
                        encoding,
                        format!("character U+{:04X} at offset {}", ch as u32, offset),
                    ));
                };
                out.push(byte);
            }
            Ok(Cow::Owned(out))
        }
    }
}

/// Byte length of `value` once encoded, without allocating.
pub fn encoded_text_len(value: &str, encoding: TextEncoding) -> Result<usize> {
    match encoding {
        TextEncoding::Utf8 => Ok(value.len()),
        TextEncoding::Ascii => encode_text(value, encoding).map(|bytes| bytes.len()),
        TextEncoding::Latin1 => {
            let mut len = 0;
            for (offset, ch) in value.char_indices() {
                if u32::from(ch) > 0xFF {
                    return Err(Error::encoding(
                        encoding,
                        format!("character U+{:04X} at offset {}", ch as u32, offset),
                    ));
                }
                len += 1;
            }
            Ok(len)
        }
    }
}

/// Decode payload bytes, rejecting anything invalid for `encoding`.
pub fn decode_text(bytes: Vec<u8>, encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| {
            let err = e.utf8_error();
            Error::encoding(
                encoding,
                format!("invalid sequence at offset {}", err.valid_up_to()),
            )
        }),
        TextEncoding::Ascii => {
            if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                return Err(Error::encoding(
                    encoding,
                    format!("byte {:#04X} at offset {}", bytes[offset], offset),
                ));
            }
            String::from_utf8(bytes)
                .map_err(|_| Error::encoding(encoding, "invalid ascii payload"))
        }
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_borrows() {
        let encoded = encode_text("héllo", TextEncoding::Utf8).expect("utf-8");
        assert!(matches!(encoded, Cow::Borrowed(_)));
        assert_eq!(encoded.len(), 6);
    }

    #[test]
    fn test_latin1_roundtrip_and_rejection() {
        let encoded = encode_text("café", TextEncoding::Latin1).expect("latin-1");
        assert_eq!(&*encoded, b"caf\xE9");
        assert_eq!(encoded_text_len("café", TextEncoding::Latin1).unwrap(), 4);
        assert_eq!(
            decode_text(encoded.into_owned(), TextEncoding::Latin1).unwrap(),
            "café"
        );

        let err = encode_text("5 €", TextEncoding::Latin1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "latin-1 encoding error: character U+20AC at offset 2"
        );
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        assert!(encode_text("naïve", TextEncoding::Ascii).is_err());
        assert!(encoded_text_len("naïve", TextEncoding::Ascii).is_err());
        let err = decode_text(vec![b'o', b'k', 0xC3], TextEncoding::Ascii).unwrap_err();
        assert_eq!(err.to_string(), "ascii encoding error: byte 0xC3 at offset 2");
    }

    #[test]
    fn test_utf8_rejects_invalid_sequence() {
        let err = decode_text(vec![b'a', 0xFF, b'b'], TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Encoding);
        assert!(err.to_string().contains("offset 1"));
    }
}
