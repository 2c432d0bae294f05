// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// String codec behavior through the public API: round-trip, determinism,
// truncation, length bounds and encoding failures.

#![allow(clippy::unreadable_literal)]

use sercore::{
    deserialize_string, serialize_string, CodecConfig, Error, ErrorKind, LengthError,
    LengthPrefix, StringCodec, TextEncoding,
};
use std::io::{Cursor, Read};

fn random_string(max_chars: usize) -> String {
    const POOL: &[char] = &['a', 'Z', '0', ' ', '\n', 'é', 'ß', 'λ', '中', '€', '🦀', '\u{0}'];
    let n = fastrand::usize(..=max_chars);
    (0..n).map(|_| POOL[fastrand::usize(..POOL.len())]).collect()
}

#[test]
fn roundtrip_random_strings() {
    let codec = StringCodec::default();
    for _ in 0..500 {
        let value = random_string(64);
        let bytes = codec.encode_to_vec(&value).expect("encode");
        assert_eq!(codec.decode(&mut bytes.as_slice()).expect("decode"), value);
    }
}

#[test]
fn roundtrip_at_configured_maximum() {
    let max = 300;
    let codec = StringCodec::new(CodecConfig::default().with_max_len(max));

    let at_max = "m".repeat(max as usize);
    let bytes = codec.encode_to_vec(&at_max).expect("at max encodes");
    assert_eq!(codec.decode(&mut bytes.as_slice()).unwrap(), at_max);

    // 299 bytes of payload ending in a 2-byte char: just under the limit
    let near_max = format!("{}é", "m".repeat(max as usize - 3));
    let bytes = codec.encode_to_vec(&near_max).expect("near max encodes");
    assert_eq!(codec.decode(&mut bytes.as_slice()).unwrap(), near_max);

    let over = "m".repeat(max as usize + 1);
    let err = codec.encode_to_vec(&over).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedLength);
}

#[test]
fn encoding_is_deterministic() {
    let codec = StringCodec::new(CodecConfig::default().with_prefix(LengthPrefix::U32Be));
    let value = "same input, same bytes ✓";
    assert_eq!(
        codec.encode_to_vec(value).unwrap(),
        codec.encode_to_vec(value).unwrap()
    );
    assert_eq!(serialize_string(value).unwrap(), serialize_string(value).unwrap());
}

#[test]
fn records_back_to_back_on_one_stream() {
    let codec = StringCodec::default();
    let values = ["alpha", "", "gamma δ", "omega"];
    let mut out = Vec::new();
    for value in values {
        codec.encode(value, &mut out).unwrap();
    }

    let mut input = Cursor::new(out);
    for value in values {
        assert_eq!(codec.decode(&mut input).unwrap(), value);
    }
    let err = codec.decode(&mut input).unwrap_err();
    assert!(err.is_truncation(), "exhausted stream reports truncation");
}

#[test]
fn truncation_at_every_cut_point() {
    let codec = StringCodec::default();
    let bytes = codec.encode_to_vec(&"x".repeat(150)).unwrap();
    for cut in 0..bytes.len() {
        let err = codec.decode(&mut &bytes[..cut]).unwrap_err();
        assert!(err.is_truncation(), "cut at {} gave {:?}", cut, err);
        let err = codec.decode_from_slice(&bytes[..cut]).unwrap_err();
        assert!(err.is_truncation(), "slice cut at {} gave {:?}", cut, err);
    }
}

/// Reader that serves a header and then claims an endless payload, counting
/// how many bytes the codec asked for.
struct CountingReader {
    header: Vec<u8>,
    pos: usize,
    payload_reads: usize,
}

impl Read for CountingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos < self.header.len() {
            let n = buf.len().min(self.header.len() - self.pos);
            buf[..n].copy_from_slice(&self.header[self.pos..self.pos + n]);
            self.pos += n;
            return Ok(n);
        }
        self.payload_reads += buf.len();
        buf.fill(b'a');
        Ok(buf.len())
    }
}

#[test]
fn oversized_prefix_never_reads_payload() {
    let codec = StringCodec::new(
        CodecConfig::default()
            .with_prefix(LengthPrefix::U32Be)
            .with_max_len(4096),
    );
    let mut reader = CountingReader {
        header: 0xFFFF_FFF0u32.to_be_bytes().to_vec(),
        pos: 0,
        payload_reads: 0,
    };
    let err = codec.decode(&mut reader).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedLength(LengthError::TooLarge {
            length: 0xFFFF_FFF0,
            max: 4096
        })
    ));
    assert_eq!(reader.payload_reads, 0);
}

#[test]
fn invalid_payload_encoding_is_reported() {
    let ascii = StringCodec::new(CodecConfig::default().with_encoding(TextEncoding::Ascii));
    let err = ascii.decode(&mut &b"\x03ab\x80"[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);

    let err = deserialize_string(b"\x04\xF0\x28\x8C\x28").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
}

#[test]
fn latin1_uses_one_byte_per_char() {
    let codec = StringCodec::new(
        CodecConfig::default()
            .with_prefix(LengthPrefix::U16Be)
            .with_encoding(TextEncoding::Latin1),
    );
    let bytes = codec.encode_to_vec("Größe").unwrap();
    assert_eq!(bytes, b"\x00\x05Gr\xF6\xDFe");
    assert_eq!(codec.decode_from_slice(&bytes).unwrap(), ("Größe".to_string(), 7));
}

#[test]
fn serialize_string_uses_hadoop_framing() {
    let bytes = serialize_string("").unwrap();
    assert_eq!(bytes, [0x00]);
    assert_eq!(deserialize_string(&bytes).unwrap(), "");

    let value = "v".repeat(1000);
    let bytes = serialize_string(&value).unwrap();
    assert_eq!(&bytes[..3], &[0x8E, 0x03, 0xE8]);
    assert_eq!(deserialize_string(&bytes).unwrap(), value);
}
