// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use sercore::{CodecConfig, LengthPrefix, StringCodec, TextEncoding};

fuzz_target!(|data: &[u8]| {
    // Slice and stream decoding must agree on arbitrary input
    let codec = StringCodec::default();
    let from_slice = codec.decode_from_slice(data);
    let from_stream = codec.decode(&mut &data[..]);
    match (from_slice, from_stream) {
        (Ok((a, used)), Ok(b)) => {
            assert_eq!(a, b);
            // Canonical vint prefixes re-encode to the consumed bytes
            let again = codec.encode_to_vec(&a).unwrap();
            assert!(again.len() <= used);
            assert_eq!(codec.decode_from_slice(&again).unwrap(), (a, again.len()));
        }
        (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
        (a, b) => panic!("slice/stream disagreement: {:?} vs {:?}", a, b),
    }

    // A small limit must reject large prefixes before touching the payload
    let bounded = StringCodec::new(
        CodecConfig::default()
            .with_prefix(LengthPrefix::U32Be)
            .with_max_len(4096)
            .with_encoding(TextEncoding::Latin1),
    );
    let _ = bounded.decode(&mut &data[..]);
});
