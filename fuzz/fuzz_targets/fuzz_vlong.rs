// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use sercore::varint;

fuzz_target!(|data: &[u8]| {
    if let Ok((value, used)) = varint::decode_vlong(data) {
        let mut buf = [0u8; varint::MAX_VLONG_SIZE];
        let n = varint::encode_vlong(value, &mut buf);
        assert!(n <= used);
        assert_eq!(varint::decode_vlong(&buf[..n]).unwrap(), (value, n));
    }
});
