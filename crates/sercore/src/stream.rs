// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Blocking read helpers shared by the stream decoders.

use std::io::{self, Read};

use crate::error::{Error, Result};

/// Fill `buf` completely from `input`.
///
/// End of input before `buf` is full is reported as
/// [`Error::TruncatedInput`] with the number of bytes actually read, never as
/// an I/O error.
pub(crate) fn read_full<R: Read + ?Sized>(input: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::TruncatedInput {
                    needed: buf.len() as u64,
                    available: filled as u64,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::Io(e)),
        }
    }
    Ok(())
}

/// Read exactly `len` bytes into a fresh vector.
///
/// Grows the vector as data arrives, so a short source never causes an
/// allocation of the full declared length.
pub(crate) fn read_exact_vec<R: Read + ?Sized>(input: &mut R, len: u64) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    let read = match (&mut *input).take(len).read_to_end(&mut payload) {
        Ok(n) => n as u64,
        Err(e) => return Err(Error::Io(e)),
    };
    if read < len {
        return Err(Error::TruncatedInput {
            needed: len,
            available: read,
        });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Interrupting<'a> {
        data: &'a [u8],
        interrupted: bool,
    }

    impl Read for Interrupting<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_read_full_retries_interrupted() {
        let mut input = Interrupting {
            data: &[1, 2, 3],
            interrupted: false,
        };
        let mut buf = [0u8; 3];
        read_full(&mut input, &mut buf).expect("interrupt is retried");
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn test_read_full_short_input() {
        let mut input: &[u8] = &[9, 9];
        let mut buf = [0u8; 4];
        match read_full(&mut input, &mut buf).unwrap_err() {
            Error::TruncatedInput { needed, available } => {
                assert_eq!((needed, available), (4, 2));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_read_exact_vec_short_input() {
        let mut input: &[u8] = b"abc";
        let err = read_exact_vec(&mut input, 1 << 30).unwrap_err();
        assert!(err.is_truncation());
    }
}
