// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # sercore C FFI Bindings
//!
//! C-compatible entry points for the sercore string codec, for hosts that
//! load native code (Python extension modules, JNI shims, plain C).
//!
//! Buffers returned to the caller are allocated with `malloc` and must be
//! released with [`sercore_buffer_free`] (or `free`).
//!
//! # Safety
//!
//! All public functions are `unsafe` and require the caller to uphold the
//! invariants documented in each function's safety comment.

mod codec;
mod logging;

pub use codec::*;
pub use logging::*;

use std::os::raw::{c_char, c_void};
use std::ptr;

use sercore::{ErrorKind, StringCodec};

/// Error codes (C-compatible enum)
///
/// # Error Code Categories
///
/// - **0-9**: Success and generic errors
/// - **20-29**: I/O errors
/// - **30-39**: Serialization errors
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SercoreError {
    /// Operation completed successfully
    SercoreOk = 0,
    /// Invalid argument provided (null pointer, invalid value)
    SercoreInvalidArgument = 1,
    /// Generic operation failure
    SercoreOperationFailed = 3,
    /// Memory allocation failed
    SercoreOutOfMemory = 4,

    // === I/O errors (20-29) ===
    /// Underlying sink or source failed
    SercoreIoError = 20,

    // === Serialization errors (30-39) ===
    /// Input shorter than the declared record length
    SercoreTruncatedInput = 30,
    /// Length prefix negative, too large or unrepresentable
    SercoreMalformedLength = 31,
    /// Text not valid in the configured encoding
    SercoreEncodingError = 32,
    /// Caller buffer too small for the encoded record
    SercoreBufferTooSmall = 33,
}

impl From<&sercore::Error> for SercoreError {
    fn from(err: &sercore::Error) -> Self {
        match err.kind() {
            ErrorKind::Io => SercoreError::SercoreIoError,
            ErrorKind::TruncatedInput => SercoreError::SercoreTruncatedInput,
            ErrorKind::MalformedLength => SercoreError::SercoreMalformedLength,
            ErrorKind::Encoding => SercoreError::SercoreEncodingError,
            ErrorKind::BufferTooSmall => SercoreError::SercoreBufferTooSmall,
        }
    }
}

pub(crate) fn map_error(context: &str, err: &sercore::Error) -> SercoreError {
    log::debug!("[SERCORE-C] {} failed: {}", context, err);
    SercoreError::from(err)
}

/// Borrow `len` bytes at `data` as a slice. A NULL `data` is only valid for
/// `len == 0`.
pub(crate) unsafe fn input_slice<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(std::slice::from_raw_parts(data, len))
}

/// Copy `bytes` into a fresh `malloc` allocation with a trailing NUL.
///
/// The NUL is not counted in the returned length.
pub(crate) unsafe fn malloc_copy(bytes: &[u8]) -> Option<*mut u8> {
    let ptr = libc::malloc(bytes.len() + 1).cast::<u8>();
    if ptr.is_null() {
        return None;
    }
    ptr::copy_nonoverlapping(bytes.as_ptr(), ptr, bytes.len());
    *ptr.add(bytes.len()) = 0;
    Some(ptr)
}

/// Encode `value` with `codec` and hand the record to the caller.
pub(crate) unsafe fn serialize_with(
    codec: &StringCodec,
    value: *const c_char,
    value_len: usize,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> SercoreError {
    if out_data.is_null() || out_len.is_null() {
        return SercoreError::SercoreInvalidArgument;
    }
    let Some(bytes) = input_slice(value.cast::<u8>(), value_len) else {
        return SercoreError::SercoreInvalidArgument;
    };
    let Ok(text) = std::str::from_utf8(bytes) else {
        log::debug!("[SERCORE-C] serialize_string input is not valid UTF-8");
        return SercoreError::SercoreEncodingError;
    };

    let record = match codec.encode_to_vec(text) {
        Ok(record) => record,
        Err(e) => return map_error("serialize_string", &e),
    };
    let Some(ptr) = malloc_copy(&record) else {
        return SercoreError::SercoreOutOfMemory;
    };
    *out_data = ptr;
    *out_len = record.len();
    SercoreError::SercoreOk
}

/// Decode one record with `codec` and hand the string to the caller.
pub(crate) unsafe fn deserialize_with(
    codec: &StringCodec,
    data: *const u8,
    len: usize,
    out_str: *mut *mut c_char,
    out_len: *mut usize,
) -> SercoreError {
    if out_str.is_null() || out_len.is_null() {
        return SercoreError::SercoreInvalidArgument;
    }
    let Some(bytes) = input_slice(data, len) else {
        return SercoreError::SercoreInvalidArgument;
    };

    let value = match codec.decode_from_slice(bytes) {
        Ok((value, _)) => value,
        Err(e) => return map_error("deserialize_string", &e),
    };
    let Some(ptr) = malloc_copy(value.as_bytes()) else {
        return SercoreError::SercoreOutOfMemory;
    };
    *out_str = ptr.cast::<c_char>();
    *out_len = value.len();
    SercoreError::SercoreOk
}

/// Serialize a UTF-8 string with the default (Hadoop) framing.
///
/// # Safety
/// - `value` must point to `value_len` readable bytes (may be NULL if `value_len` is 0).
/// - `out_data` and `out_len` must be valid writable pointers.
/// - On success `*out_data` must be released with `sercore_buffer_free`.
///
/// # Returns
/// `SercoreOk`, or `SercoreEncodingError` if `value` is not valid UTF-8.
#[no_mangle]
pub unsafe extern "C" fn sercore_serialize_string(
    value: *const c_char,
    value_len: usize,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> SercoreError {
    serialize_with(&StringCodec::hadoop(), value, value_len, out_data, out_len)
}

/// Deserialize the first string record in `data` with the default framing.
///
/// The result is NUL-terminated; `*out_len` is its byte length without the
/// terminator (the string may itself contain NUL bytes).
///
/// # Safety
/// - `data` must point to `len` readable bytes (may be NULL if `len` is 0).
/// - `out_str` and `out_len` must be valid writable pointers.
/// - On success `*out_str` must be released with `sercore_buffer_free`.
#[no_mangle]
pub unsafe extern "C" fn sercore_deserialize_string(
    data: *const u8,
    len: usize,
    out_str: *mut *mut c_char,
    out_len: *mut usize,
) -> SercoreError {
    deserialize_with(&StringCodec::hadoop(), data, len, out_str, out_len)
}

/// Release a buffer returned by this library.
///
/// # Safety
/// - `buffer` must be NULL or a pointer returned through an `out_*` argument
///   of this library, not yet freed.
#[no_mangle]
pub unsafe extern "C" fn sercore_buffer_free(buffer: *mut c_void) {
    if !buffer.is_null() {
        libc::free(buffer);
    }
}

/// Static description of an error code.
///
/// # Returns
/// Pointer to a static null-terminated string; never NULL.
#[no_mangle]
pub extern "C" fn sercore_error_message(error: SercoreError) -> *const c_char {
    let msg: &'static [u8] = match error {
        SercoreError::SercoreOk => b"ok\0",
        SercoreError::SercoreInvalidArgument => b"invalid argument\0",
        SercoreError::SercoreOperationFailed => b"operation failed\0",
        SercoreError::SercoreOutOfMemory => b"out of memory\0",
        SercoreError::SercoreIoError => b"I/O error\0",
        SercoreError::SercoreTruncatedInput => b"truncated input\0",
        SercoreError::SercoreMalformedLength => b"malformed length prefix\0",
        SercoreError::SercoreEncodingError => b"text encoding error\0",
        SercoreError::SercoreBufferTooSmall => b"buffer too small\0",
    };
    msg.as_ptr().cast::<c_char>()
}

/// Library version as a static null-terminated string.
#[no_mangle]
pub extern "C" fn sercore_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast::<c_char>()
}
