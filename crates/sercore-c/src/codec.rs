// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Configured codec handles for sercore C FFI

use std::os::raw::c_char;
use std::ptr;

use sercore::{CodecConfig, LengthPrefix, StringCodec, TextEncoding};

use super::{deserialize_with, input_slice, map_error, serialize_with, SercoreError};

/// Opaque handle to a configured codec
#[repr(C)]
pub struct SercoreCodec {
    _private: [u8; 0],
}

/// Length prefix format
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SercoreLengthPrefix {
    /// Hadoop zero-compressed vint
    SercorePrefixVarInt = 0,
    SercorePrefixU16Be = 1,
    SercorePrefixU32Be = 2,
    SercorePrefixU32Le = 3,
    SercorePrefixU64Be = 4,
}

impl From<SercoreLengthPrefix> for LengthPrefix {
    fn from(prefix: SercoreLengthPrefix) -> Self {
        match prefix {
            SercoreLengthPrefix::SercorePrefixVarInt => LengthPrefix::VarInt,
            SercoreLengthPrefix::SercorePrefixU16Be => LengthPrefix::U16Be,
            SercoreLengthPrefix::SercorePrefixU32Be => LengthPrefix::U32Be,
            SercoreLengthPrefix::SercorePrefixU32Le => LengthPrefix::U32Le,
            SercoreLengthPrefix::SercorePrefixU64Be => LengthPrefix::U64Be,
        }
    }
}

/// Payload text encoding
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SercoreTextEncoding {
    SercoreEncodingUtf8 = 0,
    SercoreEncodingAscii = 1,
    SercoreEncodingLatin1 = 2,
}

impl From<SercoreTextEncoding> for TextEncoding {
    fn from(encoding: SercoreTextEncoding) -> Self {
        match encoding {
            SercoreTextEncoding::SercoreEncodingUtf8 => TextEncoding::Utf8,
            SercoreTextEncoding::SercoreEncodingAscii => TextEncoding::Ascii,
            SercoreTextEncoding::SercoreEncodingLatin1 => TextEncoding::Latin1,
        }
    }
}

/// `max_len` value asking `sercore_codec_create` for the default limit:
/// 64 MiB, or the prefix capacity when that is smaller.
pub const SERCORE_MAX_LEN_DEFAULT: u64 = u64::MAX;

fn into_handle(codec: StringCodec) -> *mut SercoreCodec {
    Box::into_raw(Box::new(codec)).cast::<SercoreCodec>()
}

/// Create a codec with an explicit configuration
///
/// # Arguments
/// * `prefix` - Length prefix format
/// * `max_len` - Maximum payload length in bytes, or `SERCORE_MAX_LEN_DEFAULT`.
///   0 is a real limit: only empty strings are accepted.
/// * `encoding` - Payload text encoding
///
/// # Returns
/// Opaque codec handle, or NULL if `max_len` exceeds the prefix capacity.
/// Release with `sercore_codec_destroy`.
#[no_mangle]
pub extern "C" fn sercore_codec_create(
    prefix: SercoreLengthPrefix,
    max_len: u64,
    encoding: SercoreTextEncoding,
) -> *mut SercoreCodec {
    let mut config = CodecConfig::default()
        .with_prefix(prefix.into())
        .with_encoding(encoding.into());
    config.max_len = if max_len == SERCORE_MAX_LEN_DEFAULT {
        config.effective_max_len()
    } else {
        max_len
    };

    match StringCodec::try_new(config) {
        Ok(codec) => into_handle(codec),
        Err(e) => {
            log::warn!("[SERCORE-C] Rejected codec config: {}", e);
            ptr::null_mut()
        }
    }
}

/// Create a codec from a YAML profile file
///
/// # Safety
/// - `path` must be a valid null-terminated C string.
/// - `profile` must be a valid null-terminated C string, or NULL for the document's default.
///
/// # Returns
/// Opaque codec handle, or NULL if the file cannot be loaded or the profile is invalid.
#[cfg(feature = "config-loaders")]
#[no_mangle]
pub unsafe extern "C" fn sercore_codec_create_from_yaml(
    path: *const c_char,
    profile: *const c_char,
) -> *mut SercoreCodec {
    use sercore::loaders::YamlLoader;
    use std::ffi::CStr;

    if path.is_null() {
        return ptr::null_mut();
    }
    let Ok(path_str) = CStr::from_ptr(path).to_str() else {
        return ptr::null_mut();
    };
    let profile_name = if profile.is_null() {
        None
    } else {
        match CStr::from_ptr(profile).to_str() {
            Ok(name) => Some(name),
            Err(_) => return ptr::null_mut(),
        }
    };

    match YamlLoader::load_config(path_str, profile_name) {
        Ok(config) => {
            log::info!(
                "[SERCORE-C] Loaded codec profile '{}' from {}",
                profile_name.unwrap_or("<default>"),
                path_str
            );
            into_handle(StringCodec::new(config))
        }
        Err(e) => {
            log::warn!("[SERCORE-C] {}", e);
            ptr::null_mut()
        }
    }
}

/// Destroy a codec
///
/// # Safety
/// - `codec` must be NULL or a pointer returned from `sercore_codec_create*`
/// - Must not be called more than once with the same pointer
#[no_mangle]
pub unsafe extern "C" fn sercore_codec_destroy(codec: *mut SercoreCodec) {
    if !codec.is_null() {
        let _ = Box::from_raw(codec.cast::<StringCodec>());
    }
}

/// Serialize a UTF-8 string with a configured codec
///
/// # Safety
/// - `codec` must be a valid pointer returned from `sercore_codec_create*`
/// - `value` must point to `value_len` readable bytes (may be NULL if `value_len` is 0)
/// - `out_data` and `out_len` must be valid writable pointers
/// - On success `*out_data` must be released with `sercore_buffer_free`
#[no_mangle]
pub unsafe extern "C" fn sercore_codec_serialize_string(
    codec: *const SercoreCodec,
    value: *const c_char,
    value_len: usize,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> SercoreError {
    if codec.is_null() {
        return SercoreError::SercoreInvalidArgument;
    }
    let codec_ref = &*codec.cast::<StringCodec>();
    serialize_with(codec_ref, value, value_len, out_data, out_len)
}

/// Deserialize the first string record in `data` with a configured codec
///
/// # Safety
/// - `codec` must be a valid pointer returned from `sercore_codec_create*`
/// - `data` must point to `len` readable bytes (may be NULL if `len` is 0)
/// - `out_str` and `out_len` must be valid writable pointers
/// - On success `*out_str` must be released with `sercore_buffer_free`
#[no_mangle]
pub unsafe extern "C" fn sercore_codec_deserialize_string(
    codec: *const SercoreCodec,
    data: *const u8,
    len: usize,
    out_str: *mut *mut c_char,
    out_len: *mut usize,
) -> SercoreError {
    if codec.is_null() {
        return SercoreError::SercoreInvalidArgument;
    }
    let codec_ref = &*codec.cast::<StringCodec>();
    deserialize_with(codec_ref, data, len, out_str, out_len)
}

/// Serialize into a caller-provided buffer
///
/// # Safety
/// - `codec` must be a valid pointer returned from `sercore_codec_create*`
/// - `value` must point to `value_len` readable bytes (may be NULL if `value_len` is 0)
/// - `buf` must point to a writable buffer of at least `max_len` bytes
/// - `len_out` must be a valid pointer to write the record length
///
/// # Returns
/// `SercoreOk` with `*len_out` set to the bytes written, or
/// `SercoreBufferTooSmall` with `*len_out` set to the required size.
#[no_mangle]
pub unsafe extern "C" fn sercore_codec_serialize_into(
    codec: *const SercoreCodec,
    value: *const c_char,
    value_len: usize,
    buf: *mut u8,
    max_len: usize,
    len_out: *mut usize,
) -> SercoreError {
    if codec.is_null() || buf.is_null() || len_out.is_null() {
        return SercoreError::SercoreInvalidArgument;
    }
    let codec_ref = &*codec.cast::<StringCodec>();
    let Some(bytes) = input_slice(value.cast::<u8>(), value_len) else {
        return SercoreError::SercoreInvalidArgument;
    };
    let Ok(text) = std::str::from_utf8(bytes) else {
        return SercoreError::SercoreEncodingError;
    };

    let out = std::slice::from_raw_parts_mut(buf, max_len);
    match codec_ref.encode_into(text, out) {
        Ok(written) => {
            *len_out = written;
            SercoreError::SercoreOk
        }
        Err(sercore::Error::BufferTooSmall { required, .. }) => {
            *len_out = required;
            SercoreError::SercoreBufferTooSmall
        }
        Err(e) => map_error("serialize_into", &e),
    }
}
