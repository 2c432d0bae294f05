// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Logging setup for hosts embedding the codec.
//!
//! The codec logs under the `sercore` and `sercore_c` targets only. The
//! level-based entry points enable exactly those targets and silence the
//! rest of the host process's Rust logging; use
//! [`sercore_logging_init_with_filter`] for anything finer.

use std::ffi::CStr;
use std::os::raw::c_char;

use log::LevelFilter;

use super::SercoreError;

/// Log targets the codec emits records under.
const CODEC_TARGETS: [&str; 2] = ["sercore", "sercore_c"];

/// Verbosity of codec log output
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SercoreLogLevel {
    SercoreLogOff = 0,
    /// Rejected handles and configs
    SercoreLogWarn = 2,
    /// Profile loading
    SercoreLogInfo = 3,
    /// Every failed call, with the error detail
    SercoreLogDebug = 4,
    /// Every record encoded or decoded
    SercoreLogTrace = 5,
}

impl SercoreLogLevel {
    fn filter(self) -> LevelFilter {
        match self {
            SercoreLogLevel::SercoreLogOff => LevelFilter::Off,
            SercoreLogLevel::SercoreLogWarn => LevelFilter::Warn,
            SercoreLogLevel::SercoreLogInfo => LevelFilter::Info,
            SercoreLogLevel::SercoreLogDebug => LevelFilter::Debug,
            SercoreLogLevel::SercoreLogTrace => LevelFilter::Trace,
        }
    }
}

/// `env_logger` filter spec enabling only the codec targets at `level`.
fn codec_filter(level: SercoreLogLevel) -> String {
    let level = level.filter().to_string().to_ascii_lowercase();
    let mut spec = String::from("off");
    for target in CODEC_TARGETS {
        spec.push_str(&format!(",{}={}", target, level));
    }
    spec
}

fn codec_builder(spec: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(spec).format_timestamp_millis();
    builder
}

fn install(mut builder: env_logger::Builder) -> SercoreError {
    match builder.try_init() {
        Ok(()) => SercoreError::SercoreOk,
        Err(_) => SercoreError::SercoreOperationFailed, // logger already set
    }
}

/// Send codec log records at `level` and above to stderr
///
/// # Returns
/// `SercoreOk`, or `SercoreOperationFailed` if a logger is already installed
///
/// # Example (C)
/// ```c
/// sercore_logging_init(SERCORE_LOG_DEBUG);
/// ```
#[no_mangle]
pub extern "C" fn sercore_logging_init(level: SercoreLogLevel) -> SercoreError {
    install(codec_builder(&codec_filter(level)))
}

/// Same as [`sercore_logging_init`], but a set `RUST_LOG` replaces the
/// codec-only filter.
#[no_mangle]
pub extern "C" fn sercore_logging_init_env(default_level: SercoreLogLevel) -> SercoreError {
    let spec = std::env::var("RUST_LOG").unwrap_or_else(|_| codec_filter(default_level));
    install(codec_builder(&spec))
}

/// Install a logger with a raw `env_logger` filter string
///
/// # Safety
/// - `filter` must be a valid null-terminated C string or NULL.
///
/// # Example (C)
/// ```c
/// sercore_logging_init_with_filter("sercore::codec=trace,warn");
/// ```
#[no_mangle]
pub unsafe extern "C" fn sercore_logging_init_with_filter(filter: *const c_char) -> SercoreError {
    if filter.is_null() {
        return SercoreError::SercoreInvalidArgument;
    }
    let Ok(spec) = CStr::from_ptr(filter).to_str() else {
        return SercoreError::SercoreInvalidArgument;
    };
    install(codec_builder(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_codec_filter_spec() {
        assert_eq!(
            codec_filter(SercoreLogLevel::SercoreLogDebug),
            "off,sercore=debug,sercore_c=debug"
        );
        assert_eq!(
            codec_filter(SercoreLogLevel::SercoreLogOff),
            "off,sercore=off,sercore_c=off"
        );
    }

    #[test]
    fn test_level_applies_to_codec_targets_only() {
        let logger = codec_builder(&codec_filter(SercoreLogLevel::SercoreLogDebug)).build();

        assert!(enabled(&logger, "sercore::codec", Level::Debug));
        assert!(enabled(&logger, "sercore_c::codec", Level::Warn));
        assert!(!enabled(&logger, "sercore::codec", Level::Trace));

        assert!(!enabled(&logger, "hyper::client", Level::Error));
        assert!(!enabled(&logger, "my_host_app", Level::Warn));
    }

    #[test]
    fn test_off_silences_codec() {
        let logger = codec_builder(&codec_filter(SercoreLogLevel::SercoreLogOff)).build();
        assert!(!enabled(&logger, "sercore::codec", Level::Error));
        assert!(!enabled(&logger, "sercore_c", Level::Error));
    }
}
