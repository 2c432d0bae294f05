// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # sercore
//!
//! Length-prefixed string serialization compatible with the Hadoop pipes
//! wire format.
//!
//! A record is a length prefix followed by the string's bytes. The prefix
//! format, the maximum accepted length and the text encoding are set with a
//! [`CodecConfig`]; the default is a Hadoop vint prefix with a UTF-8 payload.
//!
//! ## Quick Start
//!
//! ```
//! use sercore::{deserialize_string, serialize_string};
//!
//! let bytes = serialize_string("hello, world")?;
//! assert_eq!(bytes[0], 12);
//! assert_eq!(deserialize_string(&bytes)?, "hello, world");
//! # Ok::<(), sercore::Error>(())
//! ```
//!
//! ## Streams
//!
//! [`StringCodec::encode`] and [`StringCodec::decode`] work on any
//! `std::io::Write` / `std::io::Read`. Calls are synchronous and the codec
//! keeps no state between them; callers sharing a stream across threads must
//! lock it themselves.
//!
//! ## Errors
//!
//! Every failure maps to one [`ErrorKind`]: `Io`, `TruncatedInput`,
//! `MalformedLength`, `Encoding`, or `BufferTooSmall` for the fixed-buffer
//! helper.
//!
//! ## Features
//!
//! - `config-loaders` (default): YAML codec profiles in [`loaders`].

pub mod codec;
pub mod config;
pub mod cursor;
pub mod error;
pub mod loaders;
pub mod serial;
mod stream;
pub mod text;
pub mod varint;

pub use codec::StringCodec;
pub use config::{CodecConfig, LengthPrefix, TextEncoding, DEFAULT_MAX_STRING_LEN};
pub use error::{Error, ErrorKind, LengthError, Result};
pub use serial::{deserialize_string, serialize_string};
