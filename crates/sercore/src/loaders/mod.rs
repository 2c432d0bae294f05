// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec profile loaders.
//!
//! # Example
//!
//! ```rust,ignore
//! use sercore::loaders::YamlLoader;
//!
//! let doc = YamlLoader::load_from_file("codec_profiles.yaml")?;
//! let config = YamlLoader::get_profile(&doc, "hadoop")?;
//! ```

#[cfg(feature = "config-loaders")]
pub mod yaml;

#[cfg(feature = "config-loaders")]
pub use yaml::{YamlCodecDocument, YamlCodecProfile, YamlLoader};
