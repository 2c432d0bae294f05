// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML codec profile loader.
//!
//! # Example YAML
//!
//! ```yaml
//! # codec_profiles.yaml
//! profiles:
//!   hadoop:
//!     prefix: VARINT
//!     max_len: 67108864
//!     encoding: UTF8
//!
//!   legacy_latin1:
//!     prefix: U16_BE
//!     encoding: LATIN1
//!
//! default_profile: hadoop
//! ```
//!
//! Omitted fields take the Hadoop defaults.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::{CodecConfig, LengthPrefix, TextEncoding};

/// YAML codec profile loader.
pub struct YamlLoader;

/// Root YAML document structure.
#[derive(Debug, Deserialize)]
pub struct YamlCodecDocument {
    /// Named codec profiles.
    #[serde(default)]
    pub profiles: HashMap<String, YamlCodecProfile>,

    /// Default profile name (optional).
    #[serde(default)]
    pub default_profile: Option<String>,
}

/// A single codec profile in YAML format.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct YamlCodecProfile {
    /// VARINT, U16_BE, U32_BE, U32_LE or U64_BE
    pub prefix: Option<String>,

    /// Maximum payload length in bytes
    pub max_len: Option<u64>,

    /// UTF8, ASCII or LATIN1
    pub encoding: Option<String>,
}

impl YamlLoader {
    /// Load codec profiles from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<YamlCodecDocument, String> {
        let yaml_content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read YAML file: {}", e))?;
        Self::parse_yaml(&yaml_content)
    }

    /// Parse YAML content.
    pub fn parse_yaml(yaml_content: &str) -> Result<YamlCodecDocument, String> {
        serde_yaml::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {}", e))
    }

    /// Get codec config by profile name.
    pub fn get_profile(doc: &YamlCodecDocument, name: &str) -> Result<CodecConfig, String> {
        let profile = doc
            .profiles
            .get(name)
            .ok_or_else(|| format!("Profile '{}' not found", name))?;
        Self::profile_to_config(profile)
    }

    /// Get the default profile, or the Hadoop config when the document has none.
    pub fn get_default_profile(doc: &YamlCodecDocument) -> Result<CodecConfig, String> {
        if let Some(ref default_name) = doc.default_profile {
            Self::get_profile(doc, default_name)
        } else if doc.profiles.len() == 1 {
            let (_, profile) = doc.profiles.iter().next().ok_or("empty profile map")?;
            Self::profile_to_config(profile)
        } else {
            Ok(CodecConfig::default())
        }
    }

    /// Load a config from a file in one step. `profile = None` uses the default.
    pub fn load_config<P: AsRef<Path>>(
        path: P,
        profile: Option<&str>,
    ) -> Result<CodecConfig, String> {
        let doc = Self::load_from_file(path)?;
        match profile {
            Some(name) => Self::get_profile(&doc, name),
            None => Self::get_default_profile(&doc),
        }
    }

    /// Convert a YAML profile into a validated [`CodecConfig`].
    pub fn profile_to_config(profile: &YamlCodecProfile) -> Result<CodecConfig, String> {
        let mut config = CodecConfig::default();

        if let Some(ref prefix) = profile.prefix {
            config.prefix = LengthPrefix::parse(prefix)
                .ok_or_else(|| format!("Invalid prefix: {}", prefix))?;
        }
        if let Some(ref encoding) = profile.encoding {
            config.encoding = TextEncoding::parse(encoding)
                .ok_or_else(|| format!("Invalid encoding: {}", encoding))?;
        }
        match profile.max_len {
            Some(max_len) => config.max_len = max_len,
            // Keep the default limit usable with narrow prefixes.
            None => config.max_len = config.effective_max_len(),
        }

        config.validate()?;
        log::debug!("[sercore] loaded codec profile {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
profiles:
  hadoop:
    prefix: VARINT
    max_len: 67108864
    encoding: UTF8
  legacy:
    prefix: U16_BE
    encoding: LATIN1
default_profile: legacy
";

    #[test]
    fn test_parse_profiles() {
        let doc = YamlLoader::parse_yaml(SAMPLE).expect("valid yaml");
        assert_eq!(doc.profiles.len(), 2);

        let hadoop = YamlLoader::get_profile(&doc, "hadoop").expect("hadoop");
        assert_eq!(hadoop, CodecConfig::hadoop());

        let legacy = YamlLoader::get_default_profile(&doc).expect("default");
        assert_eq!(legacy.prefix, LengthPrefix::U16Be);
        assert_eq!(legacy.encoding, TextEncoding::Latin1);
        assert_eq!(legacy.max_len, 65_535);
    }

    #[test]
    fn test_unknown_profile() {
        let doc = YamlLoader::parse_yaml(SAMPLE).expect("valid yaml");
        let err = YamlLoader::get_profile(&doc, "missing").unwrap_err();
        assert_eq!(err, "Profile 'missing' not found");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let profile = YamlCodecProfile {
            prefix: Some("U24_BE".into()),
            ..Default::default()
        };
        assert_eq!(
            YamlLoader::profile_to_config(&profile).unwrap_err(),
            "Invalid prefix: U24_BE"
        );

        let profile = YamlCodecProfile {
            prefix: Some("U16_BE".into()),
            max_len: Some(100_000),
            ..Default::default()
        };
        assert!(YamlLoader::profile_to_config(&profile).is_err());

        assert!(YamlLoader::parse_yaml("profiles:\n  p:\n    width: 4\n").is_err());
    }

    #[test]
    fn test_empty_document_uses_hadoop_defaults() {
        let doc = YamlLoader::parse_yaml("profiles: {}\n").expect("valid yaml");
        assert_eq!(
            YamlLoader::get_default_profile(&doc).unwrap(),
            CodecConfig::hadoop()
        );
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(SAMPLE.as_bytes()).expect("write temp file");

        let config = YamlLoader::load_config(f.path(), Some("hadoop")).expect("load");
        assert_eq!(config, CodecConfig::hadoop());

        let err = YamlLoader::load_from_file("/nonexistent/codec.yaml").unwrap_err();
        assert!(err.starts_with("Failed to read YAML file"));
    }
}
