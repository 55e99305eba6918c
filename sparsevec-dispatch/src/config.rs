use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::SPARSEVEC_TYPE_NAME;
use crate::format::Format;

/// A type name and the OID the server assigned to it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TypeRegistration {
    pub name: String,
    pub oid: u32,
}

///
/// Settings for building a [`CodecRegistry`](crate::CodecRegistry), usually read from TOML:
///
/// ```toml
/// preferred_format = "binary"
/// text_fallback = true
/// log_level = "info"
///
/// [[types]]
/// name = "sparsevec"
/// oid = 16390
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    #[serde(default = "default_preferred_format")]
    pub preferred_format: Format,
    #[serde(default = "default_text_fallback")]
    pub text_fallback: bool,
    pub log_level: Option<String>,
    #[serde(default = "default_types")]
    pub types: Vec<TypeRegistration>,
}

fn default_preferred_format() -> Format {
    Format::Binary
}

fn default_text_fallback() -> bool {
    true
}

// OIDs of extension types differ per database; 0 means "not resolved yet"
fn default_types() -> Vec<TypeRegistration> {
    vec![TypeRegistration {
        name: SPARSEVEC_TYPE_NAME.to_string(),
        oid: 0,
    }]
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            preferred_format: default_preferred_format(),
            text_fallback: default_text_fallback(),
            log_level: None,
            types: default_types(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistryConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type RegistryConfigResult<T> = std::result::Result<T, RegistryConfigError>;

impl FromStr for RegistryConfig {
    type Err = RegistryConfigError;

    fn from_str(s: &str) -> RegistryConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<&Path> for RegistryConfig {
    type Error = RegistryConfigError;

    fn try_from(path: &Path) -> RegistryConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_try_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
preferred_format = "text"
text_fallback = false
log_level = "debug"

[[types]]
name = "sparsevec"
oid = 16390
"#
        )
        .unwrap();

        let config = RegistryConfig::try_from(file.path()).unwrap();
        assert_eq!(config.preferred_format, Format::Text);
        assert_eq!(config.text_fallback, false);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.types,
            vec![TypeRegistration {
                name: "sparsevec".to_string(),
                oid: 16390
            }]
        );
    }

    #[rstest]
    fn test_defaults() {
        let config: RegistryConfig = "".parse().unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.preferred_format, Format::Binary);
        assert_eq!(config.text_fallback, true);
        assert_eq!(config.types[0].name, SPARSEVEC_TYPE_NAME);
    }

    #[rstest]
    fn test_invalid_format_name() {
        let result = "preferred_format = \"json\"".parse::<RegistryConfig>();
        assert!(matches!(result, Err(RegistryConfigError::Toml(_))));
    }

    #[rstest]
    fn test_missing_file() {
        let result = RegistryConfig::try_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(RegistryConfigError::Io(_))));
    }
}
