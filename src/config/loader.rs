//! Property loading with tier-based merging.
//!
//! Reads flat YAML property files, lowest precedence first, and merges them
//! key by key into a single [`Properties`] map ready for
//! [`BridgeConfig::overlay`](super::BridgeConfig::overlay).

use super::merge::merge_all;
use super::types::Properties;
use crate::error::LoadError;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One property file in the tier list.
#[derive(Debug, Clone)]
struct PropertiesSource {
    path: PathBuf,
    /// Missing required files are an error; missing optional files are skipped.
    required: bool,
}

/// Loader that merges property files in precedence order.
#[derive(Debug, Clone, Default)]
pub struct PropertiesLoader {
    sources: Vec<PropertiesSource>,
}

impl PropertiesLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file that must exist. Later files take precedence.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(PropertiesSource {
            path: path.into(),
            required: true,
        });
        self
    }

    /// Add a file that is skipped when absent.
    pub fn with_optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(PropertiesSource {
            path: path.into(),
            required: false,
        });
        self
    }

    /// Configured file paths, lowest precedence first.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.sources.iter().map(|s| s.path.as_path())
    }

    /// Read every source and merge them into one map.
    pub fn load(&self) -> Result<Properties, LoadError> {
        let mut tiers = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            if !source.required && !source.path.exists() {
                warn!(path = %source.path.display(), "optional properties file not found, skipping");
                continue;
            }

            let content = std::fs::read_to_string(&source.path).map_err(|e| LoadError::Io {
                path: source.path.clone(),
                source: e,
            })?;
            let properties = parse_properties_yaml(&content, &source.path.display().to_string())?;
            debug!(
                path = %source.path.display(),
                count = properties.len(),
                "loaded properties file"
            );
            tiers.push(properties);
        }

        Ok(merge_all(tiers))
    }
}

/// Parse a flat YAML mapping of property names to scalar values.
///
/// Strings are taken verbatim, numbers and booleans are stringified, and
/// nulls mean "not specified" and are left out. An empty document yields an
/// empty map.
pub fn parse_properties_yaml(content: &str, origin: &str) -> Result<Properties, LoadError> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| LoadError::Yaml {
        origin: origin.to_string(),
        source: e,
    })?;

    let mapping = match document {
        Value::Null => return Ok(Properties::new()),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(LoadError::NotAMapping {
                origin: origin.to_string(),
            });
        }
    };

    let mut properties = Properties::new();
    for (key, value) in mapping {
        let key = scalar_to_string(&key).ok_or_else(|| LoadError::NotAMapping {
            origin: origin.to_string(),
        })?;
        if value.is_null() {
            continue;
        }
        let value = scalar_to_string(&value).ok_or_else(|| LoadError::NonScalar {
            key: key.clone(),
            origin: origin.to_string(),
        })?;
        properties.insert(key, value);
    }
    Ok(properties)
}

/// Split a `KEY=VALUE` assignment. The value may be empty or contain `=`.
pub fn parse_assignment(text: &str) -> Result<(String, String), LoadError> {
    match text.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(LoadError::InvalidAssignment(text.to_string())),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
