//! The resolved bridge configuration value.

use super::fields::Field;
use crate::error::ConfigResult;
use chrono::Duration;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat `key -> text` property map, the input and output form of a configuration.
pub type Properties = BTreeMap<String, String>;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: i32 = 44283;
const DEFAULT_HTTP_PORT: i32 = 8081;
const DEFAULT_HTTPS_PORT: i32 = 44285;
const DEFAULT_TCP_PORT: i32 = 809;
const DEFAULT_WEB_SOCKET_PORT: i32 = 8083;
const DEFAULT_SECURE_WEB_SOCKET_PORT: i32 = 8084;

fn default_max_idle_duration() -> Duration {
    Duration::hours(24)
}

/// Fully resolved configuration for the test bridge.
///
/// Instances are immutable. New instances are derived with [`BridgeConfig::overlay`],
/// which never touches the base it starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub(super) resource_folder: Option<PathBuf>,
    pub(super) host: String,
    pub(super) port: i32,
    pub(super) http_port: i32,
    pub(super) https_port: i32,
    pub(super) tcp_port: i32,
    pub(super) web_socket_port: i32,
    pub(super) secure_web_socket_port: i32,
    pub(super) root_certificate_password: String,
    pub(super) root_certificate_validity_period: Duration,
    pub(super) max_idle_duration: Duration,
    pub(super) use_fiddler_url: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            resource_folder: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            http_port: DEFAULT_HTTP_PORT,
            https_port: DEFAULT_HTTPS_PORT,
            tcp_port: DEFAULT_TCP_PORT,
            web_socket_port: DEFAULT_WEB_SOCKET_PORT,
            secure_web_socket_port: DEFAULT_SECURE_WEB_SOCKET_PORT,
            root_certificate_password: String::new(),
            root_certificate_validity_period: Duration::zero(),
            max_idle_duration: default_max_idle_duration(),
            use_fiddler_url: false,
        }
    }
}

impl BridgeConfig {
    /// Configuration with every field at its compiled default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `overrides` on top of the defaults.
    pub fn from_properties(overrides: &Properties) -> ConfigResult<Self> {
        Self::overlay(None, Some(overrides))
    }

    /// Derive a new configuration from `base` (or the defaults) with `overrides` applied.
    ///
    /// Recognized keys are parsed and validated in [`Field::APPLY_ORDER`] and the
    /// first failure aborts the whole overlay. Unrecognized keys are ignored.
    /// The base is cloned up front, so nothing is observable on failure.
    pub fn overlay(base: Option<&BridgeConfig>, overrides: Option<&Properties>) -> ConfigResult<Self> {
        let mut config = base.cloned().unwrap_or_default();

        let Some(overrides) = overrides.filter(|o| !o.is_empty()) else {
            return Ok(config);
        };

        let applied = apply_overrides(&mut config, overrides)?;
        debug!(applied, "configuration overlay complete");
        Ok(config)
    }

    /// Derive a new configuration from this one with `overrides` applied.
    pub fn with_overrides(&self, overrides: &Properties) -> ConfigResult<Self> {
        Self::overlay(Some(self), Some(overrides))
    }

    /// Serialize to the flat property form, one entry per recognized field.
    pub fn to_properties(&self) -> Properties {
        Field::ALL
            .into_iter()
            .map(|field| (field.key().to_string(), field.render(self)))
            .collect()
    }

    /// Multi-line `  Key : 'value'` listing in fixed field order.
    pub fn describe(&self) -> String {
        Field::ALL
            .into_iter()
            .map(|field| format!("  {} : '{}'\n", field.key(), field.render(self)))
            .collect()
    }

    pub fn resource_folder(&self) -> Option<&Path> {
        self.resource_folder.as_deref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> i32 {
        self.port
    }

    pub fn http_port(&self) -> i32 {
        self.http_port
    }

    pub fn https_port(&self) -> i32 {
        self.https_port
    }

    pub fn tcp_port(&self) -> i32 {
        self.tcp_port
    }

    pub fn web_socket_port(&self) -> i32 {
        self.web_socket_port
    }

    pub fn secure_web_socket_port(&self) -> i32 {
        self.secure_web_socket_port
    }

    pub fn root_certificate_password(&self) -> &str {
        &self.root_certificate_password
    }

    pub fn root_certificate_validity_period(&self) -> Duration {
        self.root_certificate_validity_period
    }

    /// How long the bridge may sit idle before shutting itself down.
    pub fn max_idle_duration(&self) -> Duration {
        self.max_idle_duration
    }

    pub fn use_fiddler_url(&self) -> bool {
        self.use_fiddler_url
    }
}

/// Apply recognized overrides to `config`, returning how many were applied.
fn apply_overrides(config: &mut BridgeConfig, overrides: &Properties) -> ConfigResult<usize> {
    let mut applied = 0;
    for field in Field::APPLY_ORDER {
        if let Some(raw) = overrides.get(field.key()) {
            field.apply(config, raw)?;
            applied += 1;
            debug!(property = field.key(), "applied override");
        }
    }

    for key in overrides.keys().filter(|k| Field::from_key(k).is_none()) {
        debug!(property = %key, "ignoring unrecognized property");
    }

    Ok(applied)
}

impl std::fmt::Display for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
