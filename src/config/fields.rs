//! The recognized property table.
//!
//! Every recognized property is a [`Field`]. Serialization and the diagnostic
//! listing walk [`Field::ALL`]; overlay walks [`Field::APPLY_ORDER`]. A new
//! property goes into both arrays.

use super::timespan::{format_timespan, parse_timespan};
use super::types::BridgeConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::PathBuf;

/// How a property's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Existing directory, stored as a canonical absolute path.
    Directory,
    /// Free text, stored verbatim.
    Text,
    /// Base-10 32-bit signed integer.
    Integer,
    /// `TimeSpan`-style duration text.
    Duration,
    /// `true` / `false`, case-insensitive.
    Boolean,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Directory => "directory",
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Duration => "duration",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// A recognized configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ResourceFolder,
    Host,
    Port,
    HttpPort,
    HttpsPort,
    TcpPort,
    WebSocketPort,
    SecureWebSocketPort,
    RootCertificatePassword,
    RootCertificateValidityPeriod,
    MaxIdleTimeSpan,
    UseFiddlerUrl,
}

impl Field {
    /// All fields in their fixed listing order.
    pub const ALL: [Field; 12] = [
        Field::ResourceFolder,
        Field::Host,
        Field::Port,
        Field::HttpPort,
        Field::HttpsPort,
        Field::TcpPort,
        Field::WebSocketPort,
        Field::SecureWebSocketPort,
        Field::RootCertificatePassword,
        Field::RootCertificateValidityPeriod,
        Field::MaxIdleTimeSpan,
        Field::UseFiddlerUrl,
    ];

    /// Order in which overrides are parsed, and so which bad field is reported first.
    pub const APPLY_ORDER: [Field; 12] = [
        Field::ResourceFolder,
        Field::Host,
        Field::RootCertificatePassword,
        Field::RootCertificateValidityPeriod,
        Field::Port,
        Field::HttpPort,
        Field::HttpsPort,
        Field::TcpPort,
        Field::WebSocketPort,
        Field::SecureWebSocketPort,
        Field::MaxIdleTimeSpan,
        Field::UseFiddlerUrl,
    ];

    /// Property key. These names are a serialization contract and must not change.
    pub fn key(&self) -> &'static str {
        match self {
            Field::ResourceFolder => "BridgeResourceFolder",
            Field::Host => "BridgeHost",
            Field::Port => "BridgePort",
            Field::HttpPort => "BridgeHttpPort",
            Field::HttpsPort => "BridgeHttpsPort",
            Field::TcpPort => "BridgeTcpPort",
            Field::WebSocketPort => "BridgeWebSocketPort",
            Field::SecureWebSocketPort => "BridgeSecureWebSocketPort",
            Field::RootCertificatePassword => "TestRootCertificatePassword",
            Field::RootCertificateValidityPeriod => "TestRootCertificateValidityPeriod",
            Field::MaxIdleTimeSpan => "BridgeMaxIdleTimeSpan",
            Field::UseFiddlerUrl => "UseFiddlerUrl",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::ResourceFolder => FieldKind::Directory,
            Field::Host | Field::RootCertificatePassword => FieldKind::Text,
            Field::Port
            | Field::HttpPort
            | Field::HttpsPort
            | Field::TcpPort
            | Field::WebSocketPort
            | Field::SecureWebSocketPort => FieldKind::Integer,
            Field::RootCertificateValidityPeriod | Field::MaxIdleTimeSpan => FieldKind::Duration,
            Field::UseFiddlerUrl => FieldKind::Boolean,
        }
    }

    /// Look up a field by its exact (case-sensitive) key.
    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Parse `raw` and store it into `config`.
    pub(super) fn apply(&self, config: &mut BridgeConfig, raw: &str) -> ConfigResult<()> {
        match self {
            Field::ResourceFolder => config.resource_folder = Some(self.parse_directory(raw)?),
            Field::Host => config.host = raw.to_string(),
            Field::Port => config.port = self.parse_integer(raw)?,
            Field::HttpPort => config.http_port = self.parse_integer(raw)?,
            Field::HttpsPort => config.https_port = self.parse_integer(raw)?,
            Field::TcpPort => config.tcp_port = self.parse_integer(raw)?,
            Field::WebSocketPort => config.web_socket_port = self.parse_integer(raw)?,
            Field::SecureWebSocketPort => {
                config.secure_web_socket_port = self.parse_integer(raw)?
            }
            Field::RootCertificatePassword => config.root_certificate_password = raw.to_string(),
            Field::RootCertificateValidityPeriod => {
                config.root_certificate_validity_period = self.parse_duration(raw)?
            }
            Field::MaxIdleTimeSpan => config.max_idle_duration = self.parse_duration(raw)?,
            Field::UseFiddlerUrl => config.use_fiddler_url = self.parse_boolean(raw)?,
        }
        Ok(())
    }

    /// Render the field's current value as property text.
    pub fn render(&self, config: &BridgeConfig) -> String {
        match self {
            Field::ResourceFolder => config
                .resource_folder
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Field::Host => config.host.clone(),
            Field::Port => config.port.to_string(),
            Field::HttpPort => config.http_port.to_string(),
            Field::HttpsPort => config.https_port.to_string(),
            Field::TcpPort => config.tcp_port.to_string(),
            Field::WebSocketPort => config.web_socket_port.to_string(),
            Field::SecureWebSocketPort => config.secure_web_socket_port.to_string(),
            Field::RootCertificatePassword => config.root_certificate_password.clone(),
            Field::RootCertificateValidityPeriod => {
                format_timespan(&config.root_certificate_validity_period)
            }
            Field::MaxIdleTimeSpan => format_timespan(&config.max_idle_duration),
            Field::UseFiddlerUrl => render_boolean(config.use_fiddler_url).to_string(),
        }
    }

    fn parse_directory(&self, raw: &str) -> ConfigResult<PathBuf> {
        let invalid = || ConfigError::InvalidDirectory {
            field: self.key(),
            value: raw.to_string(),
        };
        if raw.is_empty() {
            return Err(invalid());
        }
        let path = std::fs::canonicalize(raw).map_err(|_| invalid())?;
        // The stored path is rendered back as text, so it must be valid UTF-8.
        if !path.is_dir() || path.to_str().is_none() {
            return Err(invalid());
        }
        Ok(path)
    }

    fn parse_integer(&self, raw: &str) -> ConfigResult<i32> {
        raw.trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidInteger {
                field: self.key(),
                value: raw.to_string(),
            })
    }

    fn parse_duration(&self, raw: &str) -> ConfigResult<chrono::Duration> {
        parse_timespan(raw).ok_or_else(|| ConfigError::InvalidDuration {
            field: self.key(),
            value: raw.to_string(),
        })
    }

    fn parse_boolean(&self, raw: &str) -> ConfigResult<bool> {
        let text = raw.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConfigError::InvalidBoolean {
                field: self.key(),
                value: raw.to_string(),
            })
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn render_boolean(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
