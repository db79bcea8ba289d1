use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_PORT: u16 = 88;
pub const CONTROL_PATH: &str = "/cgi-bin/CGIProxy.fcgi";
pub const STREAM_PATH: &str = "/cgi-bin/CGIStream.cgi";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for a single camera.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default = "default_verify_tls")]
    pub verify_tls_certificates: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_verify_tls() -> bool {
    true
}

impl ClientConfig {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            host: host.into(),
            port: DEFAULT_PORT,
            protocol: Protocol::default(),
            verify_tls_certificates: true,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_tls_verification(mut self, verify: bool) -> Self {
        self.verify_tls_certificates = verify;
        self
    }

    /// `protocol://host:port`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    pub fn control_url(&self) -> String {
        format!("{}{}", self.base_url(), CONTROL_PATH)
    }

    pub fn stream_url(&self) -> String {
        format!("{}{}", self.base_url(), STREAM_PATH)
    }

    /// Checks the fields every request depends on. The password may be empty,
    /// which is how cameras ship from the factory.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfiguration("host is required".to_string()));
        }
        if self.username.trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "username is required".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(Error::InvalidConfiguration(
                "port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("verify_tls_certificates", &self.verify_tls_certificates)
            .finish()
    }
}

/// On-disk configuration, a `[camera]` table in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub camera: ClientConfig,
}

impl Config {
    /// Reads `config.toml` from the working directory.
    pub fn new() -> Result<Self> {
        Self::from_file("config.toml")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&config_str)?;
        info!("Config: {:?}", config);
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)
            .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;
        config.camera.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("foo", "bar", "192.168.1.50");
        assert_eq!(config.port, 88);
        assert_eq!(config.protocol, Protocol::Http);
        assert!(config.verify_tls_certificates);
        assert_eq!(config.base_url(), "http://192.168.1.50:88");
    }

    #[test]
    fn test_debug_hides_password() {
        let config = ClientConfig::new("foo", "secret", "cam.local");
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(ClientConfig::new("", "bar", "host").validate().is_err());
        assert!(ClientConfig::new("foo", "bar", " ").validate().is_err());
        assert!(ClientConfig::new("foo", "bar", "host")
            .with_port(0)
            .validate()
            .is_err());
        assert!(ClientConfig::new("admin", "", "host").validate().is_ok());
    }
}
