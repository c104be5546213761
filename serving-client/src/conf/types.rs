use crate::conf::error::ConfigError;
use crate::conf::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Connection target for a serving client.
///
/// The `address`/`port` types make the structural invariants ("address is a
/// string", "port fits in 16 bits") unrepresentable to violate; the remaining
/// domain constraints are checked by [`ConnectionConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionConfig {
    pub address: String,
    pub port: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
}

/// Paths to certificate/key material for a secured channel.
///
/// `client_cert_path` and `client_key_path` must co-occur or both be absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    pub server_cert_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_path: Option<String>,
}

impl ConnectionConfig {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            tls_config: None,
        }
    }

    pub fn with_tls(mut self, tls_config: TlsConfig) -> Self {
        self.tls_config = Some(tls_config);
        self
    }

    /// Validate a dynamic config mapping and lift it into the typed form.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        validate::validate_config(value)?;

        // The mapping already passed validation, so deserialization can only
        // reject it for shape drift between validator and types.
        serde_json::from_value(value.clone())
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Read a JSON config file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

        let config = Self::from_value(&value)?;
        debug!(path = %path.display(), endpoint = %config.endpoint(), "loaded connection config");

        Ok(config)
    }

    /// Check the domain constraints on a config assembled directly in Rust:
    /// address syntax, TLS key pairing, and certificate file existence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !validate::address_is_valid(&self.address) {
            return Err(ConfigError::invalid_value(
                "address",
                "not localhost, an IPv4 address, or a domain name",
            ));
        }

        if let Some(tls_config) = &self.tls_config {
            tls_config.validate()?;
        }

        Ok(())
    }

    /// `address:port`, the form transport dialers take.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl TlsConfig {
    pub fn new(server_cert_path: impl Into<String>) -> Self {
        Self {
            server_cert_path: server_cert_path.into(),
            client_cert_path: None,
            client_key_path: None,
        }
    }

    pub fn with_client_pair(
        mut self,
        client_cert_path: impl Into<String>,
        client_key_path: impl Into<String>,
    ) -> Self {
        self.client_cert_path = Some(client_cert_path.into());
        self.client_key_path = Some(client_key_path.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_cert_path.is_some() != self.client_key_path.is_some() {
            return Err(ConfigError::invalid_value(
                "tls_config",
                "none or both client_cert_path and client_key_path are required",
            ));
        }

        for path in self.paths() {
            if !Path::new(path).is_file() {
                return Err(ConfigError::FileNotFound { path: path.into() });
            }
        }

        Ok(())
    }

    pub(crate) fn paths(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.server_cert_path.as_str()),
            self.client_cert_path.as_deref(),
            self.client_key_path.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}
