use crate::conf::error::ConfigError;
use serde_json::Value;
use std::net::Ipv4Addr;
use std::path::Path;

const TLS_CONFIG_KEYS: [&str; 3] = ["server_cert_path", "client_cert_path", "client_key_path"];

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validate a connection config in its dynamic mapping form.
///
/// Fail-fast: exactly one error per call, the first violation found.
/// Success produces no value; callers wanting the typed form go through
/// [`ConnectionConfig::from_value`](crate::conf::ConnectionConfig::from_value).
pub fn validate_config(config: &Value) -> Result<(), ConfigError> {
    let Some(map) = config.as_object() else {
        return Err(ConfigError::TypeMismatch {
            field: "config".to_owned(),
            expected: "object",
            actual: value_kind(config),
        });
    };

    for field in ["address", "port"] {
        if !map.contains_key(field) {
            return Err(ConfigError::missing_field(field));
        }
    }

    validate_address(&map["address"])?;
    validate_port(&map["port"])?;

    if let Some(tls_config) = map.get("tls_config") {
        validate_tls_config(tls_config)?;
    }

    Ok(())
}

/// An address is `localhost`, an IPv4 dotted-quad, or a domain name.
pub fn validate_address(address: &Value) -> Result<(), ConfigError> {
    let Some(address) = address.as_str() else {
        return Err(ConfigError::TypeMismatch {
            field: "address".to_owned(),
            expected: "string",
            actual: value_kind(address),
        });
    };

    if address_is_valid(address) {
        Ok(())
    } else {
        Err(ConfigError::invalid_value(
            "address",
            "not localhost, an IPv4 address, or a domain name",
        ))
    }
}

/// A port is an integer in the closed range `[0, 65535]`.
pub fn validate_port(port: &Value) -> Result<(), ConfigError> {
    if !port.is_i64() && !port.is_u64() {
        return Err(ConfigError::TypeMismatch {
            field: "port".to_owned(),
            expected: "integer",
            actual: value_kind(port),
        });
    }

    match port.as_u64() {
        Some(port) if port <= u64::from(u16::MAX) => Ok(()),
        _ => Err(ConfigError::invalid_value(
            "port",
            format!("port should be in range <0, {}>", u16::MAX),
        )),
    }
}

/// Validate the `tls_config` sub-mapping.
///
/// `server_cert_path` is required; `client_cert_path` and `client_key_path`
/// are a co-dependent pair. Every value must be a string naming an existing
/// regular file. Keys are checked in deterministic (sorted) order and the
/// first violation wins.
pub fn validate_tls_config(tls_config: &Value) -> Result<(), ConfigError> {
    let Some(map) = tls_config.as_object() else {
        return Err(ConfigError::TypeMismatch {
            field: "tls_config".to_owned(),
            expected: "object",
            actual: value_kind(tls_config),
        });
    };

    if !map.contains_key("server_cert_path") {
        return Err(ConfigError::missing_field("server_cert_path"));
    }

    if map.contains_key("client_cert_path") != map.contains_key("client_key_path") {
        return Err(ConfigError::invalid_value(
            "tls_config",
            "none or both client_cert_path and client_key_path are required",
        ));
    }

    for (key, value) in map {
        if !TLS_CONFIG_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownKey { key: key.clone() });
        }

        let Some(path) = value.as_str() else {
            return Err(ConfigError::TypeMismatch {
                field: key.clone(),
                expected: "string",
                actual: value_kind(value),
            });
        };

        if !Path::new(path).is_file() {
            return Err(ConfigError::FileNotFound { path: path.into() });
        }
    }

    Ok(())
}

pub(crate) fn address_is_valid(address: &str) -> bool {
    address == "localhost" || is_ipv4(address) || is_domain(address)
}

fn is_ipv4(address: &str) -> bool {
    address.parse::<Ipv4Addr>().is_ok()
}

/// Syntactic hostname check, RFC-1035 label rules. No DNS resolution.
fn is_domain(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let mut last_label = "";
    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return false;
        }
        if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        last_label = label;
    }

    // An all-digit final label is a malformed dotted-quad ("256.256.256.256"),
    // not a hostname.
    !last_label.bytes().all(|b| b.is_ascii_digit())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
