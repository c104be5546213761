use crate::conf::ConfigError;
use crate::conf::{validate_address, validate_config, validate_port, validate_tls_config};

use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn minimal_config_passes() {
    // Arrange
    let config = json!({ "address": "localhost", "port": 9000 });

    // Act
    let result = validate_config(&config);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn missing_address_is_rejected() {
    // Arrange
    let config = json!({ "port": 9000 });

    // Act
    let err = validate_config(&config).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::MissingField { field } if field == "address"));
}

#[test]
fn missing_port_is_rejected() {
    // Arrange
    let config = json!({ "address": "localhost" });

    // Act
    let err = validate_config(&config).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::MissingField { field } if field == "port"));
}

#[test]
fn non_object_config_is_rejected() {
    // Arrange
    let config = json!("localhost:9000");

    // Act
    let err = validate_config(&config).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::TypeMismatch { expected, .. } if expected == "object"));
}

#[test]
fn unrecognized_top_level_keys_are_tolerated() {
    // Arrange
    let config = json!({ "address": "localhost", "port": 9000, "timeout": 10 });

    // Act
    let result = validate_config(&config);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn valid_addresses_pass() {
    for address in [
        "localhost",
        "127.0.0.1",
        "10.20.30.40",
        "example.com",
        "model-server.internal.example.com",
        "myhost",
    ] {
        assert!(
            validate_address(&json!(address)).is_ok(),
            "expected '{address}' to validate"
        );
    }
}

#[test]
fn invalid_addresses_are_rejected() {
    for address in [
        "not an address!",
        "256.256.256.256",
        "-leading.example.com",
        "trailing-.example.com",
        "double..dot",
        "under_score.example.com",
        "",
    ] {
        let err = validate_address(&json!(address)).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "address"),
            "expected '{address}' to be rejected as InvalidValue, got {err:?}"
        );
    }
}

#[test]
fn non_string_address_is_a_type_mismatch() {
    // Arrange
    let address = json!(9000);

    // Act
    let err = validate_address(&address).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::TypeMismatch {
            expected: "string",
            actual: "integer",
            ..
        }
    ));
}

#[test]
fn ports_in_range_pass() {
    for port in [0u64, 1, 80, 9000, 65535] {
        assert!(
            validate_port(&json!(port)).is_ok(),
            "expected port {port} to validate"
        );
    }
}

#[test]
fn out_of_range_ports_are_rejected() {
    for port in [json!(-1), json!(65536), json!(u64::MAX)] {
        let err = validate_port(&port).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "port"),
            "expected port {port} to be rejected as InvalidValue, got {err:?}"
        );
    }
}

#[test]
fn non_integer_port_is_a_type_mismatch() {
    for port in [json!("9000"), json!(90.5), json!(true), json!(null)] {
        let err = validate_port(&port).unwrap_err();
        assert!(
            matches!(err, ConfigError::TypeMismatch { expected: "integer", .. }),
            "expected port {port} to be rejected as TypeMismatch, got {err:?}"
        );
    }
}

#[test]
fn tls_config_with_server_cert_only_passes() {
    // Arrange
    let dir = tempdir().unwrap();
    let cert = dir.path().join("server.pem");
    fs::write(&cert, b"cert").unwrap();
    let tls = json!({ "server_cert_path": cert });

    // Act
    let result = validate_tls_config(&tls);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn tls_config_with_full_client_pair_passes() {
    // Arrange
    let dir = tempdir().unwrap();
    let server = dir.path().join("server.pem");
    let cert = dir.path().join("client.pem");
    let key = dir.path().join("client.key");
    for path in [&server, &cert, &key] {
        fs::write(path, b"pem").unwrap();
    }
    let tls = json!({
        "server_cert_path": server,
        "client_cert_path": cert,
        "client_key_path": key,
    });

    // Act
    let result = validate_tls_config(&tls);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn tls_config_requires_server_cert_path() {
    // Arrange
    let tls = json!({});

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::MissingField { field } if field == "server_cert_path"));
}

#[test]
fn client_cert_without_key_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let server = dir.path().join("server.pem");
    let cert = dir.path().join("client.pem");
    for path in [&server, &cert] {
        fs::write(path, b"pem").unwrap();
    }
    let tls = json!({ "server_cert_path": server, "client_cert_path": cert });

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "tls_config"));
}

#[test]
fn client_key_without_cert_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let server = dir.path().join("server.pem");
    let key = dir.path().join("client.key");
    for path in [&server, &key] {
        fs::write(path, b"pem").unwrap();
    }
    let tls = json!({ "server_cert_path": server, "client_key_path": key });

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "tls_config"));
}

#[test]
fn unknown_tls_key_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let server = dir.path().join("server.pem");
    fs::write(&server, b"pem").unwrap();
    let tls = json!({ "server_cert_path": server, "foo": "bar" });

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::UnknownKey { key } if key == "foo"));
}

#[test]
fn nonexistent_cert_path_is_rejected_before_any_read() {
    // Arrange
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.pem");
    let tls = json!({ "server_cert_path": missing });

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::FileNotFound { path } if path == missing));
}

#[test]
fn directory_is_not_a_valid_cert_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let tls = json!({ "server_cert_path": dir.path() });

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn non_string_tls_value_is_a_type_mismatch() {
    // Arrange
    let tls = json!({ "server_cert_path": 42 });

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::TypeMismatch {
            field,
            expected: "string",
            ..
        } if field == "server_cert_path"
    ));
}

#[test]
fn non_object_tls_config_is_a_type_mismatch() {
    // Arrange
    let tls = json!(["server_cert_path"]);

    // Act
    let err = validate_tls_config(&tls).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::TypeMismatch { field, expected: "object", .. } if field == "tls_config"
    ));
}

#[test]
fn config_with_tls_is_validated_end_to_end() {
    // Arrange
    let dir = tempdir().unwrap();
    let server = dir.path().join("server.pem");
    fs::write(&server, b"pem").unwrap();
    let config = json!({
        "address": "model-server.example.com",
        "port": 9000,
        "tls_config": { "server_cert_path": server },
    });

    // Act
    let result = validate_config(&config);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn tls_errors_propagate_through_validate_config() {
    // Arrange
    let config = json!({
        "address": "localhost",
        "port": 9000,
        "tls_config": { "server_cert_path": "/does/not/exist.pem" },
    });

    // Act
    let err = validate_config(&config).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
