mod error;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use types::{ConnectionConfig, TlsConfig};
pub use validate::{validate_address, validate_config, validate_port, validate_tls_config};
