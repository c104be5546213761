//! Client-side core for a model-serving API: the abstract [`ServingClient`]
//! contract, connection-configuration validation, and TLS credential loading.
//!
//! Concrete transports live in their own crates; this crate only defines the
//! surface they implement and the validation they run before connecting.

pub mod client;
pub mod conf;
pub mod credentials;

pub use client::ServingClient;
pub use conf::{ConfigError, ConnectionConfig, TlsConfig};
pub use credentials::{CredentialBundle, CredentialError, load_credentials};
