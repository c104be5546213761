//! Credential acquisition: reading certificate/key bytes from validated paths.

use crate::conf::TlsConfig;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to read certificate {path}: {source}")]
    ReadCert {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read private key {path}: {source}")]
    ReadKey {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Certificate/key bytes loaded from disk, owned by the caller.
///
/// Built fresh on every [`load_credentials`] call; nothing is cached between
/// calls and the source files are never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialBundle {
    server_cert: Vec<u8>,
    client_cert: Option<Vec<u8>>,
    client_key: Option<Vec<u8>>,
}

impl CredentialBundle {
    pub fn server_cert(&self) -> &[u8] {
        &self.server_cert
    }

    pub fn client_cert(&self) -> Option<&[u8]> {
        self.client_cert.as_deref()
    }

    pub fn client_key(&self) -> Option<&[u8]> {
        self.client_key.as_deref()
    }

    pub fn has_client_pair(&self) -> bool {
        self.client_cert.is_some() && self.client_key.is_some()
    }
}

/// Read the server certificate and, when provided, the client pair.
///
/// Each read is whole-file and scoped: the handle is released before this
/// function returns, on success and failure alike.
pub fn load_credentials(
    server_cert_path: &Path,
    client_cert_path: Option<&Path>,
    client_key_path: Option<&Path>,
) -> Result<CredentialBundle, CredentialError> {
    let server_cert = read_cert(server_cert_path)?;
    let client_cert = client_cert_path.map(read_cert).transpose()?;
    let client_key = client_key_path.map(read_key).transpose()?;

    debug!(
        server_cert = %server_cert_path.display(),
        client_pair = client_cert.is_some(),
        "loaded connection credentials"
    );

    Ok(CredentialBundle {
        server_cert,
        client_cert,
        client_key,
    })
}

impl TlsConfig {
    /// Load the credential bundle this config points at.
    pub fn load_credentials(&self) -> Result<CredentialBundle, CredentialError> {
        load_credentials(
            Path::new(&self.server_cert_path),
            self.client_cert_path.as_deref().map(Path::new),
            self.client_key_path.as_deref().map(Path::new),
        )
    }
}

fn read_cert(path: &Path) -> Result<Vec<u8>, CredentialError> {
    fs::read(path).map_err(|source| CredentialError::ReadCert {
        path: path.to_path_buf(),
        source,
    })
}

fn read_key(path: &Path) -> Result<Vec<u8>, CredentialError> {
    fs::read(path).map_err(|source| CredentialError::ReadKey {
        path: path.to_path_buf(),
        source,
    })
}
