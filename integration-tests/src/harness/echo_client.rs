//! An in-process transport that echoes inference inputs back, used to
//! exercise the `ServingClient` contract without a real server.

use async_trait::async_trait;
use serving_client::{ConfigError, ConnectionConfig, CredentialBundle, CredentialError, ServingClient};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("model '{0}' is not served")]
    UnknownModel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictRequest {
    pub model_name: String,
    pub inputs: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictResponse {
    pub outputs: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadataRequest {
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadataResponse {
    pub model_name: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStatusRequest {
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStatusResponse {
    pub available: bool,
}

#[derive(Debug)]
pub struct EchoClient {
    endpoint: String,
    credentials: Option<CredentialBundle>,
}

impl EchoClient {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> Option<&CredentialBundle> {
        self.credentials.as_ref()
    }
}

#[async_trait]
impl ServingClient for EchoClient {
    type PredictRequest = PredictRequest;
    type PredictResponse = PredictResponse;
    type ModelMetadataRequest = ModelMetadataRequest;
    type ModelMetadataResponse = ModelMetadataResponse;
    type ModelStatusRequest = ModelStatusRequest;
    type ModelStatusResponse = ModelStatusResponse;
    type Error = EchoError;

    async fn build(config: ConnectionConfig) -> Result<Self, EchoError> {
        config.validate()?;

        let credentials = config
            .tls_config
            .as_ref()
            .map(|tls| tls.load_credentials())
            .transpose()?;

        let endpoint = config.endpoint();
        debug!(%endpoint, secured = credentials.is_some(), "echo client ready");

        Ok(Self {
            endpoint,
            credentials,
        })
    }

    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, EchoError> {
        if request.model_name.is_empty() {
            return Err(EchoError::UnknownModel(request.model_name));
        }

        Ok(PredictResponse {
            outputs: request.inputs,
        })
    }

    async fn get_model_metadata(
        &self,
        request: ModelMetadataRequest,
    ) -> Result<ModelMetadataResponse, EchoError> {
        if request.model_name.is_empty() {
            return Err(EchoError::UnknownModel(request.model_name));
        }

        Ok(ModelMetadataResponse {
            model_name: request.model_name,
            endpoint: self.endpoint.clone(),
        })
    }

    async fn get_model_status(
        &self,
        request: ModelStatusRequest,
    ) -> Result<ModelStatusResponse, EchoError> {
        Ok(ModelStatusResponse {
            available: !request.model_name.is_empty(),
        })
    }
}
