//! The abstract contract concrete serving-client transports implement.

use crate::conf::ConnectionConfig;
use async_trait::async_trait;

/// A client for a model-serving API.
///
/// Request/response schemas belong to the serving protocol and stay behind
/// associated types; this trait only fixes the operation surface and the
/// config-driven construction path.
#[async_trait]
pub trait ServingClient {
    type PredictRequest: Send;
    type PredictResponse;
    type ModelMetadataRequest: Send;
    type ModelMetadataResponse;
    type ModelStatusRequest: Send;
    type ModelStatusResponse;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct a client from a connection config.
    ///
    /// Implementations validate the config and load credentials for any
    /// `tls_config` before opening their transport.
    async fn build(config: ConnectionConfig) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Send a predict request to the server and return the response.
    async fn predict(
        &self,
        request: Self::PredictRequest,
    ) -> Result<Self::PredictResponse, Self::Error>;

    /// Fetch metadata for a served model.
    async fn get_model_metadata(
        &self,
        request: Self::ModelMetadataRequest,
    ) -> Result<Self::ModelMetadataResponse, Self::Error>;

    /// Fetch the serving status of a model.
    async fn get_model_status(
        &self,
        request: Self::ModelStatusRequest,
    ) -> Result<Self::ModelStatusResponse, Self::Error>;
}
