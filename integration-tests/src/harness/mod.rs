mod echo_client;
pub mod tracing;

pub use echo_client::{
    EchoClient, EchoError, ModelMetadataRequest, ModelMetadataResponse, ModelStatusRequest,
    ModelStatusResponse, PredictRequest, PredictResponse,
};
