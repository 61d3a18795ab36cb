pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod request;

pub use client::InferenceClient;
pub use config::{AppConfig, Cli};
pub use error::ClientError;
pub use model::{InferenceUpRequest, ModelRegistry, TensorParallelSize};
pub use request::UpRequest;
