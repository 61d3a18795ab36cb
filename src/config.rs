use clap::Parser;

use crate::{
    error::ClientError,
    model::{ModelRegistry, TensorParallelSize},
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Trigger inference up request.
#[derive(Debug, Parser)]
#[command(name = "inference-up", version, about)]
pub struct Cli {
    /// Model alias or full name (Qwen3-235B, Qwen3-32B,
    /// Qwen/Qwen3-235B-A22B-Instruct-2507-FP8, Qwen/Qwen3-32B-FP8).
    #[arg(long)]
    pub model: String,

    /// Tensor parallel size (2-8). If omitted or 1, no argument is passed.
    #[arg(long, allow_negative_numbers = true)]
    pub tensor_parallel_size: Option<i64>,

    /// Base URL for the inference service.
    #[arg(long, env = "INFERENCE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub model: String,
    pub tensor_parallel_size: Option<TensorParallelSize>,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ClientError> {
        Self::from_cli_with(cli, ModelRegistry::builtin())
    }

    pub fn from_cli_with(cli: Cli, registry: &ModelRegistry) -> Result<Self, ClientError> {
        let tensor_parallel_size = cli
            .tensor_parallel_size
            .map(TensorParallelSize::new)
            .transpose()?;
        let model = registry.resolve(&cli.model)?;

        Ok(Self {
            base_url: cli.base_url,
            model,
            tensor_parallel_size,
        })
    }
}
