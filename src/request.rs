use crate::model::{InferenceUpRequest, TensorParallelSize};

pub const INFERENCE_UP_PATH: &str = "/api/v1/inference/up";

/// A fully built "up" call: where it goes and what it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpRequest {
    pub url: String,
    pub payload: InferenceUpRequest,
}

impl UpRequest {
    /// `model` must already be a canonical identifier.
    pub fn build(
        base_url: &str,
        model: &str,
        tensor_parallel_size: Option<TensorParallelSize>,
    ) -> Self {
        Self {
            url: endpoint_url(base_url),
            payload: InferenceUpRequest::new(model, tensor_parallel_size),
        }
    }

    /// Shell command that issues the same request with curl. Printed for
    /// operators, never executed.
    pub fn curl_command(&self) -> String {
        let additional_args = self
            .payload
            .additional_args
            .iter()
            .map(|arg| format!("\"{arg}\""))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "curl -X POST '{url}' -H 'Content-Type: application/json' -d '{{\"model\": \"{model}\", \"dtype\": \"{dtype}\", \"additional_args\": [{additional_args}]}}'",
            url = self.url,
            model = self.payload.model,
            dtype = self.payload.dtype,
        )
    }
}

pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{INFERENCE_UP_PATH}", base_url.trim_end_matches('/'))
}
