use std::fmt;

use serde::Serialize;

use crate::error::ClientError;

pub const DEFAULT_DTYPE: &str = "float16";
pub const TENSOR_PARALLEL_FLAG: &str = "--tensor-parallel-size";

/// Body of `POST /api/v1/inference/up`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceUpRequest {
    pub model: String,
    pub dtype: String,
    pub additional_args: Vec<String>,
}

impl InferenceUpRequest {
    pub fn new(model: impl Into<String>, tensor_parallel_size: Option<TensorParallelSize>) -> Self {
        let additional_args = match tensor_parallel_size {
            Some(size) if size.is_sharded() => {
                vec![TENSOR_PARALLEL_FLAG.to_string(), size.to_string()]
            }
            _ => Vec::new(),
        };

        Self {
            model: model.into(),
            dtype: DEFAULT_DTYPE.to_string(),
            additional_args,
        }
    }
}

/// Degree of tensor-parallel sharding, always within 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TensorParallelSize(u8);

impl TensorParallelSize {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 8;

    pub fn new(value: i64) -> Result<Self, ClientError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ClientError::InvalidArgument(format!(
                "tensor-parallel-size must be between {} and {}.",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    // A size of 1 is a single shard and adds nothing to the launch args.
    fn is_sharded(self) -> bool {
        self.0 > 1
    }
}

impl fmt::Display for TensorParallelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
