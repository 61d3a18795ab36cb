mod registry;
mod types;

pub use registry::ModelRegistry;
pub use types::{DEFAULT_DTYPE, InferenceUpRequest, TENSOR_PARALLEL_FLAG, TensorParallelSize};
