// file: src/client/mod.rs
// description: HTTP clients for the local generation and speech backends
// reference: internal module structure

pub mod model;
pub mod retry;
pub mod speech;

pub use model::{GenerationOptions, GenerationRequest, ModelClient};
pub use retry::RetryPolicy;
pub use speech::SpeechClient;
