pub mod backend;
pub mod client;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod wire;

pub use backend::GenerationBackend;
pub use client::GeminiClient;
pub use error::LlmError;
pub use orchestrator::ProductSearcher;
