use async_trait::async_trait;

use crate::error::Result;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Seam over the raw generation call so the fallback orchestrator can be
/// exercised without a network.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
