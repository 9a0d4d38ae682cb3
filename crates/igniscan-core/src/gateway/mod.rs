//! Inference gateway boundary.
//!
//! The backend is an external collaborator: it accepts a multi-modal bundle
//! plus generation parameters and returns unstructured text. One synchronous
//! in-flight call, no internal retries; retry/backoff policy belongs to an
//! outer layer. A timed-out or canceled call is a failure, never a partial
//! verdict.

pub mod gemini;

use crate::errors::InspectResult;
use crate::model::{GenerationParams, PromptBundle};
use async_trait::async_trait;

pub use gemini::{BackendConfig, GeminiClient};

#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Submits the bundle and returns the backend's raw text response.
    async fn infer(
        &self,
        bundle: &PromptBundle,
        params: &GenerationParams,
    ) -> InspectResult<String>;

    fn backend_name(&self) -> &'static str;
}
