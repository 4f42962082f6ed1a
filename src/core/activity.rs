use crate::utils::error::ActivityError;
use async_trait::async_trait;

/// A single retryable unit of work the worker exposes to the orchestration
/// engine's harness. Inputs arrive as JSON exactly as the engine delivers
/// them; dispatch is by activity name.
#[async_trait]
pub trait Activity: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, input: serde_json::Value) -> Result<serde_json::Value, ActivityError>;
}
