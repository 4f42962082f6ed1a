use crate::core::activity::Activity;
use crate::domain::model::ConnectionDeletionInput;
use crate::domain::ports::ConnectionHelper;
use crate::utils::error::{ActivityError, HelperError};
use async_trait::async_trait;
use std::sync::Arc;

pub const CONNECTION_DELETION_ACTIVITY: &str = "delete_connection";

/// Bridges one engine activity invocation to the connection-management
/// capability. Holds nothing but the shared helper reference, so concurrent
/// invocations need no locking.
pub struct ConnectionDeletionActivity<H: ConnectionHelper> {
    helper: Arc<H>,
}

impl<H: ConnectionHelper> ConnectionDeletionActivity<H> {
    pub fn new(helper: Arc<H>) -> Self {
        Self { helper }
    }

    /// Delegates to the helper exactly once, passing the identifier through
    /// unmodified. Recoverable helper failures (validation, not-found, I/O)
    /// surface as one uniform retryable signal; anything else propagates
    /// unwrapped so the engine does not blindly retry it.
    pub async fn delete_connection(
        &self,
        input: &ConnectionDeletionInput,
    ) -> Result<(), ActivityError> {
        tracing::debug!("Deleting connection {}", input.connection_id);

        match self.helper.delete_connection(&input.connection_id).await {
            Ok(()) => Ok(()),
            Err(
                err @ (HelperError::Validation { .. }
                | HelperError::NotFound { .. }
                | HelperError::Io(_)),
            ) => Err(ActivityError::Retryable { source: err }),
            Err(HelperError::Unexpected(err)) => Err(ActivityError::Unexpected(err)),
        }
    }
}

#[async_trait]
impl<H: ConnectionHelper + 'static> Activity for ConnectionDeletionActivity<H> {
    fn name(&self) -> &'static str {
        CONNECTION_DELETION_ACTIVITY
    }

    async fn run(&self, input: serde_json::Value) -> Result<serde_json::Value, ActivityError> {
        let input: ConnectionDeletionInput = serde_json::from_value(input)?;
        self.delete_connection(&input).await?;
        Ok(serde_json::Value::Null)
    }
}
