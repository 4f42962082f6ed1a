use crate::domain::model::ConnectionId;
use crate::utils::error::HelperError;
use async_trait::async_trait;

/// Connection-management capability owned by the configuration service.
///
/// Deletion scope (cascading to schedules, sync history, related resources)
/// is the service's concern; callers only see the error kinds.
#[async_trait]
pub trait ConnectionHelper: Send + Sync {
    async fn delete_connection(&self, connection_id: &ConnectionId) -> Result<(), HelperError>;
}
