use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token identifying a connection owned by the configuration service.
/// The worker never inspects or rewrites it, only passes it through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDeletionInput {
    pub connection_id: ConnectionId,
}

/// Deployment role of this worker process, fixed at startup.
/// Data-plane workers move data; connection management stays on the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    ControlPlane,
    DataPlane,
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerRole::ControlPlane => f.write_str("control_plane"),
            WorkerRole::DataPlane => f.write_str("data_plane"),
        }
    }
}
