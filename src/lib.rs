pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::WorkerConfig;
pub use config::WorkerTomlConfig;

pub use adapters::HttpConnectionHelper;
pub use crate::core::{
    build_registry, Activity, ActivityRegistry, ConnectionDeletionActivity,
    CONNECTION_DELETION_ACTIVITY,
};
pub use domain::model::{ConnectionDeletionInput, ConnectionId, WorkerRole};
pub use domain::ports::ConnectionHelper;
pub use utils::error::{ActivityError, ConfigError, HelperError};
