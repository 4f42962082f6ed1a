use crate::domain::model::WorkerRole;
use crate::utils::error::ConfigResult;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sync-worker")]
#[command(about = "Worker hosting connection-management activities for the sync platform")]
pub struct WorkerConfig {
    /// Deployment role of this worker process
    #[arg(long, value_enum, default_value = "control-plane")]
    pub role: WorkerRole,

    /// Base URL of the platform configuration API
    #[arg(long, default_value = "http://localhost:8001/api/v1")]
    pub config_api_endpoint: String,

    /// Per-request timeout for configuration API calls
    #[arg(long, default_value = "30")]
    pub request_timeout_seconds: u64,

    /// Path to a TOML deployment config; takes precedence over the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Delete the given connection through the registered activity, then exit
    #[arg(long, value_name = "CONNECTION_ID")]
    pub delete_connection: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for WorkerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_url("config_api_endpoint", &self.config_api_endpoint)?;
        validation::validate_positive_number(
            "request_timeout_seconds",
            self.request_timeout_seconds,
            1,
        )?;

        if let Some(connection_id) = &self.delete_connection {
            validation::validate_non_empty_string("delete_connection", connection_id)?;
        }

        Ok(())
    }
}
