use clap::Parser;
use std::sync::Arc;
use sync_worker::utils::{logger, validation::Validate};
use sync_worker::{
    build_registry, Activity, ActivityError, ConnectionDeletionInput, ConnectionId,
    HttpConnectionHelper, WorkerConfig, WorkerRole, WorkerTomlConfig,
    CONNECTION_DELETION_ACTIVITY,
};

struct WorkerSettings {
    role: WorkerRole,
    endpoint: String,
    timeout_seconds: u64,
    auth_token: Option<String>,
    json_logging: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = WorkerConfig::parse();

    // A deployment config file takes precedence over individual flags.
    let settings = match &args.config {
        Some(path) => {
            let config = match WorkerTomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            if let Err(e) = config.validate() {
                eprintln!("❌ Configuration validation failed: {}", e);
                std::process::exit(1);
            }

            WorkerSettings {
                role: config.worker.role,
                endpoint: config.config_api.endpoint.clone(),
                timeout_seconds: config.timeout_seconds(),
                auth_token: config.config_api.auth_token.clone(),
                json_logging: config.json_logging(),
            }
        }
        None => {
            if let Err(e) = args.validate() {
                eprintln!("❌ Configuration validation failed: {}", e);
                std::process::exit(1);
            }

            WorkerSettings {
                role: args.role,
                endpoint: args.config_api_endpoint.clone(),
                timeout_seconds: args.request_timeout_seconds,
                auth_token: None,
                json_logging: false,
            }
        }
    };

    if settings.json_logging {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting sync-worker ({} role)", settings.role);
    tracing::info!("📡 Configuration API: {}", settings.endpoint);

    let helper = Arc::new(HttpConnectionHelper::new(
        &settings.endpoint,
        settings.timeout_seconds,
        settings.auth_token.as_deref(),
    ));
    let registry = build_registry(settings.role, helper);

    match args.delete_connection {
        Some(connection_id) => {
            let activity = match registry.get(CONNECTION_DELETION_ACTIVITY) {
                Some(activity) => activity,
                None => {
                    eprintln!(
                        "❌ Connection deletion is not available on a {} worker",
                        settings.role
                    );
                    std::process::exit(1);
                }
            };

            let input = serde_json::to_value(ConnectionDeletionInput {
                connection_id: ConnectionId::new(connection_id.clone()),
            })?;

            match activity.run(input).await {
                Ok(_) => {
                    tracing::info!("✅ Connection {} deleted", connection_id);
                    println!("✅ Connection {} deleted", connection_id);
                }
                Err(e @ ActivityError::Retryable { .. }) => {
                    tracing::error!("Retryable failure deleting {}: {}", connection_id, e);
                    eprintln!("🔁 {}", e);
                    eprintln!("💡 The platform retry policy would reschedule this activity");
                    std::process::exit(2);
                }
                Err(e) => {
                    tracing::error!("Deletion of {} failed: {}", connection_id, e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("📋 Registered activities: {:?}", registry.names());
            println!("ℹ️ Wiring verified; activity polling is hosted by the platform runtime.");
        }
    }

    Ok(())
}
