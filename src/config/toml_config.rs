use crate::domain::model::WorkerRole;
use crate::utils::error::ConfigResult;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerTomlConfig {
    pub worker: WorkerSection,
    pub config_api: ConfigApiSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSection {
    pub role: WorkerRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigApiSection {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
    pub level: Option<String>,
}

impl WorkerTomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> ConfigResult<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.config_api.timeout_seconds.unwrap_or(30)
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for WorkerTomlConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_url("config_api.endpoint", &self.config_api.endpoint)?;
        validation::validate_positive_number(
            "config_api.timeout_seconds",
            self.timeout_seconds(),
            1,
        )?;

        if let Some(token) = &self.config_api.auth_token {
            validation::validate_non_empty_string("config_api.auth_token", token)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_worker_config() {
        let toml_content = r#"
[worker]
role = "control_plane"

[config_api]
endpoint = "https://config.internal/api/v1"
timeout_seconds = 10
"#;

        let config = WorkerTomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.worker.role, WorkerRole::ControlPlane);
        assert_eq!(config.config_api.endpoint, "https://config.internal/api/v1");
        assert_eq!(config.timeout_seconds(), 10);
        assert!(!config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_data_plane_role() {
        let toml_content = r#"
[worker]
role = "data_plane"

[config_api]
endpoint = "https://config.internal/api/v1"
"#;

        let config = WorkerTomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.worker.role, WorkerRole::DataPlane);
        assert_eq!(config.timeout_seconds(), 30);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CONFIG_API_TOKEN", "tok-123");

        let toml_content = r#"
[worker]
role = "control_plane"

[config_api]
endpoint = "https://config.internal/api/v1"
auth_token = "${TEST_CONFIG_API_TOKEN}"
"#;

        let config = WorkerTomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.config_api.auth_token.as_deref(), Some("tok-123"));

        std::env::remove_var("TEST_CONFIG_API_TOKEN");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let toml_content = r#"
[worker]
role = "control_plane"

[config_api]
endpoint = "https://config.internal/api/v1"
auth_token = "${SYNC_WORKER_UNSET_TOKEN}"
"#;

        let config = WorkerTomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.config_api.auth_token.as_deref(),
            Some("${SYNC_WORKER_UNSET_TOKEN}")
        );
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[worker]
role = "control_plane"

[config_api]
endpoint = "invalid-url"
"#;

        let config = WorkerTomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[worker]
role = "control_plane"

[config_api]
endpoint = "https://config.internal/api/v1"

[logging]
json = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = WorkerTomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.worker.role, WorkerRole::ControlPlane);
        assert!(config.json_logging());
    }
}
