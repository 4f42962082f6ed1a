use crate::domain::model::ConnectionId;
use crate::domain::ports::ConnectionHelper;
use crate::utils::error::HelperError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// `ConnectionHelper` backed by the platform's configuration API.
///
/// Issues `DELETE {base_url}/connections/{id}` and classifies the response
/// into the helper error kinds. What the service cascades to (schedules,
/// sync history) is its own concern.
pub struct HttpConnectionHelper {
    client: Client,
    base_url: String,
    timeout: Duration,
    auth_token: Option<String>,
}

impl HttpConnectionHelper {
    pub fn new(base_url: &str, timeout_seconds: u64, auth_token: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_seconds),
            auth_token: auth_token.map(str::to_string),
        }
    }
}

#[async_trait]
impl ConnectionHelper for HttpConnectionHelper {
    async fn delete_connection(&self, connection_id: &ConnectionId) -> Result<(), HelperError> {
        let url = format!("{}/connections/{}", self.base_url, connection_id);
        tracing::debug!("DELETE {}", url);

        let mut request = self.client.delete(&url).timeout(self.timeout);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_failure)?;
        let status = response.status();

        if status.is_success() {
            tracing::debug!("Connection {} deleted ({})", connection_id, status);
            return Ok(());
        }

        match status {
            StatusCode::NOT_FOUND => Err(HelperError::NotFound {
                connection_id: connection_id.to_string(),
            }),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let message = response.text().await.unwrap_or_default();
                Err(HelperError::Validation { message })
            }
            status if status.is_server_error() => Err(HelperError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("config API returned {}", status),
            ))),
            status => Err(HelperError::Unexpected(anyhow::anyhow!(
                "config API returned unexpected status {} for connection {}",
                status,
                connection_id
            ))),
        }
    }
}

fn transport_failure(err: reqwest::Error) -> HelperError {
    let kind = if err.is_timeout() {
        std::io::ErrorKind::TimedOut
    } else if err.is_connect() {
        std::io::ErrorKind::ConnectionRefused
    } else {
        std::io::ErrorKind::Other
    };
    HelperError::Io(std::io::Error::new(kind, err))
}
