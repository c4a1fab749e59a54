//! HTTP client for the clinic queue backend.

use std::env;

use async_trait::async_trait;
use clinic_core::{ExaminationInfo, TicketInfo, WaitingTimeInfo};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

const DEFAULT_BASE_URL: &str = "https://my-app.shotoharu.workers.dev";

#[derive(Clone, Debug)]
pub struct ClinicApiConfig {
    pub base_url: String,
}

impl ClinicApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("CLINIC_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ClinicApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

/// Read and write access to the clinic queue backend.
///
/// Every call is authenticated with the caller's platform access token. The
/// token travels per call rather than per client so a re-login can swap
/// tokens without rebuilding the backend handle.
#[async_trait]
pub trait ClinicBackend: Send + Sync {
    async fn ticket_info(&self, token: &str) -> Result<TicketInfo, FetchError>;

    async fn examination_info(&self, token: &str) -> Result<ExaminationInfo, FetchError>;

    /// Registers the patient's examination number; returns the backend's
    /// confirmation message.
    async fn update_examination_number(
        &self,
        token: &str,
        number: u32,
    ) -> Result<String, FetchError>;

    async fn waiting_time_info(&self, token: &str) -> Result<WaitingTimeInfo, FetchError>;
}

#[derive(Clone)]
pub struct ClinicApi {
    client: Client,
    config: ClinicApiConfig,
}

impl ClinicApi {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClinicApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: ClinicApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T>(&self, path: &str, token: &str) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(self.config.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ClinicBackend for ClinicApi {
    async fn ticket_info(&self, token: &str) -> Result<TicketInfo, FetchError> {
        self.get_json("/liff/tickets/number", token).await
    }

    async fn examination_info(&self, token: &str) -> Result<ExaminationInfo, FetchError> {
        self.get_json("/api/follow/examination-number", token).await
    }

    async fn update_examination_number(
        &self,
        token: &str,
        number: u32,
    ) -> Result<String, FetchError> {
        // The backend expects the number as a string of digits.
        let payload = UpdateExaminationRequest {
            examination_number: number.to_string(),
        };

        let response = self
            .client
            .put(self.config.endpoint("/api/follow/examination-number"))
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        let response = check_status(response)?;

        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    async fn waiting_time_info(&self, token: &str) -> Result<WaitingTimeInfo, FetchError> {
        self.get_json("/api/waiting-time/info", token).await
    }
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(FetchError::AuthExpired);
    }
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status));
    }
    Ok(response)
}

#[derive(Debug, Serialize)]
struct UpdateExaminationRequest {
    #[serde(rename = "examinationNumber")]
    examination_number: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_a_trailing_slash() {
        let config = ClinicApiConfig {
            base_url: "https://clinic.example/".into(),
        };
        assert_eq!(
            config.endpoint("/liff/tickets/number"),
            "https://clinic.example/liff/tickets/number"
        );
    }

    #[test]
    fn update_payload_sends_the_number_as_digits() {
        let payload = UpdateExaminationRequest {
            examination_number: 123.to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"examinationNumber":"123"}"#);
    }
}
