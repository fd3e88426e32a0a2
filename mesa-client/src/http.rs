// mesa-client/src/http.rs
// HTTP transport for the ordering backend

use crate::config::ClientConfig;
use crate::error::{CheckInError, CheckInResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ApiError, ApiResponse};

/// HTTP implementation of the backend operations
///
/// All endpoints answer with the unified [`ApiResponse`] envelope; error
/// responses carry a structured code and message. Responses that are not
/// envelope-shaped fall back to the raw HTTP status.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> CheckInResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> CheckInResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> CheckInResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn put_ack<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> CheckInResult<()> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_ack(response).await
    }

    pub(crate) async fn post_ack<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> CheckInResult<()> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_ack(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> CheckInResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_body(status, response.text().await?));
        }
        let envelope: ApiResponse<T> = response.json().await?;
        Ok(envelope.into_result()?)
    }

    async fn handle_ack(response: reqwest::Response) -> CheckInResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_body(status, response.text().await?));
        }
        let envelope: ApiResponse<serde_json::Value> = response.json().await?;
        Ok(envelope.into_ack()?)
    }

    fn error_from_body(status: reqwest::StatusCode, text: String) -> CheckInError {
        // Prefer the structured envelope, fall back to the bare status
        if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
            return CheckInError::Api(ApiError {
                code: envelope.code,
                message: envelope.message,
            });
        }
        CheckInError::Api(ApiError {
            code: format!("HTTP{}", status.as_u16()),
            message: if text.is_empty() {
                status.to_string()
            } else {
                text
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_is_parsed() {
        let body = r#"{"code":"E7001","message":"Table not found"}"#;
        let err = HttpApi::error_from_body(reqwest::StatusCode::NOT_FOUND, body.to_string());
        match err {
            CheckInError::Api(e) => {
                assert_eq!(e.code, "E7001");
                assert_eq!(e.message, "Table not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unstructured_error_body_falls_back_to_status() {
        let err =
            HttpApi::error_from_body(reqwest::StatusCode::BAD_GATEWAY, "upstream down".to_string());
        match err {
            CheckInError::Api(e) => {
                assert_eq!(e.code, "HTTP502");
                assert_eq!(e.message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
