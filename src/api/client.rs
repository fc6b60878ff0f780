//! HTTP client for the registration backend

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, header};
use serde_json::Value;

use super::model::{
    ApiError, CheckIn, Registration, to_check_in, to_count, to_error_message, to_registration,
};
use crate::features::ScanDay;
use crate::features::registration::RegistrationForm;
use crate::features::settings::ApiSettings;

const REGISTER_PATH: &str = "/api/registers";

#[derive(Clone)]
pub struct EventClient {
    client: Client,
    base_url: String,
}

impl fmt::Debug for EventClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl EventClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .context("Failed to initialise HTTP client")?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// JSON request with `Accept: application/json`; reqwest sets the body's content type
    fn build(&self, method: Method, url: &str, body: Option<&Value>) -> RequestBuilder {
        let request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match body {
            Some(body) => request.json(body),
            None => request,
        }
    }

    /// Send a request and return the body of a 2xx response
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::info!("{} {}", method, url);

        let response = self
            .build(method, &url, body.as_ref())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = to_error_message(&text);
            tracing::warn!("{} returned {}: {}", url, status, message);
            return Err(ApiError::Status {
                code: status.as_u16(),
                message,
            });
        }
        Ok(text)
    }

    /// `POST /api/registers`
    pub async fn register(&self, form: &RegistrationForm) -> Result<Registration, ApiError> {
        let body = serde_json::to_value(form).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = self.request(Method::POST, REGISTER_PATH, Some(body)).await?;
        to_registration(&text).map_err(|e| ApiError::Decode(format!("{:#}", e)))
    }

    /// `POST /api/registers/{day}`
    pub async fn check_in(&self, day: ScanDay, reg_num: &str) -> Result<CheckIn, ApiError> {
        let body = serde_json::json!({ "regNum": reg_num });
        let text = self.request(Method::POST, day.api_path(), Some(body)).await?;
        to_check_in(&text).map_err(|e| ApiError::Decode(format!("{:#}", e)))
    }

    /// `GET /api/registers/{day}`
    pub async fn checkin_count(&self, day: ScanDay) -> Result<u64, ApiError> {
        let text = self.request(Method::GET, day.api_path(), None).await?;
        to_count(&text).map_err(|e| ApiError::Decode(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = EventClient::new(&ApiSettings {
            base_url: "https://api.evready.in/".into(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.base_url(), "https://api.evready.in");
        assert_eq!(
            client.url(ScanDay::Day1.api_path()),
            "https://api.evready.in/api/registers/day1"
        );
        assert_eq!(client.url(REGISTER_PATH), "https://api.evready.in/api/registers");
    }

    #[test]
    fn debug_hides_client_internals() {
        let client = EventClient::new(&ApiSettings::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("<HttpClient>"));
        assert!(debug.contains("localhost:5000"));
    }

    #[test]
    fn json_body_sets_headers() {
        let client = EventClient::new(&ApiSettings::default()).unwrap();
        let body = serde_json::json!({ "regNum": "EV2026-0042" });
        let request = client
            .build(Method::POST, &client.url(ScanDay::Day2.api_path()), Some(&body))
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[header::ACCEPT], "application/json");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        let sent: Value = serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn bodyless_request_has_no_content_type() {
        let client = EventClient::new(&ApiSettings::default()).unwrap();
        let request = client
            .build(Method::GET, &client.url(ScanDay::Day1.api_path()), None)
            .build()
            .unwrap();
        assert_eq!(request.headers()[header::ACCEPT], "application/json");
        assert!(request.headers().get(header::CONTENT_TYPE).is_none());
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let client = EventClient::new(&ApiSettings {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
        })
        .unwrap();
        let err = client.checkin_count(ScanDay::Day1).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
