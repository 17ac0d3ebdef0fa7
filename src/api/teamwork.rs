use super::{SinkResponse, SubmissionError, SubmissionSink};
use crate::libs::config::Config;
use crate::libs::submission::SubmissionRecord;
use base64::prelude::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

/// Teamwork ignores the password part of API-key authentication.
const API_KEY_PASSWORD: &str = "xxx";

/// Teamwork Projects API client.
#[derive(Debug, Clone)]
pub struct Teamwork {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Teamwork {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url(),
            api_key: config.key.clone(),
        }
    }

    pub fn url(&self, record: &SubmissionRecord) -> String {
        format!("{}{}", self.base_url, record.endpoint.path())
    }

    fn headers(&self) -> Result<HeaderMap, SubmissionError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&authorization(&self.api_key)).map_err(|e| SubmissionError::Transport(e.to_string()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl SubmissionSink for Teamwork {
    async fn submit(&self, record: &SubmissionRecord) -> Result<SinkResponse, SubmissionError> {
        let url = self.url(record);
        tracing::debug!(%url, "posting time entry");

        let res = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&record.envelope())
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        Ok(SinkResponse { status, body })
    }
}

/// `Authorization` header value for a Teamwork API key.
pub fn authorization(api_key: &str) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(format!("{}:{}", api_key, API_KEY_PASSWORD)))
}
