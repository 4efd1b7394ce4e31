// Generation endpoint HTTP client.
// Handles default headers, timeouts, and status checking for form posts.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{ReviewError, Result};

/// Header the backend uses to recognise script-driven submissions.
const REQUESTED_WITH: &str = "X-Requested-With";

/// Client for one review link's generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    /// Create a client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(USER_AGENT, HeaderValue::from_static("reviewbud-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ReviewError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a form-encoded body to the endpoint.
    pub async fn post_form<T: serde::Serialize + ?Sized>(&self, form: &T) -> Result<Response> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(form)
            .send()
            .await
            .map_err(ReviewError::Http)?;

        self.check_response(response)
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
            status => {
                tracing::warn!(endpoint = %self.endpoint, %status, "generation endpoint rejected request");
                Err(ReviewError::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}
