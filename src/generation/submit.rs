// Review generation request.
// Posts the form snapshot and turns every outcome into a submission result.

use crate::error::{ReviewError, Result};
use crate::state::{FormSnapshot, SubmissionResult};

use super::client::GenerationClient;
use super::types::GenerationResponse;

impl GenerationClient {
    /// Post the form and parse the JSON reply.
    pub async fn request_review(&self, snapshot: &FormSnapshot) -> Result<GenerationResponse> {
        let response = self.post_form(snapshot).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ReviewError::MalformedResponse(e.to_string()))
    }

    /// Generate a review. Never fails: transport, HTTP, and parse errors all
    /// come back as `SubmissionResult::Failure`.
    pub async fn generate(&self, snapshot: &FormSnapshot) -> SubmissionResult {
        match self.request_review(snapshot).await {
            Ok(response) => response.into_result(),
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint(), error = %e, "generation request failed");
                SubmissionResult::failure(e.to_string())
            }
        }
    }
}
