use url::Url;

use crate::{
    error::{PromptnikError, Result},
    types::{FormInput, SubmissionResult},
};

/// Async HTTP client for the prompt-generation backend.
///
/// One method, one exchange: POST the five form fields as JSON to `/` and
/// parse the two-field response. No retries, no deduplication, no timeout
/// beyond reqwest's defaults.
#[derive(Clone, Debug)]
pub struct SubmissionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SubmissionClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let endpoint = base_url.join("/")?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(PromptnikError::HttpError)?;

        Ok(Self { http, endpoint })
    }

    /// Parse `base_url` and build a client from it.
    pub fn parse(base_url: &str) -> Result<Self> {
        Self::new(Url::parse(base_url)?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit one form snapshot and wait for the backend's reply.
    ///
    /// Issues exactly one POST per call, field names preserved verbatim.
    /// Empty strings are legal and sent as-is.
    pub async fn submit(&self, input: &FormInput) -> Result<SubmissionResult> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(input)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let reason = response.text().await.unwrap_or_default();
            Err(PromptnikError::SubmissionFailed { status, reason })
        }
    }
}
