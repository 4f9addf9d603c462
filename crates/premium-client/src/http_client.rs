//! Blocking HTTP client for the prediction endpoint.

use premium_core::errors::PremiumErrorCode;
use premium_core::{ClientConfig, ClientError, IPredictionClient, InputSet, PredictionOutcome};
use tracing::{debug, info, warn};

use crate::query::build_query;
use crate::response;

/// Issues exactly one GET per [`predict`](IPredictionClient::predict) call.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl PredictionClient {
    /// Build a client for `config`. With no `timeout_ms` the request waits
    /// as long as the transport allows.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(|e| ClientError::Other {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            endpoint: config.endpoint(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The full URL a request for `inputs` goes to.
    pub fn request_url(&self, inputs: &InputSet) -> String {
        format!("{}?{}", self.endpoint, build_query(inputs))
    }

    fn execute(&self, inputs: &InputSet) -> Result<PredictionOutcome, ClientError> {
        let url = self.request_url(inputs);
        debug!(%url, "sending prediction request");

        let resp = self.client.get(&url).send().map_err(classify)?;
        let status = resp.status();

        if !status.is_success() {
            let reason = status.canonical_reason();
            // An unreadable error body is treated like a non-JSON one.
            let body = resp.bytes().ok();
            return Ok(response::error_outcome(
                status.as_u16(),
                reason,
                body.as_deref(),
            ));
        }

        let body = resp.bytes().map_err(classify)?;
        response::success_outcome(&body)
    }
}

impl IPredictionClient for PredictionClient {
    fn predict(&self, inputs: &InputSet) -> PredictionOutcome {
        let outcome = match self.execute(inputs) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e.display_string(), "prediction request failed");
                PredictionOutcome::from(&e)
            }
        };
        info!(kind = outcome.kind(), "prediction resolved");
        outcome
    }
}

/// Sort a reqwest error into the transport taxonomy.
fn classify(e: reqwest::Error) -> ClientError {
    let reason = e.to_string();
    if e.is_timeout() {
        ClientError::Timeout { reason }
    } else if e.is_connect() {
        ClientError::Connect { reason }
    } else if e.is_decode() || e.is_body() {
        ClientError::Decode { reason }
    } else {
        ClientError::Other { reason }
    }
}
