use std::time::Duration;
use thiserror::Error;

use crate::screening::input::TransactionInput;
use crate::screening::result::PredictionResult;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the prediction service lives. Built explicitly by the caller;
/// this crate never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ClientConfig { base_url }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Prediction service unreachable: {0}")]
    Transport(Box<ureq::Error>),

    #[error("Error reading prediction response: {0}")]
    Read(#[from] std::io::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
}

impl From<ureq::Error> for SubmissionError {
    fn from(e: ureq::Error) -> Self {
        SubmissionError::Transport(Box::new(e))
    }
}

pub struct PredictionClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        PredictionClient { config, agent }
    }

    /// Issues one POST to `{base_url}/predict` with the transaction as a
    /// JSON body and returns the parsed verdict verbatim. Failures are
    /// never retried here.
    ///
    /// A non-2xx status is a [`SubmissionError::Transport`] even when the
    /// body parses as a verdict: a verdict is only ever taken from a
    /// successful response.
    pub fn submit(&self, input: &TransactionInput) -> Result<PredictionResult, SubmissionError> {
        let url = self.config.predict_url();
        log::debug!("Submitting transaction to {url}: {input:?}");

        // send_json declares Content-Type: application/json
        let response = self.agent.post(&url).send_json(input)?;
        let body = response.into_string()?;

        let result: PredictionResult = serde_json::from_str(&body)?;
        log::debug!("Prediction received: {result:?}");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::screening::submitter::ClientConfig;

    #[test]
    fn test_that_predict_url_is_joined_to_base() {
        let config = ClientConfig::new("http://localhost:8080");
        assert_eq!(config.predict_url(), "http://localhost:8080/predict");
    }

    #[test]
    fn test_that_trailing_slashes_are_normalised() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.predict_url(), "http://localhost:8080/predict");

        let config = ClientConfig::new("http://localhost:8080//");
        assert_eq!(config.predict_url(), "http://localhost:8080/predict");
    }
}
