use crate::screening::form::{RawForm, ValidationErrors};
use crate::screening::result::PredictionResult;
use crate::screening::submitter::PredictionClient;

/// Submission lifecycle: Idle -> Submitting -> {Success, Failed}.
/// Both terminal states accept a new submission at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success(PredictionResult),
    Failed,
}

/// Whether a submission actually ran or was dropped because another
/// one was still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    Ignored,
}

/// Owns the single display state of the screening flow: the current
/// verdict (if any) and the in-flight flag. One outstanding request at
/// a time, no cancellation, last write wins.
pub struct PredictionSession {
    client: PredictionClient,
    state: SubmissionState,
}

impl PredictionSession {
    pub fn new(client: PredictionClient) -> Self {
        PredictionSession {
            client,
            state: SubmissionState::Idle,
        }
    }

    /// Validates the form and, if it passes, submits it.
    ///
    /// Validation failure returns the per-field messages, issues no
    /// network call and leaves any previously displayed verdict intact.
    /// Entering `Submitting` clears the displayed verdict; a transport
    /// or response-shape failure is logged and ends in `Failed` with
    /// nothing displayed. A submit while another one is outstanding is
    /// dropped and reported as [`SubmitOutcome::Ignored`].
    pub fn submit(&mut self, form: &RawForm) -> Result<SubmitOutcome, ValidationErrors> {
        if self.is_submitting() {
            // Submit control is disabled while a request is outstanding
            log::warn!("Submission ignored: another one is in flight");
            return Ok(SubmitOutcome::Ignored);
        }

        let input = form.validate()?;

        self.state = SubmissionState::Submitting;
        self.state = match self.client.submit(&input) {
            Ok(result) => SubmissionState::Success(result),
            Err(e) => {
                log::error!("Submission failed: {e}");
                SubmissionState::Failed
            }
        };

        Ok(SubmitOutcome::Completed)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn current_result(&self) -> Option<&PredictionResult> {
        match &self.state {
            SubmissionState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }
}

#[cfg(test)]
mod tests {
    use crate::screening::session::{PredictionSession, SubmissionState};
    use crate::screening::submitter::{ClientConfig, PredictionClient};

    #[test]
    fn test_that_new_session_starts_idle() {
        let client = PredictionClient::new(ClientConfig::new("http://localhost:8080"));
        let session = PredictionSession::new(client);

        assert_eq!(*session.state(), SubmissionState::Idle);
        assert!(session.current_result().is_none());
        assert!(!session.is_submitting());
    }
}
