mod form;
mod input;
mod report;
mod result;
mod session;
mod submitter;

pub use form::{FieldError, RawForm, ValidationErrors};
pub use input::{TransactionInput, TransactionType};
pub use report::{VerdictRecord, screen_records};
pub use result::{PredictionResult, Verdict};
pub use session::{PredictionSession, SubmissionState, SubmitOutcome};
pub use submitter::{ClientConfig, PredictionClient, SubmissionError};
