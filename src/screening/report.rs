use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::screening::form::RawForm;
use crate::screening::session::{PredictionSession, SubmissionState, SubmitOutcome};

/// One line of the screening report, decoupled from the session state
/// for easy serialisation and comparison.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VerdictRecord {
    pub row: u64,
    pub verdict: String,
    pub message: String,
}

/// Screens every record in the reader through the session, one
/// submission per data row.
///
/// Rows that fail to deserialise are logged and skipped. Validation
/// failures become an `invalid` record carrying the field messages.
/// Transport failures produce no record at all, only a log line.
pub fn screen_records<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
    session: &mut PredictionSession,
) -> Result<Vec<VerdictRecord>> {
    let mut records: Vec<VerdictRecord> = Vec::new();

    for (idx, result) in rdr.deserialize::<RawForm>().enumerate() {
        let row = (idx + 1) as u64;

        log::debug!("Deserialising row {row}: {result:?}");
        let form = match result {
            Ok(f) => f,
            Err(e) => {
                log::warn!("Error deserialising row {row}: {e}");
                continue;
            }
        };

        match session.submit(&form) {
            Err(validation) => {
                log::info!("Row {row} rejected by validation: {validation}");
                records.push(VerdictRecord {
                    row,
                    verdict: "invalid".into(),
                    message: validation.to_string(),
                });
            }
            Ok(SubmitOutcome::Ignored) => {
                // The prior row's state is stale for this row
                log::warn!("Row {row}: submission dropped, another one in flight");
            }
            Ok(SubmitOutcome::Completed) => match session.state() {
                SubmissionState::Success(result) => {
                    records.push(VerdictRecord {
                        row,
                        verdict: result.verdict().to_string(),
                        message: result.message.clone(),
                    });
                }
                _ => {
                    // Failed: no verdict to display for this row
                    log::warn!("Row {row}: no prediction available");
                }
            },
        }
    }

    Ok(records)
}
