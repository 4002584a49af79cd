use std::fmt;
use std::str::FromStr;
use serde::Deserialize;

use crate::screening::input::{TransactionInput, TransactionType};

/// Raw, possibly-malformed user entry. Fields stay as text until
/// [`validate`](RawForm::validate) coerces them, so a bad cell never
/// aborts deserialisation of the whole record.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawForm {
    pub step: String,
    #[serde(rename = "type")]
    pub typ: String,
    pub amount: String,
    #[serde(rename = "oldbalanceOrg")]
    pub oldbalance_org: String,
    #[serde(rename = "oldbalanceDest")]
    pub oldbalance_dest: String,
}

impl Default for RawForm {
    fn default() -> Self {
        RawForm {
            step: "1".into(),
            typ: "TRANSFER".into(),
            amount: "0".into(),
            oldbalance_org: "0".into(),
            oldbalance_dest: "0".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The full set of per-field failures from one validation pass.
/// All-or-nothing: if this is returned, no network call was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl RawForm {
    /// Coerces every field from text and applies the range checks.
    /// Either all five fields pass and a typed transaction comes back,
    /// or every failing field is reported at once.
    pub fn validate(&self) -> Result<TransactionInput, ValidationErrors> {
        let mut errors: Vec<FieldError> = Vec::new();

        let step = match self.step.trim().parse::<u32>() {
            Ok(v) if v >= 1 => Some(v),
            Ok(_) => {
                errors.push(FieldError {
                    field: "step",
                    message: "Step must be at least 1".into(),
                });
                None
            }
            Err(_) => {
                errors.push(FieldError {
                    field: "step",
                    message: "Step must be a whole number".into(),
                });
                None
            }
        };

        let typ = match TransactionType::from_str(&self.typ) {
            Ok(t) => Some(t),
            Err(e) => {
                errors.push(FieldError {
                    field: "type",
                    message: e.to_string(),
                });
                None
            }
        };

        let amount = parse_decimal(&self.amount, "amount", "Amount must be positive", &mut errors);
        let oldbalance_org = parse_decimal(
            &self.oldbalance_org,
            "oldbalanceOrg",
            "Balance must be positive",
            &mut errors,
        );
        let oldbalance_dest = parse_decimal(
            &self.oldbalance_dest,
            "oldbalanceDest",
            "Balance must be positive",
            &mut errors,
        );

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        // All five are Some once errors is empty
        Ok(TransactionInput {
            step: step.unwrap(),
            typ: typ.unwrap(),
            amount: amount.unwrap(),
            oldbalance_org: oldbalance_org.unwrap(),
            oldbalance_dest: oldbalance_dest.unwrap(),
        })
    }
}

fn parse_decimal(
    raw: &str,
    field: &'static str,
    range_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        Ok(_) => {
            errors.push(FieldError {
                field,
                message: range_message.into(),
            });
            None
        }
        Err(_) => {
            errors.push(FieldError {
                field,
                message: format!("{field} must be a number"),
            });
            None
        }
    }
}
