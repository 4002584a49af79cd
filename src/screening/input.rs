use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use thiserror::Error;

/// A fully validated transaction, ready to be sent to the prediction
/// service. The only way to obtain one is through [`RawForm::validate`],
/// so holding a value implies every field constraint holds.
///
/// [`RawForm::validate`]: crate::screening::RawForm::validate
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub step: u32,
    #[serde(rename = "type")]
    pub typ: TransactionType,
    pub amount: f64,
    #[serde(rename = "oldbalanceOrg")]
    pub oldbalance_org: f64,
    #[serde(rename = "oldbalanceDest")]
    pub oldbalance_dest: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    CashIn,
    Debit,
    CashOut,
    Transfer,
}

#[derive(Error, Debug, Clone)]
#[error("Unknown transaction type: {0}")]
pub struct TransactionTypeError(String);

impl FromStr for TransactionType {
    type Err = TransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PAYMENT" => Ok(TransactionType::Payment),
            "CASH_IN" => Ok(TransactionType::CashIn),
            "DEBIT" => Ok(TransactionType::Debit),
            "CASH_OUT" => Ok(TransactionType::CashOut),
            "TRANSFER" => Ok(TransactionType::Transfer),
            other => Err(TransactionTypeError(other.into())),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Payment => "PAYMENT",
            TransactionType::CashIn => "CASH_IN",
            TransactionType::Debit => "DEBIT",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::Transfer => "TRANSFER",
        };
        write!(f, "{name}")
    }
}
