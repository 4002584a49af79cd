use std::fmt;
use serde::Deserialize;

/// The prediction service's verdict, kept verbatim for display.
/// Every field is required: a response missing one of them fails to
/// deserialise instead of propagating an absent verdict.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    pub fraud_prediction: bool,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Fraud,
    Safe,
}

impl PredictionResult {
    pub fn verdict(&self) -> Verdict {
        if self.fraud_prediction {
            Verdict::Fraud
        } else {
            Verdict::Safe
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.verdict() {
            Verdict::Fraud => "Fraud Detected!",
            Verdict::Safe => "Transaction Safe",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Fraud => write!(f, "fraud"),
            Verdict::Safe => write!(f, "safe"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::screening::result::{PredictionResult, Verdict};

    #[test]
    fn test_that_fraud_response_maps_to_fraud_verdict() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"fraud_prediction":true,"success":true,"message":"High risk"}"#,
        )
        .unwrap();

        assert_eq!(result.verdict(), Verdict::Fraud);
        assert_eq!(result.headline(), "Fraud Detected!");
        assert_eq!(result.message, "High risk");
    }

    #[test]
    fn test_that_safe_response_maps_to_safe_verdict() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"fraud_prediction":false,"success":true,"message":"Looks safe"}"#,
        )
        .unwrap();

        assert_eq!(result.verdict(), Verdict::Safe);
        assert_eq!(result.headline(), "Transaction Safe");
        assert_eq!(result.message, "Looks safe");
    }

    #[test]
    fn test_that_response_missing_keys_fails_to_parse() {
        let res = serde_json::from_str::<PredictionResult>(r#"{"success":true}"#);
        assert!(res.is_err());

        let res = serde_json::from_str::<PredictionResult>(r#"{"fraud_prediction":true,"success":true}"#);
        assert!(res.is_err());
    }
}
