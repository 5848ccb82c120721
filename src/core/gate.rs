use crate::domain::model::{Measurement, Submission};
use crate::utils::error::{BazaiError, Result};
use crate::utils::validation::{is_positive_measurement, Validate};

pub const INVALID_SUBMISSION: &str = "Please provide valid inputs for name, height, and weight.";

impl Validate for Submission {
    fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        // 與表單一致: 只拒絕空字串，純空白的名字仍然接受
        if self.name.is_empty() {
            problems.push("name is empty");
        }
        if !is_positive_measurement(self.height_cm) {
            problems.push("height must be positive");
        }
        if !is_positive_measurement(self.weight_kg) {
            problems.push("weight must be positive");
        }

        if problems.is_empty() {
            return Ok(());
        }

        tracing::debug!("Submission rejected: {}", problems.join(", "));
        Err(BazaiError::ValidationError {
            message: INVALID_SUBMISSION.to_string(),
        })
    }
}

/// Runs the gate and hands back the measurement the calculator may trust.
pub fn admit(submission: &Submission) -> Result<Measurement> {
    submission.validate()?;
    Ok(Measurement {
        height_cm: submission.height_cm,
        weight_kg: submission.weight_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, height_cm: f64, weight_kg: f64) -> Submission {
        Submission {
            name: name.to_string(),
            height_cm,
            weight_kg,
            mood: "Neutral".to_string(),
        }
    }

    #[test]
    fn test_gate_accepts_valid_submission() {
        let measurement = admit(&submission("Alex", 170.0, 54.0)).unwrap();
        assert_eq!(measurement.height_cm, 170.0);
        assert_eq!(measurement.weight_kg, 54.0);
    }

    #[test]
    fn test_gate_rejects_empty_name() {
        assert!(matches!(
            admit(&submission("", 170.0, 54.0)),
            Err(BazaiError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_gate_accepts_whitespace_name() {
        assert!(admit(&submission("   ", 170.0, 54.0)).is_ok());
    }

    #[test]
    fn test_gate_rejects_zero_height() {
        assert!(matches!(
            admit(&submission("Alex", 0.0, 54.0)),
            Err(BazaiError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_gate_rejects_negative_weight() {
        let err = admit(&submission("Alex", 170.0, -5.0)).unwrap_err();
        assert_eq!(err.user_friendly_message(), INVALID_SUBMISSION);
    }
}
