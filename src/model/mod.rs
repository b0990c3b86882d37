//! Churn model: field encoding, validation, scaling, and the frozen
//! classifier.

/// Artifact loading and the prediction entry point.
pub mod artifact;
/// Feature-vector construction.
pub mod encoding;
/// Closed categorical field types.
pub mod fields;
/// Random-forest evaluation.
pub mod forest;
/// Standard-score scaling of the continuous columns.
pub mod scaler;
/// Form-input validation.
pub mod validate;

/// Binary churn outcome, the classifier's sole output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnLabel {
    /// Label 0: the customer is not likely to churn.
    Stays,
    /// Label 1: the customer is likely to churn.
    Churns,
}

impl ChurnLabel {
    /// Numeric class label as the classifier emits it.
    pub fn code(self) -> u8 {
        match self {
            Self::Stays => 0,
            Self::Churns => 1,
        }
    }
}
