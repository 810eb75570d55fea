//----------------------------------------
// Crate error type
//----------------------------------------
use crate::input::error::ValidationError;
use crate::sample_size::error::NumericError;
use crate::util::error::{NormalDistErr, RootFindErr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AbcomputeErr {
    #[error("invalid input: {0}")]
    Validation(ValidationError),
    #[error("while computing sample size: {0}")]
    Numeric(NumericError),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while solving power equation: {0}")]
    RootFind(RootFindErr),
}

impl AbcomputeErr {
    /// The validation error behind this error, if the input was rejected
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AbcomputeErr::Validation(e) => Some(e),
            _ => None,
        }
    }
}
