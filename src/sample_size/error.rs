//----------------------------------------
// sample size errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("effect size is zero (treatment rate equals baseline rate); no sample size can detect it")]
    ZeroEffectSize,
    #[error("effect size is not finite; got {0}")]
    NonFiniteEffectSize(f64),
    #[error("sample size solution is not finite; got {0}")]
    NonFiniteSolution(f64),
    #[error("sample size {0} is too large to count")]
    SolutionTooLarge(f64),
}

impl Into<AbcomputeErr> for NumericError {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::Numeric(self)
    }
}
