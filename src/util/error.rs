//----------------------------------------
// util errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("could not construct standard normal distribution")]
    Construction,
}

impl Into<AbcomputeErr> for NormalDistErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::NormalDist(self)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindErr {
    #[error("target {target} is not bracketed by [{lower_bound}, {upper_bound}]")]
    BadBracket {
        lower_bound: f64,
        upper_bound: f64,
        target: f64,
    },
    #[error("failed to converge after {0} iterations")]
    FailedToConverge(usize),
}

impl Into<AbcomputeErr> for RootFindErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::RootFind(self)
    }
}
