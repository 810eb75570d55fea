use serde::Serialize;

use crate::error::AbcomputeErr;
use crate::util::std_normal::std_normal_quantile;

/// Alternative hypothesis of the proportion test
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub enum HypothesisType {
    /// Two-sided: alpha is split across both tails
    #[default]
    #[serde(rename = "two-sided")]
    NotEqual,
    /// One-sided: treatment rate is greater than baseline
    #[serde(rename = "larger")]
    TrtGreater,
}

impl HypothesisType {
    /// Probability mass of alpha placed in the upper tail
    pub fn tail_alpha(&self, alpha: f64) -> f64 {
        match self {
            HypothesisType::NotEqual => alpha / 2.,
            HypothesisType::TrtGreater => alpha,
        }
    }

    /// Critical value of the test, z_(1 - alpha/2) or z_(1 - alpha)
    pub fn critical_value(&self, alpha: f64) -> Result<f64, AbcomputeErr> {
        std_normal_quantile(1. - self.tail_alpha(alpha))
    }

    pub fn label(&self) -> &'static str {
        match self {
            HypothesisType::NotEqual => "two-sided",
            HypothesisType::TrtGreater => "larger",
        }
    }
}
