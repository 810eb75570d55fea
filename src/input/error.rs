//----------------------------------------
// Input validation errors
//----------------------------------------
use std::fmt;

use crate::error::AbcomputeErr;
use serde::Serialize;
use thiserror::Error;

/// Field of a calculation that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    BaselineRate,
    RelativeImprovement,
    Confidence,
    Power,
    ControlWeight,
    TreatmentWeight,
    DailyTraffic,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::BaselineRate => "baseline_rate",
            InputField::RelativeImprovement => "relative_improvement",
            InputField::Confidence => "confidence",
            InputField::Power => "power",
            InputField::ControlWeight => "control_weight",
            InputField::TreatmentWeight => "treatment_weight",
            InputField::DailyTraffic => "daily_traffic",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field} {reason}; got {value}")]
pub struct ValidationError {
    pub field: InputField,
    pub value: f64,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: InputField, value: f64, reason: &'static str) -> Self {
        ValidationError {
            field,
            value,
            reason,
        }
    }
}

impl Into<AbcomputeErr> for ValidationError {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::Validation(self)
    }
}
