//----------------------------------------
// input mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::error::AbcomputeErr;
use crate::input::error::{InputField, ValidationError};

/// Parameters of a two-sample proportion test. Rates, confidence and power
/// are fractions, not percentages. Weights are shares of traffic, in percent
/// under the default allocation policy; once the policy has been applied
/// only their ratio matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub baseline_rate: f64,
    pub relative_improvement: f64,
    pub confidence: f64,
    pub power: f64,
    pub control_weight: f64,
    pub treatment_weight: f64,
}

impl Default for CalculationInput {
    // Defaults of the calculator form: 5% baseline, 20% lift, 95/80, 50/50
    fn default() -> Self {
        CalculationInput {
            baseline_rate: 0.05,
            relative_improvement: 0.2,
            confidence: 0.95,
            power: 0.8,
            control_weight: 50.,
            treatment_weight: 50.,
        }
    }
}

impl CalculationInput {
    pub fn new(
        baseline_rate: f64,
        relative_improvement: f64,
        confidence: f64,
        power: f64,
        control_weight: f64,
        treatment_weight: f64,
    ) -> Result<Self, AbcomputeErr> {
        let input = CalculationInput {
            baseline_rate,
            relative_improvement,
            confidence,
            power,
            control_weight,
            treatment_weight,
        };
        input.validate()?;
        Ok(input)
    }

    /// Checks every field against its domain, reporting the first offender.
    /// A relative improvement of exactly zero is accepted here; it surfaces
    /// later as a zero effect size.
    pub fn validate(&self) -> Result<(), AbcomputeErr> {
        open_unit_interval(InputField::BaselineRate, self.baseline_rate)?;

        if !self.relative_improvement.is_finite() {
            return Err(ValidationError::new(
                InputField::RelativeImprovement,
                self.relative_improvement,
                "should be finite",
            )
            .into());
        }
        if self.relative_improvement < 0. {
            return Err(ValidationError::new(
                InputField::RelativeImprovement,
                self.relative_improvement,
                "should not be negative",
            )
            .into());
        }

        open_unit_interval(InputField::Confidence, self.confidence)?;
        open_unit_interval(InputField::Power, self.power)?;
        positive_weight(InputField::ControlWeight, self.control_weight)?;
        positive_weight(InputField::TreatmentWeight, self.treatment_weight)?;

        Ok(())
    }

    /// Target rate of the treatment group, baseline * (1 + lift).
    /// Fails if it exceeds 100%.
    pub fn treatment_rate(&self) -> Result<f64, AbcomputeErr> {
        let treatment_rate = self.baseline_rate * (1. + self.relative_improvement);
        if treatment_rate > 1. {
            return Err(ValidationError::new(
                InputField::RelativeImprovement,
                treatment_rate,
                "target rate exceeds 100%",
            )
            .into());
        }
        Ok(treatment_rate)
    }

    pub fn alpha(&self) -> f64 {
        1. - self.confidence
    }
}

fn open_unit_interval(field: InputField, value: f64) -> Result<(), AbcomputeErr> {
    // NaN fails both comparisons, so it is rejected here too
    if value > 0. && value < 1. {
        Ok(())
    } else {
        Err(ValidationError::new(field, value, "should be in (0, 1)").into())
    }
}

fn positive_weight(field: InputField, value: f64) -> Result<(), AbcomputeErr> {
    if value > 0. && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new(field, value, "should be positive and finite").into())
    }
}
