use serde::Serialize;

use crate::error::AbcomputeErr;
use crate::input::error::{InputField, ValidationError};

/// Conventional total of a traffic split given in percent
pub const PERCENT_TOTAL: f64 = 100.;

/// How a pair of traffic weights is turned into an allocation ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AllocationPolicy {
    /// Weights are expected to add up to `total`. If they don't, the control
    /// weight is kept and the treatment weight becomes `total - control`.
    ControlAuthoritative { total: f64 },
    /// Weights are used as given; only their ratio matters.
    RatioOnly,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        AllocationPolicy::ControlAuthoritative {
            total: PERCENT_TOTAL,
        }
    }
}

/// Traffic split after the allocation policy has been applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation {
    pub control_weight: f64,
    pub treatment_weight: f64,
    /// treatment_n / control_n
    pub ratio: f64,
    /// Whether the policy replaced the supplied treatment weight
    pub adjusted: bool,
}

impl AllocationPolicy {
    pub fn apply(
        &self,
        control_weight: f64,
        treatment_weight: f64,
    ) -> Result<Allocation, AbcomputeErr> {
        for (field, w) in [
            (InputField::ControlWeight, control_weight),
            (InputField::TreatmentWeight, treatment_weight),
        ] {
            if !(w > 0. && w.is_finite()) {
                return Err(ValidationError::new(field, w, "should be positive and finite").into());
            }
        }

        let (treatment_weight, adjusted) = match *self {
            AllocationPolicy::RatioOnly => (treatment_weight, false),
            AllocationPolicy::ControlAuthoritative { total } => {
                let sum = control_weight + treatment_weight;
                if (sum - total).abs() <= total.abs() * 1e-9 {
                    (treatment_weight, false)
                } else if control_weight >= total {
                    return Err(ValidationError::new(
                        InputField::ControlWeight,
                        control_weight,
                        "leaves no traffic for treatment",
                    )
                    .into());
                } else {
                    (total - control_weight, true)
                }
            }
        };

        Ok(Allocation {
            control_weight,
            treatment_weight,
            ratio: treatment_weight / control_weight,
            adjusted,
        })
    }
}
