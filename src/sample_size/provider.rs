use crate::effect_size::cohens_h::cohens_h;
use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::input::error::{InputField, ValidationError};
use crate::sample_size::error::NumericError;

/// Numeric back end of the calculator: the effect size transform and the
/// power-to-sample-size solve. Everything else (validation, allocation,
/// rounding) stays in `SampleSizeCalculator`, so providers can be swapped or
/// checked against reference values on their own.
pub trait StatisticsProvider {
    /// Standardized difference between a baseline proportion p1 and a
    /// treatment proportion p2; positive when p2 > p1.
    fn effect_size(&self, p1: f64, p2: f64) -> f64 {
        cohens_h(p1, p2)
    }

    /// Unrounded control group size needed to detect `effect_size` at
    /// significance `alpha` with probability `power`, when the treatment
    /// group is `ratio` times as large as the control group.
    fn solve_sample_size(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
    ) -> Result<f64, AbcomputeErr>;
}

impl<P: StatisticsProvider + ?Sized> StatisticsProvider for &P {
    fn effect_size(&self, p1: f64, p2: f64) -> f64 {
        (**self).effect_size(p1, p2)
    }

    fn solve_sample_size(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
    ) -> Result<f64, AbcomputeErr> {
        (**self).solve_sample_size(effect_size, alpha, power, ratio)
    }
}

/// Providers that solve for a fixed alternative hypothesis. Reports built
/// from a result take the hypothesis from here rather than from the caller.
pub trait AlternativeHypothesis {
    fn hypothesis(&self) -> HypothesisType;
}

impl<P: AlternativeHypothesis + ?Sized> AlternativeHypothesis for &P {
    fn hypothesis(&self) -> HypothesisType {
        (**self).hypothesis()
    }
}

/// Rejects effect sizes the sample size formulas can't divide by
pub(crate) fn check_effect_size(effect_size: f64) -> Result<(), AbcomputeErr> {
    if !effect_size.is_finite() {
        return Err(NumericError::NonFiniteEffectSize(effect_size).into());
    }
    if effect_size == 0. {
        return Err(NumericError::ZeroEffectSize.into());
    }
    Ok(())
}

pub(crate) fn check_ratio(ratio: f64) -> Result<(), AbcomputeErr> {
    if ratio > 0. && ratio.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new(
            InputField::TreatmentWeight,
            ratio,
            "gives an allocation ratio that is not positive and finite",
        )
        .into())
    }
}

/// Variance inflation of the two-sample test relative to a single group,
/// 1 + 1/ratio
pub(crate) fn allocation_factor(ratio: f64) -> f64 {
    1. + 1. / ratio
}
