use crate::error::AbcomputeErr;
use crate::input::allocation::AllocationPolicy;
use crate::input::types::CalculationInput;
use crate::sample_size::error::NumericError;
use crate::sample_size::normal_approx::NormalApproximation;
use crate::sample_size::provider::{StatisticsProvider, check_effect_size};
use crate::sample_size::types::CalculationResult;

/// Computes group sizes for a two-sample proportion test. Holds only
/// configuration; every call to `compute` is independent.
#[derive(Debug, Clone)]
pub struct SampleSizeCalculator<P = NormalApproximation> {
    provider: P,
    policy: AllocationPolicy,
}

impl Default for SampleSizeCalculator {
    fn default() -> Self {
        SampleSizeCalculator::new(NormalApproximation::default())
    }
}

impl<P: StatisticsProvider> SampleSizeCalculator<P> {
    pub fn new(provider: P) -> Self {
        SampleSizeCalculator {
            provider,
            policy: AllocationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn policy(&self) -> AllocationPolicy {
        self.policy
    }

    /// Validates `input`, normalizes the traffic split and solves for both
    /// group sizes, each rounded up.
    ///
    /// The treatment size is `ceil(control_n_exact * ratio)`, taken from the
    /// unrounded control size. Calculators that round control first and then
    /// compute `ceil(control_n * ratio)` can report a treatment size one
    /// higher for unequal splits; rounding from the exact solution keeps the
    /// two groups exactly swapped when the weights are swapped.
    ///
    /// Sizes that don't fit in a `u64` are reported as
    /// `NumericError::SolutionTooLarge`.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult, AbcomputeErr> {
        input.validate()?;

        //----------------------------------------
        // Rates, allocation and effect size
        //----------------------------------------
        let treatment_rate = input.treatment_rate()?;
        let allocation = self
            .policy
            .apply(input.control_weight, input.treatment_weight)?;

        let effect_size = self
            .provider
            .effect_size(input.baseline_rate, treatment_rate);
        check_effect_size(effect_size)?;

        //----------------------------------------
        // Group sizes
        //----------------------------------------
        let alpha = input.alpha();
        let control_n_exact = self.provider.solve_sample_size(
            effect_size,
            alpha,
            input.power,
            allocation.ratio,
        )?;
        if !(control_n_exact >= 0. && control_n_exact.is_finite()) {
            return Err(NumericError::NonFiniteSolution(control_n_exact).into());
        }

        // Rounded from the exact control size, so swapping the weights
        // swaps the two groups exactly
        let treatment_n_exact = control_n_exact * allocation.ratio;
        let control_n = round_up(control_n_exact)?;
        let treatment_n = round_up(treatment_n_exact)?;
        let Some(total_n) = control_n.checked_add(treatment_n) else {
            return Err(
                NumericError::SolutionTooLarge(control_n_exact + treatment_n_exact).into(),
            );
        };

        Ok(CalculationResult {
            baseline_rate: input.baseline_rate,
            treatment_rate,
            effect_size,
            alpha,
            power: input.power,
            allocation,
            control_n_exact,
            control_n,
            treatment_n,
            total_n,
        })
    }
}

/// Group sizes are never rounded down, and a group is never empty
fn round_up(n: f64) -> Result<u64, AbcomputeErr> {
    let n = n.ceil();
    // u64::MAX as f64 is 2^64, the first value that doesn't convert exactly
    if !(n < u64::MAX as f64) {
        return Err(NumericError::SolutionTooLarge(n).into());
    }
    Ok((n as u64).max(1))
}
