//----------------------------------------
// Audit rendering
//----------------------------------------
use std::fmt;

use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::input::types::CalculationInput;
use crate::sample_size::provider::{AlternativeHypothesis, allocation_factor};
use crate::sample_size::types::CalculationResult;
use crate::util::std_normal::std_normal_quantile;

/// Plain text account of a calculation: every parameter and each formula
/// with its value, in evaluation order. The rendering depends only on the
/// input, the result and the hypothesis, so the same calculation always
/// renders the same text.
#[derive(Debug, Clone, PartialEq)]
pub struct Audit {
    input: CalculationInput,
    result: CalculationResult,
    hypothesis: HypothesisType,
    z_crit: f64,
    z_power: f64,
    closed_form: f64,
}

impl Audit {
    /// `provider` is the one that produced `result`; its hypothesis decides
    /// the critical value shown.
    pub fn new<A: AlternativeHypothesis + ?Sized>(
        input: &CalculationInput,
        result: &CalculationResult,
        provider: &A,
    ) -> Result<Self, AbcomputeErr> {
        let hypothesis = provider.hypothesis();
        let z_crit = hypothesis.critical_value(result.alpha())?;
        let z_power = std_normal_quantile(result.power())?;
        let closed_form = (z_crit + z_power).max(0.).powi(2)
            * allocation_factor(result.allocation().ratio)
            / result.effect_size().powi(2);
        Ok(Audit {
            input: *input,
            result: *result,
            hypothesis,
            z_crit,
            z_power,
            closed_form,
        })
    }
}

impl fmt::Display for Audit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = &self.input;
        let result = &self.result;
        let allocation = result.allocation();
        let weight_total = allocation.control_weight + allocation.treatment_weight;
        let critical_quantile = match self.hypothesis {
            HypothesisType::NotEqual => "z(1 - alpha/2)",
            HypothesisType::TrtGreater => "z(1 - alpha)",
        };

        writeln!(f, "# Parameters")?;
        writeln!(f, "baseline_rate        = {:.4}", input.baseline_rate)?;
        writeln!(f, "relative_improvement = {:.4}", input.relative_improvement)?;
        writeln!(f, "alternative          = {}", self.hypothesis.label())?;
        writeln!(f, "confidence           = {:.2}", input.confidence)?;
        writeln!(f, "power                = {:.2}", input.power)?;
        writeln!(
            f,
            "control_weight       = {:.2}",
            allocation.control_weight / weight_total
        )?;
        writeln!(
            f,
            "treatment_weight     = {:.2}",
            allocation.treatment_weight / weight_total
        )?;
        writeln!(f, "allocation_adjusted  = {}", allocation.adjusted)?;
        writeln!(f)?;
        writeln!(f, "# Computation")?;
        writeln!(
            f,
            "treatment_rate  = baseline_rate * (1 + relative_improvement) = {:.4}",
            result.treatment_rate()
        )?;
        writeln!(
            f,
            "effect_size     = 2*asin(sqrt(treatment_rate)) - 2*asin(sqrt(baseline_rate)) = {:.6}",
            result.effect_size()
        )?;
        writeln!(f, "alpha           = 1 - confidence = {:.2}", result.alpha())?;
        writeln!(
            f,
            "ratio           = treatment_weight / control_weight = {:.6}",
            allocation.ratio
        )?;
        writeln!(
            f,
            "z_crit          = {critical_quantile} = {:.6}",
            self.z_crit
        )?;
        writeln!(f, "z_power         = z(power) = {:.6}", self.z_power)?;
        writeln!(
            f,
            "closed_form     = (z_crit + z_power)^2 * (1 + 1/ratio) / effect_size^2 = {:.6}",
            self.closed_form
        )?;
        writeln!(
            f,
            "control_n       = ceil({:.6}) = {}",
            result.control_n_exact(),
            result.control_n()
        )?;
        writeln!(
            f,
            "treatment_n     = ceil({:.6} * ratio) = {}",
            result.control_n_exact(),
            result.treatment_n()
        )?;
        write!(
            f,
            "total_n         = control_n + treatment_n = {}",
            result.total_n()
        )
    }
}
