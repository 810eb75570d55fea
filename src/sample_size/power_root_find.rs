use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::sample_size::normal_approx::NormalApproximation;
use crate::sample_size::provider::{
    AlternativeHypothesis, StatisticsProvider, allocation_factor, check_effect_size, check_ratio,
};
use crate::util::root_find::root_find_monotonic;
use crate::util::std_normal::{std_normal_cdf, std_normal_sf};

/// Solves the power equation of the two-sample z-test numerically,
/// counting the rejection probability of both tails:
///
/// power(n) = Phi(|h| sqrt(n / k) - z_crit) + Phi(-|h| sqrt(n / k) - z_crit)
///
/// with k = 1 + 1/ratio. The closed form drops the second term, so its
/// solution brackets this one from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRootFind {
    pub hypothesis: HypothesisType,
    /// Width of the final bracket, in units of control group size
    pub tol: f64,
}

impl Default for PowerRootFind {
    fn default() -> Self {
        PowerRootFind {
            hypothesis: HypothesisType::default(),
            tol: 1e-6,
        }
    }
}

impl PowerRootFind {
    pub fn new(hypothesis: HypothesisType, tol: f64) -> Self {
        PowerRootFind { hypothesis, tol }
    }

    /// Power of the test with `n_ctrl` control subjects
    pub fn power(
        &self,
        effect_size: f64,
        alpha: f64,
        ratio: f64,
        n_ctrl: f64,
    ) -> Result<f64, AbcomputeErr> {
        let z_crit = self.hypothesis.critical_value(alpha)?;
        let drift = effect_size.abs() * (n_ctrl / allocation_factor(ratio)).sqrt();
        let upper = std_normal_cdf(drift - z_crit)?;
        match self.hypothesis {
            // Rejections in the wrong direction still count as rejections
            HypothesisType::NotEqual => Ok(upper + std_normal_sf(drift + z_crit)?),
            HypothesisType::TrtGreater => Ok(upper),
        }
    }
}

impl AlternativeHypothesis for PowerRootFind {
    fn hypothesis(&self) -> HypothesisType {
        self.hypothesis
    }
}

impl StatisticsProvider for PowerRootFind {
    fn solve_sample_size(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
    ) -> Result<f64, AbcomputeErr> {
        check_effect_size(effect_size)?;
        check_ratio(ratio)?;

        let power_by_n = |n_ctrl: f64| self.power(effect_size, alpha, ratio, n_ctrl);
        if power_by_n(0.)? >= power {
            return Ok(0.);
        }

        let closed_form = NormalApproximation::new(self.hypothesis).solve_sample_size(
            effect_size,
            alpha,
            power,
            ratio,
        )?;
        // Padded so rounding in cdf(quantile(p)) can't leave the target unbracketed
        let upper_bound = closed_form * 1.001 + 1.;

        root_find_monotonic(power_by_n, 0., upper_bound, power, self.tol)
    }
}
