use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::sample_size::error::NumericError;
use crate::sample_size::provider::{
    AlternativeHypothesis, StatisticsProvider, allocation_factor, check_effect_size, check_ratio,
};
use crate::util::std_normal::std_normal_quantile;

/// Closed form sample size of the two-sample z-test on Cohen's h:
///
/// n_ctrl = (z_crit + z_power)^2 * (1 + 1/ratio) / h^2
///
/// The arcsine transformed proportions have known unit variance, so no
/// degrees of freedom correction applies. Only the tail the effect points
/// into is counted, which makes this a slight upper bound on the exact
/// two-sided solution.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NormalApproximation {
    pub hypothesis: HypothesisType,
}

impl NormalApproximation {
    pub fn new(hypothesis: HypothesisType) -> Self {
        NormalApproximation { hypothesis }
    }
}

impl AlternativeHypothesis for NormalApproximation {
    fn hypothesis(&self) -> HypothesisType {
        self.hypothesis
    }
}

impl StatisticsProvider for NormalApproximation {
    fn solve_sample_size(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
    ) -> Result<f64, AbcomputeErr> {
        check_effect_size(effect_size)?;
        check_ratio(ratio)?;

        let z_crit = self.hypothesis.critical_value(alpha)?;
        let z_power = std_normal_quantile(power)?;
        // Power at or below the false positive rate is reached with no data
        let theta = z_crit + z_power;
        if theta <= 0. {
            return Ok(0.);
        }

        let n_ctrl = theta.powi(2) * allocation_factor(ratio) / effect_size.powi(2);
        if !n_ctrl.is_finite() {
            return Err(NumericError::NonFiniteSolution(n_ctrl).into());
        }
        Ok(n_ctrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect_size::cohens_h::cohens_h;
    use approx::assert_relative_eq;

    #[test]
    fn five_percent_baseline_twenty_percent_lift() {
        let provider = NormalApproximation::default();
        let h = provider.effect_size(0.05, 0.06);
        let n = provider
            .solve_sample_size(h, 0.05, 0.8, 1.)
            .expect("failed to solve sample size");
        assert_relative_eq!(n, 8142.615, epsilon = 0.01);
    }

    #[test]
    fn unequal_allocation() {
        let provider = NormalApproximation::default();
        let h = cohens_h(0.3, 0.45);
        let n = provider.solve_sample_size(h, 0.01, 0.9, 1.5).unwrap();
        assert_relative_eq!(n, 255.822, epsilon = 0.01);
    }

    #[test]
    fn sign_of_effect_size_irrelevant() {
        let provider = NormalApproximation::default();
        let h = cohens_h(0.05, 0.06);
        assert_eq!(
            provider.solve_sample_size(h, 0.05, 0.8, 1.).unwrap(),
            provider.solve_sample_size(-h, 0.05, 0.8, 1.).unwrap()
        );
    }

    #[test]
    fn one_sided_needs_fewer() {
        let h = cohens_h(0.05, 0.06);
        let two_sided = NormalApproximation::default()
            .solve_sample_size(h, 0.05, 0.8, 1.)
            .unwrap();
        let one_sided = NormalApproximation::new(HypothesisType::TrtGreater)
            .solve_sample_size(h, 0.05, 0.8, 1.)
            .unwrap();
        assert!(one_sided < two_sided);
        // (1.644854 + 0.841621)^2 * 2 / h^2
        assert_relative_eq!(one_sided, 6413.93, epsilon = 0.05);
    }

    #[test]
    fn power_below_alpha_needs_nothing() {
        let h = cohens_h(0.05, 0.06);
        let n = NormalApproximation::default()
            .solve_sample_size(h, 0.2, 0.01, 1.)
            .unwrap();
        assert_eq!(n, 0.);

        // h^2 underflows to zero here, which must not turn into 0/0
        let n = NormalApproximation::default()
            .solve_sample_size(1e-170, 0.2, 0.01, 1.)
            .unwrap();
        assert_eq!(n, 0.);
    }

    #[test]
    fn zero_effect_size() {
        let err = NormalApproximation::default()
            .solve_sample_size(0., 0.05, 0.8, 1.)
            .unwrap_err();
        assert_eq!(err, AbcomputeErr::Numeric(NumericError::ZeroEffectSize));
    }

    #[test]
    fn alpha_out_of_range() {
        let h = cohens_h(0.05, 0.06);
        assert!(matches!(
            NormalApproximation::default().solve_sample_size(h, 2.5, 0.8, 1.),
            Err(AbcomputeErr::NormalDist(_))
        ));
    }
}
