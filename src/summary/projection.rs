use crate::error::AbcomputeErr;
use crate::input::error::{InputField, ValidationError};

/// Conversions expected among `n` subjects converting at `rate`. Rounded
/// down: a fractional conversion is never observed.
pub fn expected_conversions(n: u64, rate: f64) -> u64 {
    (n as f64 * rate).floor() as u64
}

/// Absolute lift from baseline to treatment, in percentage points
pub fn improvement_points(baseline_rate: f64, treatment_rate: f64) -> f64 {
    (treatment_rate - baseline_rate) * 100.
}

/// Whole days needed for `total_n` subjects at `daily_traffic` per day
pub fn days_to_run(total_n: u64, daily_traffic: u64) -> Result<u64, AbcomputeErr> {
    if daily_traffic == 0 {
        return Err(ValidationError::new(
            InputField::DailyTraffic,
            0.,
            "should be at least one subject per day",
        )
        .into());
    }
    Ok(total_n.div_ceil(daily_traffic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions_round_down() {
        assert_eq!(expected_conversions(8143, 0.05), 407);
        assert_eq!(expected_conversions(8143, 0.06), 488);
        assert_eq!(expected_conversions(10, 0.5), 5);
    }

    #[test]
    fn points_from_rates() {
        assert_relative_eq!(improvement_points(0.05, 0.06), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn days_round_up() {
        assert_eq!(days_to_run(16286, 1_000).unwrap(), 17);
        assert_eq!(days_to_run(16286, 10_000).unwrap(), 2);
        assert_eq!(days_to_run(20_000, 10_000).unwrap(), 2);
    }

    #[test]
    fn no_traffic() {
        let err = days_to_run(100, 0).unwrap_err();
        assert_eq!(
            err.as_validation().map(|v| v.field),
            Some(InputField::DailyTraffic)
        );
    }
}
