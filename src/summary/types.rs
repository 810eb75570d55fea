use serde::Serialize;

use crate::error::AbcomputeErr;
use crate::sample_size::types::CalculationResult;
use crate::summary::projection::{days_to_run, expected_conversions, improvement_points};

/// Traffic levels, in subjects per day, reported when none are given
pub const DEFAULT_DAILY_TRAFFIC: [u64; 2] = [1_000, 10_000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunTime {
    pub daily_traffic: u64,
    pub days: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub control_conversions: u64,
    pub treatment_conversions: u64,
    pub improvement_points: f64,
    pub run_times: Vec<RunTime>,
}

impl Summary {
    pub fn new(result: &CalculationResult, daily_traffic: &[u64]) -> Result<Self, AbcomputeErr> {
        let run_times = daily_traffic
            .iter()
            .map(|&daily_traffic| {
                Ok(RunTime {
                    daily_traffic,
                    days: days_to_run(result.total_n(), daily_traffic)?,
                })
            })
            .collect::<Result<Vec<RunTime>, AbcomputeErr>>()?;

        Ok(Summary {
            control_conversions: expected_conversions(result.control_n(), result.baseline_rate()),
            treatment_conversions: expected_conversions(
                result.treatment_n(),
                result.treatment_rate(),
            ),
            improvement_points: improvement_points(result.baseline_rate(), result.treatment_rate()),
            run_times,
        })
    }
}
