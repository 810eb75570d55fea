use serde::Serialize;

use crate::input::allocation::Allocation;

/// Outcome of a sample size calculation. Fields are read-only; a result is
/// only ever produced by `SampleSizeCalculator::compute`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub(crate) baseline_rate: f64,
    pub(crate) treatment_rate: f64,
    pub(crate) effect_size: f64,
    pub(crate) alpha: f64,
    pub(crate) power: f64,
    pub(crate) allocation: Allocation,
    pub(crate) control_n_exact: f64,
    pub(crate) control_n: u64,
    pub(crate) treatment_n: u64,
    pub(crate) total_n: u64,
}

impl CalculationResult {
    pub fn baseline_rate(&self) -> f64 {
        self.baseline_rate
    }

    pub fn treatment_rate(&self) -> f64 {
        self.treatment_rate
    }

    /// Cohen's h between baseline and treatment rates
    pub fn effect_size(&self) -> f64 {
        self.effect_size
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Unrounded control group size returned by the solver
    pub fn control_n_exact(&self) -> f64 {
        self.control_n_exact
    }

    /// Unrounded treatment group size, control_n_exact * ratio
    pub fn treatment_n_exact(&self) -> f64 {
        self.control_n_exact * self.allocation.ratio
    }

    pub fn control_n(&self) -> u64 {
        self.control_n
    }

    pub fn treatment_n(&self) -> u64 {
        self.treatment_n
    }

    pub fn total_n(&self) -> u64 {
        self.total_n
    }
}
