//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::audit::Audit;
pub use crate::hypothesis_type::HypothesisType;
pub use crate::input::allocation::{Allocation, AllocationPolicy, PERCENT_TOTAL};
pub use crate::input::types::CalculationInput;
pub use crate::sample_size::compute_ss::SampleSizeCalculator;
pub use crate::sample_size::normal_approx::NormalApproximation;
pub use crate::sample_size::power_root_find::PowerRootFind;
pub use crate::sample_size::provider::{AlternativeHypothesis, StatisticsProvider};
pub use crate::sample_size::types::CalculationResult;
pub use crate::summary::types::{DEFAULT_DAILY_TRAFFIC, RunTime, Summary};
