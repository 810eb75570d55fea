//----------------------------------------
// Root lib
//----------------------------------------
//! Sample size computation for two-sample proportion (A/B) tests. Given a
//! baseline conversion rate, a minimum detectable relative lift, confidence,
//! power and a traffic split, computes how many subjects each group needs
//! for a two-sided z-test on Cohen's h.
//!
//! ```
//! use abcompute::compute::{CalculationInput, SampleSizeCalculator};
//!
//! let input = CalculationInput::new(0.05, 0.2, 0.95, 0.8, 50., 50.)?;
//! let result = SampleSizeCalculator::default().compute(&input)?;
//! assert_eq!(result.total_n(), 16286);
//! # Ok::<(), abcompute::error::AbcomputeErr>(())
//! ```

mod audit;
/// This module houses the public API for sample size calculations
pub mod compute;
mod effect_size;
/// This module contains error types
pub mod error;
mod hypothesis_type;
mod input;
mod sample_size;
mod summary;
mod util;

pub use crate::input::error::{InputField, ValidationError};
pub use crate::sample_size::error::NumericError;
pub use crate::util::error::{NormalDistErr, RootFindErr};
