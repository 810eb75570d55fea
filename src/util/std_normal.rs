use crate::error::AbcomputeErr;
use crate::util::error::NormalDistErr;
use statrs::distribution::{ContinuousCDF, Normal};

fn std_normal() -> Result<Normal, AbcomputeErr> {
    Normal::new(0.0, 1.0).map_err(|_| NormalDistErr::Construction.into())
}

pub fn std_normal_cdf(z: f64) -> Result<f64, AbcomputeErr> {
    Ok(std_normal()?.cdf(z))
}

/// Upper tail probability, 1 - Phi(z), without the cancellation of
/// subtracting from one
pub fn std_normal_sf(z: f64) -> Result<f64, AbcomputeErr> {
    Ok(std_normal()?.sf(z))
}

/// Inverse of the standard normal cdf on the open interval (0, 1)
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(std_normal()?.inverse_cdf(p))
}
