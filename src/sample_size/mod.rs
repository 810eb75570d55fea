//----------------------------------------
// sample size mod
//----------------------------------------
pub mod compute_ss;
pub mod error;
pub mod normal_approx;
pub mod power_root_find;
pub mod provider;
pub mod types;
