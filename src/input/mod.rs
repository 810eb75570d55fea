//----------------------------------------
// input mod
//----------------------------------------
pub mod allocation;
pub mod error;
pub mod types;
