//----------------------------------------
// summary mod
//----------------------------------------
//! Figures derived from a finished calculation for reporting: expected
//! conversions, the lift in percentage points and how long a test runs at a
//! given traffic level.
pub mod projection;
pub mod types;
