//----------------------------------------
// util mod
//----------------------------------------
pub mod error;
pub mod root_find;
pub mod std_normal;
