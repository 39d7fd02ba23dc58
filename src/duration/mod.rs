//----------------------------------------
// duration mod
//----------------------------------------
pub mod error;
pub mod expected_duration;
