pub mod amount;
pub mod api_error;
pub mod indicators;
pub mod period;
