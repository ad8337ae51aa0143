pub mod aggregate;
pub mod balance;

pub use aggregate::*;
pub use balance::{running_balance, BalancePoint};
