//! Wire contracts shared by the finance client.
//!
//! Everything in this crate is target independent: DTOs mirroring the REST
//! resources plus the small pieces of pure logic (period presets, running
//! balances, breakdown checks) that the UI layer builds on.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
