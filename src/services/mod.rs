// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod password;
pub mod streak;

pub use streak::{StreakOutcome, StreakService};
