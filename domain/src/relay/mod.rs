//! Oral-message relay rules
//!
//! Everything a general needs to know to forward a report, independent of
//! how messages are actually transported:
//!
//! - [`message::Message`]: an order plus the path it travelled and the rounds left
//! - [`plan::RelayPlan`]: the fan-out a loyal or traitorous relayer produces
//! - [`expected::expected_count`]: how many reports a lieutenant waits for
//!
//! # Fan-out
//!
//! ```text
//!   commander 0 ──[0]──▶ 1, 2, 3          level m
//!   lieutenant 1 ──[0,1]──▶ 2, 3          level m-1
//!   lieutenant 2 ──[0,1,2]──▶ 3           level m-2
//! ```
//!
//! A relayer never sends to anyone already on the path, so each hop shrinks
//! the pool of recipients by one.

pub mod expected;
pub mod message;
pub mod plan;

pub use expected::{ExpectedCount, expected_count, falling_factorial};
pub use message::Message;
pub use plan::{Delivery, RelayPlan};
