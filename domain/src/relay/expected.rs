//! Expected report count for a lieutenant
//!
//! A lieutenant receives one report for every relay path that starts at the
//! commander, never revisits a general, never passes through the lieutenant
//! itself, and is at most `m` hops past the commander. Counting those paths
//! gives
//!
//! ```text
//! expected(N, m) = 1 + Σ_{i=1..m} (N-2)(N-3)…(N-2-i+1)
//! ```

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Falling factorial `n · (n-1) · … · (n-k+1)`.
///
/// Returns `Some(0)` once a factor reaches zero and `None` on overflow.
pub fn falling_factorial(n: u64, k: u64) -> Option<u64> {
    let mut product: u64 = 1;
    for i in 0..k {
        if i >= n {
            return Some(0);
        }
        product = product.checked_mul(n - i)?;
    }
    Some(product)
}

/// Number of reports a lieutenant must collect in OM(`rounds`) with `generals` participants.
///
/// With fewer than two generals there are no lieutenants; the value is `1`.
pub fn expected_count(generals: usize, rounds: usize) -> Result<u64, DomainError> {
    let overflow = || DomainError::ExpectedCountOverflow { generals, rounds };

    let pool = generals.saturating_sub(2) as u64;
    let mut total: u64 = 1;
    for i in 1..=rounds as u64 {
        let paths = falling_factorial(pool, i).ok_or_else(overflow)?;
        if paths == 0 {
            break;
        }
        total = total.checked_add(paths).ok_or_else(overflow)?;
    }
    Ok(total)
}

/// The computed threshold shared read-only by every lieutenant of one run.
///
/// # Example
///
/// ```
/// use byzgen_domain::ExpectedCount;
///
/// assert_eq!(ExpectedCount::compute(4, 1).unwrap().get(), 3);
/// assert_eq!(ExpectedCount::compute(5, 2).unwrap().get(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedCount(u64);

impl ExpectedCount {
    pub fn compute(generals: usize, rounds: usize) -> Result<Self, DomainError> {
        expected_count(generals, rounds).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether `received` reports complete a lieutenant's tree.
    pub fn is_reached_by(self, received: u64) -> bool {
        received >= self.0
    }
}

impl std::fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::Order;
    use crate::relay::message::Message;
    use crate::relay::plan::RelayPlan;
    use crate::roster::Loyalty;
    use std::collections::VecDeque;

    /// Replay the relay rule synchronously and count deliveries per general.
    fn brute_force_counts(generals: usize, rounds: usize) -> Vec<u64> {
        let mut counts = vec![0u64; generals];
        let mut queue = VecDeque::new();
        queue.push_back((0usize, Message::initial(Order::Attack, rounds)));
        counts[0] += 1;

        while let Some((holder, msg)) = queue.pop_front() {
            if holder != 0 && !msg.should_relay() {
                continue;
            }
            for delivery in RelayPlan::build(holder, Loyalty::Loyal, &msg, generals) {
                counts[delivery.to] += 1;
                queue.push_back((delivery.to, delivery.message));
            }
        }
        counts
    }

    #[test]
    fn test_known_values() {
        assert_eq!(expected_count(4, 1), Ok(3));
        assert_eq!(expected_count(5, 2), Ok(10));
        assert_eq!(expected_count(7, 2), Ok(1 + 5 + 20));
    }

    #[test]
    fn test_zero_rounds_is_direct_report_only() {
        for n in 1..8 {
            assert_eq!(expected_count(n, 0), Ok(1));
        }
    }

    #[test]
    fn test_tiny_rosters() {
        assert_eq!(expected_count(0, 3), Ok(1));
        assert_eq!(expected_count(1, 3), Ok(1));
        assert_eq!(expected_count(2, 3), Ok(1));
        assert_eq!(expected_count(3, 1), Ok(2));
    }

    #[test]
    fn test_rounds_beyond_roster_stop_growing() {
        // N=4: paths through the two other lieutenants are exhausted after two hops.
        assert_eq!(expected_count(4, 2), Ok(5));
        assert_eq!(expected_count(4, 3), Ok(5));
        assert_eq!(expected_count(4, 10), Ok(5));
    }

    #[test]
    fn test_matches_brute_force_enumeration() {
        for generals in 2..=6 {
            for rounds in 0..=4 {
                let counts = brute_force_counts(generals, rounds);
                let expected = expected_count(generals, rounds).unwrap();
                for (id, count) in counts.iter().enumerate().skip(1) {
                    assert_eq!(
                        *count, expected,
                        "general {id} with N={generals}, m={rounds}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_falling_factorial() {
        assert_eq!(falling_factorial(5, 0), Some(1));
        assert_eq!(falling_factorial(5, 2), Some(20));
        assert_eq!(falling_factorial(3, 3), Some(6));
        assert_eq!(falling_factorial(3, 4), Some(0));
        assert_eq!(falling_factorial(u64::MAX, 2), None);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            expected_count(40, 30),
            Err(DomainError::ExpectedCountOverflow {
                generals: 40,
                rounds: 30
            })
        );
    }

    #[test]
    fn test_is_reached_by() {
        let expected = ExpectedCount::compute(4, 1).unwrap();
        assert!(!expected.is_reached_by(2));
        assert!(expected.is_reached_by(3));
    }
}
