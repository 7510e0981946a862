//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Loyalty string is empty: at least one general (the commander) is required")]
    EmptyRoster,

    #[error("Invalid order '{0}': expected ATTACK or RETREAT")]
    InvalidOrder(String),

    #[error("Expected report count overflows for {generals} generals and m = {rounds}")]
    ExpectedCountOverflow { generals: usize, rounds: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_order_display() {
        let error = DomainError::InvalidOrder("charge".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid order 'charge': expected ATTACK or RETREAT"
        );
    }
}
