//! Order value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The binary command the commander issues and every general decides on.
///
/// # Example
///
/// ```
/// use byzgen_domain::Order;
///
/// let order: Order = "attack".parse().unwrap();
/// assert_eq!(order, Order::Attack);
/// assert_eq!(order.flip(), Order::Retreat);
/// assert_eq!(order.to_string(), "ATTACK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    Attack,
    Retreat,
}

impl Order {
    /// The opposite order. Applying it twice yields the original.
    pub fn flip(self) -> Self {
        match self {
            Order::Attack => Order::Retreat,
            Order::Retreat => Order::Attack,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Attack => "ATTACK",
            Order::Retreat => "RETREAT",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Order {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ATTACK" => Ok(Order::Attack),
            "RETREAT" => Ok(Order::Retreat),
            _ => Err(DomainError::InvalidOrder(s.to_string())),
        }
    }
}
