//! Relay message value object

use crate::core::GeneralId;
use crate::core::order::Order;
use serde::{Deserialize, Serialize};

/// A report passed between generals (Value Object)
///
/// `path` lists every general that has already relayed this report, starting
/// with the commander. `recursion_level` counts the relay rounds still allowed.
/// Messages are never mutated: each relay hop produces a fresh one via
/// [`Message::relayed_by`].
///
/// # Example
///
/// ```
/// use byzgen_domain::{Message, Order};
///
/// let initial = Message::initial(Order::Attack, 1);
/// assert!(initial.path().is_empty());
/// assert_eq!(initial.recursion_level(), 2);
///
/// let hop = initial.relayed_by(0, Order::Attack);
/// assert_eq!(hop.path(), &[0]);
/// assert_eq!(hop.recursion_level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    order: Order,
    path: Vec<GeneralId>,
    recursion_level: usize,
}

impl Message {
    pub fn new(order: Order, path: Vec<GeneralId>, recursion_level: usize) -> Self {
        Self {
            order,
            path,
            recursion_level,
        }
    }

    /// The message the orchestrator hands to the commander for OM(`rounds`).
    pub fn initial(order: Order, rounds: usize) -> Self {
        Self::new(order, Vec::new(), rounds + 1)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn path(&self) -> &[GeneralId] {
        &self.path
    }

    pub fn recursion_level(&self) -> usize {
        self.recursion_level
    }

    /// Whether `id` already relayed this message.
    pub fn has_visited(&self, id: GeneralId) -> bool {
        self.path.contains(&id)
    }

    /// Whether the receiver still has to forward this message.
    pub fn should_relay(&self) -> bool {
        self.recursion_level > 0
    }

    /// Build the next hop: `relayer` appended to the path, one round fewer,
    /// carrying `order` (which a traitor may have flipped).
    pub fn relayed_by(&self, relayer: GeneralId, order: Order) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(relayer);

        Self {
            order,
            path,
            recursion_level: self.recursion_level.saturating_sub(1),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} {}",
            self.order, self.path, self.recursion_level
        )
    }
}
