//! Report tree nodes

use super::rule::{SelfVote, VoteTally};
use crate::core::GeneralId;
use crate::core::order::Order;
use std::collections::BTreeMap;

/// The report received along one relay path.
///
/// Each child is keyed by the general that relayed the report one hop further.
/// Children are owned exclusively by their parent; paths never repeat an id,
/// so the structure is a tree by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderNode {
    value: Option<Order>,
    children: BTreeMap<GeneralId, OrderNode>,
}

impl OrderNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report held at this node, if it has arrived yet.
    pub fn value(&self) -> Option<Order> {
        self.value
    }

    pub fn child(&self, id: GeneralId) -> Option<&OrderNode> {
        self.children.get(&id)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Record `order` at the node addressed by `path`, relative to this node.
    ///
    /// Missing intermediate nodes are created unset; they receive their own
    /// value when the report for the shorter path arrives.
    pub fn insert(&mut self, order: Order, path: &[GeneralId]) {
        match path.split_first() {
            None => self.value = Some(order),
            Some((head, tail)) => self.children.entry(*head).or_default().insert(order, tail),
        }
    }

    /// Resolve this subtree bottom-up.
    ///
    /// Children are resolved first; each contributes one vote. The node's own
    /// value votes too under [`SelfVote::Counted`]. Unset values abstain, and a
    /// subtree with no votes at all is unresolved (`None`).
    pub fn resolve(&self, rule: SelfVote) -> Option<Order> {
        if self.is_leaf() {
            return self.value;
        }

        let own = match rule {
            SelfVote::Counted => self.value,
            SelfVote::Excluded => None,
        };

        own.into_iter()
            .chain(self.children.values().filter_map(|c| c.resolve(rule)))
            .collect::<VoteTally>()
            .winner()
    }
}
