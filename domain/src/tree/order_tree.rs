//! Per-general report tree

use super::node::OrderNode;
use super::rule::SelfVote;
use crate::core::GeneralId;
use crate::core::order::Order;

/// All reports one general has received, plus how many arrived.
///
/// The first hop of every relay path is the commander, so [`OrderTree::insert`]
/// strips it: the direct report lands on the root, and each further hop is a
/// child level.
///
/// # Example
///
/// ```
/// use byzgen_domain::{Order, OrderTree, SelfVote};
///
/// // Lieutenant 1 of four in OM(1): the commander says ATTACK,
/// // lieutenant 2 relays ATTACK, lieutenant 3 relays RETREAT.
/// let mut tree = OrderTree::new(SelfVote::Counted);
/// tree.insert(Order::Attack, &[0]);
/// tree.insert(Order::Attack, &[0, 2]);
/// tree.insert(Order::Retreat, &[0, 3]);
///
/// assert_eq!(tree.report_count(), 3);
/// assert_eq!(tree.majority(), Order::Attack);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderTree {
    root: OrderNode,
    reports: u64,
    rule: SelfVote,
}

impl OrderTree {
    pub fn new(rule: SelfVote) -> Self {
        Self {
            root: OrderNode::new(),
            reports: 0,
            rule,
        }
    }

    /// Record a report that travelled `path` (commander first).
    ///
    /// Always counts as one report, even if it overwrites an earlier value.
    pub fn insert(&mut self, order: Order, path: &[GeneralId]) {
        let tail = path.get(1..).unwrap_or_default();
        self.root.insert(order, tail);
        self.reports += 1;
    }

    /// Reports inserted so far. A completeness signal, not the node count.
    pub fn report_count(&self) -> u64 {
        self.reports
    }

    pub fn root(&self) -> &OrderNode {
        &self.root
    }

    /// The OM(m) decision: bottom-up majority, RETREAT when nothing resolves.
    pub fn majority(&self) -> Order {
        self.root.resolve(self.rule).unwrap_or(Order::Retreat)
    }
}
