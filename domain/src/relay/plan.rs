//! Relay fan-out planning
//!
//! Computes which message each peer receives when a general forwards a
//! report. The plan is pure: delivering it over channels is the actor's job.

use super::message::Message;
use crate::core::GeneralId;
use crate::roster::Loyalty;

/// One message addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub to: GeneralId,
    pub message: Message,
}

/// The complete set of deliveries for one relay step.
///
/// # Example
///
/// ```
/// use byzgen_domain::{Loyalty, Message, Order, RelayPlan};
///
/// // A traitorous commander of four generals lies to the even-numbered peer.
/// let plan = RelayPlan::build(0, Loyalty::Traitor, &Message::initial(Order::Attack, 1), 4);
/// let orders: Vec<_> = plan.deliveries().iter().map(|d| (d.to, d.message.order())).collect();
/// assert_eq!(
///     orders,
///     vec![(1, Order::Attack), (2, Order::Retreat), (3, Order::Attack)]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayPlan {
    deliveries: Vec<Delivery>,
}

impl RelayPlan {
    /// Plan the relay of `received` by general `relayer` among `generals` participants.
    ///
    /// Recipients are every general not on the extended path, in ascending id
    /// order. A loyal relayer forwards the order unchanged. A traitor sends the
    /// flipped order to even ids and the true order to odd ids.
    pub fn build(
        relayer: GeneralId,
        loyalty: Loyalty,
        received: &Message,
        generals: usize,
    ) -> Self {
        let truthful = received.relayed_by(relayer, received.order());
        let flipped = received.relayed_by(relayer, received.order().flip());

        let deliveries = (0..generals)
            .filter(|id| !truthful.has_visited(*id))
            .map(|to| {
                let message = match loyalty {
                    Loyalty::Loyal => truthful.clone(),
                    Loyalty::Traitor if to % 2 == 0 => flipped.clone(),
                    Loyalty::Traitor => truthful.clone(),
                };
                Delivery { to, message }
            })
            .collect();

        Self { deliveries }
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Recipients in delivery order.
    pub fn recipients(&self) -> impl Iterator<Item = GeneralId> + '_ {
        self.deliveries.iter().map(|d| d.to)
    }

    /// Whether different recipients were told different orders.
    pub fn is_inconsistent(&self) -> bool {
        let mut orders = self.deliveries.iter().map(|d| d.message.order());
        match orders.next() {
            Some(first) => orders.any(|o| o != first),
            None => false,
        }
    }
}

impl IntoIterator for RelayPlan {
    type Item = Delivery;
    type IntoIter = std::vec::IntoIter<Delivery>;

    fn into_iter(self) -> Self::IntoIter {
        self.deliveries.into_iter()
    }
}
