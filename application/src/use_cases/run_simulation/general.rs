//! General actor
//!
//! One task per participant. A general owns its report tree and the receiving
//! end of its inbox, and holds a sender to every inbox (its own included).
//!
//! ```text
//! commander:   receive once ─▶ file ─▶ relay ─▶ decide
//! lieutenant:  ┌─▶ receive ─▶ file ─▶ relay if rounds remain ─┐
//!              └──────────── until expected reached ◀────────┘ ─▶ decide
//! ```

use super::types::SimulationError;
use crate::ports::relay_observer::{RelayEvent, RelayObserver};
use byzgen_domain::{
    COMMANDER_ID, Decision, ExpectedCount, GeneralId, Loyalty, Message, OrderTree, RelayPlan,
    SelfVote,
};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

pub(crate) struct General {
    id: GeneralId,
    loyalty: Loyalty,
    tree: OrderTree,
    inbox: UnboundedReceiver<Message>,
    peers: Vec<UnboundedSender<Message>>,
    expected: ExpectedCount,
    observer: Arc<dyn RelayObserver>,
}

impl General {
    pub(crate) fn new(
        id: GeneralId,
        loyalty: Loyalty,
        inbox: UnboundedReceiver<Message>,
        peers: Vec<UnboundedSender<Message>>,
        expected: ExpectedCount,
        self_vote: SelfVote,
        observer: Arc<dyn RelayObserver>,
    ) -> Self {
        Self {
            id,
            loyalty,
            tree: OrderTree::new(self_vote),
            inbox,
            peers,
            expected,
            observer,
        }
    }

    /// Run until this general's decision rule fires.
    pub(crate) async fn run(mut self) -> Result<Decision, SimulationError> {
        if self.id == COMMANDER_ID {
            self.command().await
        } else {
            self.serve().await
        }
    }

    /// The commander hears the order once, passes it on and obeys its own tree.
    async fn command(&mut self) -> Result<Decision, SimulationError> {
        let msg = self.receive().await?;
        self.file(&msg);
        self.relay(&msg)?;
        Ok(self.decide())
    }

    /// A lieutenant keeps filing and relaying until its tree is complete.
    async fn serve(&mut self) -> Result<Decision, SimulationError> {
        while !self.expected.is_reached_by(self.tree.report_count()) {
            let msg = self.receive().await?;
            self.file(&msg);
            if msg.should_relay() {
                self.relay(&msg)?;
            }
        }
        Ok(self.decide())
    }

    async fn receive(&mut self) -> Result<Message, SimulationError> {
        self.inbox
            .recv()
            .await
            .ok_or(SimulationError::InboxClosed {
                general: self.id,
                received: self.tree.report_count(),
                expected: self.expected.get(),
            })
    }

    fn file(&mut self, msg: &Message) {
        self.tree.insert(msg.order(), msg.path());
        let report_count = self.tree.report_count();
        trace!(
            "General {} filed {} via {:?} ({}/{})",
            self.id,
            msg.order(),
            msg.path(),
            report_count,
            self.expected
        );
        self.observer.record(RelayEvent::ReportFiled {
            general: self.id,
            order: msg.order(),
            path: msg.path().to_vec(),
            report_count,
        });
    }

    fn relay(&self, msg: &Message) -> Result<(), SimulationError> {
        let plan = RelayPlan::build(self.id, self.loyalty, msg, self.peers.len());
        debug!(
            "{} general {} relays {:?} to {} peers{}",
            self.loyalty,
            self.id,
            msg.path(),
            plan.len(),
            if plan.is_inconsistent() {
                " (inconsistently)"
            } else {
                ""
            }
        );

        for delivery in plan {
            self.observer.record(RelayEvent::MessageSent {
                from: self.id,
                to: delivery.to,
                order: delivery.message.order(),
                path: delivery.message.path().to_vec(),
                recursion_level: delivery.message.recursion_level(),
            });
            self.peers[delivery.to]
                .send(delivery.message)
                .map_err(|_| SimulationError::ChannelClosed { to: delivery.to })?;
        }
        Ok(())
    }

    fn decide(&self) -> Decision {
        let action = self.tree.majority();
        debug!(
            "{} general {} decided {} after {} reports",
            self.loyalty,
            self.id,
            action,
            self.tree.report_count()
        );
        self.observer.record(RelayEvent::GeneralDecided {
            general: self.id,
            loyalty: self.loyalty,
            action,
        });
        Decision::new(self.id, self.loyalty, action)
    }
}
