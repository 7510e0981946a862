//! Run Simulation use case
//!
//! Wires one [`General`] task per participant together with unbounded
//! channels, hands the initial order to the commander and waits until every
//! general has decided.

mod general;
mod types;

pub use types::{RunSimulationInput, SimulationError};

use crate::ports::progress::{DecisionNotifier, NoProgress};
use crate::ports::relay_observer::{NoRelayObserver, RelayEvent, RelayObserver};
use byzgen_domain::{
    COMMANDER_ID, ExpectedCount, Message, SimulationIssue, SimulationReport,
};
use general::General;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Use case for running one OM(m) simulation
#[derive(Clone)]
pub struct RunSimulationUseCase {
    observer: Arc<dyn RelayObserver>,
}

impl Default for RunSimulationUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSimulationUseCase {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoRelayObserver),
        }
    }

    /// Record every relay event to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn RelayObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Execute the use case without progress callbacks
    pub async fn execute(
        &self,
        input: RunSimulationInput,
    ) -> Result<SimulationReport, SimulationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case, reporting each decision as its general finishes
    pub async fn execute_with_progress(
        &self,
        input: RunSimulationInput,
        progress: &dyn DecisionNotifier,
    ) -> Result<SimulationReport, SimulationError> {
        let generals = input.generals();
        let expected = ExpectedCount::compute(generals, input.rounds)?;

        let issues = SimulationIssue::check(&input.roster, input.rounds);
        for issue in &issues {
            warn!("{}", issue);
        }

        info!(
            "Starting OM({}) with {} generals ({} traitors), order {}, {} reports per lieutenant",
            input.rounds,
            generals,
            input.roster.traitor_count(),
            input.order,
            expected
        );
        self.observer.record(RelayEvent::SimulationStarted {
            generals,
            rounds: input.rounds,
            order: input.order,
            expected_count: expected.get(),
        });

        let (senders, receivers): (Vec<_>, Vec<_>) =
            (0..generals).map(|_| mpsc::unbounded_channel()).unzip();

        let mut join_set = JoinSet::new();
        for ((id, loyalty), inbox) in input.roster.iter().zip(receivers) {
            let general = General::new(
                id,
                loyalty,
                inbox,
                senders.clone(),
                expected,
                input.params.self_vote,
                Arc::clone(&self.observer),
            );
            join_set.spawn(general.run());
        }
        progress.on_simulation_start(generals, expected.get());

        senders[COMMANDER_ID]
            .send(Message::initial(input.order, input.rounds))
            .map_err(|_| SimulationError::ChannelClosed { to: COMMANDER_ID })?;
        drop(senders);

        let mut decisions = Vec::with_capacity(generals);
        while let Some(joined) = join_set.join_next().await {
            let decision = joined??;
            progress.on_decision(&decision);
            decisions.push(decision);
        }

        let report = SimulationReport::new(
            generals,
            input.rounds,
            input.order,
            expected.get(),
            decisions,
        )
        .with_self_vote(input.params.self_vote)
        .with_issues(issues);

        let agreement = report.loyal_agreement();
        info!(
            "All {} generals decided; loyal agreement: {}",
            generals,
            agreement.map_or_else(|| "none".to_string(), |o| o.to_string())
        );
        self.observer.record(RelayEvent::SimulationFinished {
            agreement,
            valid: report.is_valid(),
        });
        progress.on_simulation_complete(&report);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationParams;
    use byzgen_domain::{Decision, DomainError, Loyalty, Order, Roster, SelfVote};
    use std::sync::Mutex;
    use std::time::Duration;

    const LIVENESS_BOUND: Duration = Duration::from_secs(10);

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<RelayEvent>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<RelayEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl RelayObserver for RecordingObserver {
        fn record(&self, event: RelayEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        started: Mutex<Option<(usize, u64)>>,
        decisions: Mutex<Vec<Decision>>,
        completed: Mutex<bool>,
    }

    impl DecisionNotifier for RecordingProgress {
        fn on_simulation_start(&self, generals: usize, expected_count: u64) {
            *self.started.lock().unwrap() = Some((generals, expected_count));
        }

        fn on_decision(&self, decision: &Decision) {
            self.decisions.lock().unwrap().push(*decision);
        }

        fn on_simulation_complete(&self, _report: &SimulationReport) {
            *self.completed.lock().unwrap() = true;
        }
    }

    async fn simulate(loyalty: &str, order: Order, rounds: usize) -> SimulationReport {
        simulate_with(loyalty, order, rounds, SelfVote::Counted).await
    }

    async fn simulate_with(
        loyalty: &str,
        order: Order,
        rounds: usize,
        self_vote: SelfVote,
    ) -> SimulationReport {
        let input = RunSimulationInput {
            params: SimulationParams::default().with_self_vote(self_vote),
            ..RunSimulationInput::new(Roster::parse(loyalty).unwrap(), order, rounds)
        };
        tokio::time::timeout(LIVENESS_BOUND, RunSimulationUseCase::new().execute(input))
            .await
            .expect("simulation did not terminate")
            .unwrap()
    }

    // ==================== Liveness ====================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_every_general_decides() {
        let cases = [
            ("L", 0),
            ("L", 2),
            ("LL", 1),
            ("LLT", 1),
            ("LLLL", 0),
            ("LLLL", 3),
            ("TLTL", 2),
            ("LLLLL", 2),
            ("LTLLLT", 3),
            ("LLTLTLL", 2),
        ];
        for (loyalty, rounds) in cases {
            for order in [Order::Attack, Order::Retreat] {
                let report = simulate(loyalty, order, rounds).await;
                assert!(
                    report.is_complete(),
                    "{loyalty} m={rounds}: {:?}",
                    report.decisions
                );
            }
        }
    }

    #[tokio::test]
    async fn test_single_general_obeys_itself() {
        let report = simulate("T", Order::Retreat, 1).await;
        assert_eq!(report.expected_count, 1);
        assert_eq!(
            report.decisions,
            vec![Decision::new(0, Loyalty::Traitor, Order::Retreat)]
        );
    }

    // ==================== Scenarios ====================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_tolerable_fault_loyal_lieutenants_attack() {
        for loyalty in ["LTLL", "LLTL", "LLLT"] {
            let report = simulate(loyalty, Order::Attack, 1).await;
            assert_eq!(report.expected_count, 3);
            assert_eq!(report.loyal_agreement(), Some(Order::Attack), "{loyalty}");
            assert!(report.is_valid());
            assert!(report.issues.is_empty());
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_tolerable_fault_with_retreat_order() {
        for loyalty in ["LTLL", "LLTL", "LLLT"] {
            let report = simulate(loyalty, Order::Retreat, 1).await;
            assert_eq!(report.loyal_agreement(), Some(Order::Retreat), "{loyalty}");
        }
    }

    #[tokio::test]
    async fn test_below_threshold_only_terminates() {
        for loyalty in ["LLT", "LTL", "TLL"] {
            let report = simulate(loyalty, Order::Attack, 1).await;
            assert!(report.is_complete());
            assert_eq!(report.issues.len(), 1);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_traitorous_commander_lies_by_parity_at_first_hop() {
        let observer = Arc::new(RecordingObserver::default());
        let use_case = RunSimulationUseCase::new().with_observer(observer.clone());
        let input = RunSimulationInput::new(Roster::parse("TLLL").unwrap(), Order::Attack, 1);

        let report = tokio::time::timeout(LIVENESS_BOUND, use_case.execute(input))
            .await
            .unwrap()
            .unwrap();

        let first_hop: Vec<_> = observer
            .events()
            .into_iter()
            .filter_map(|e| match e {
                RelayEvent::MessageSent { from: 0, to, order, path, .. } => {
                    Some((to, order, path))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            first_hop,
            vec![
                (1, Order::Attack, vec![0]),
                (2, Order::Retreat, vec![0]),
                (3, Order::Attack, vec![0]),
            ]
        );

        assert!(report.loyal_agreement().is_some());
        assert_eq!(report.traitor_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_om2_tolerates_two_traitors() {
        for loyalty in ["LTTLLLL", "LLLLLTT", "LTLTLLL", "TLLLLLT", "TTLLLLL"] {
            for order in [Order::Attack, Order::Retreat] {
                let report = simulate(loyalty, order, 2).await;
                assert_eq!(report.expected_count, 26);
                assert!(report.loyal_agreement().is_some(), "{loyalty} {order}");
                assert!(report.is_valid(), "{loyalty} {order}");
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_loyal_run_is_unanimous_under_both_rules() {
        for self_vote in [SelfVote::Counted, SelfVote::Excluded] {
            let report = simulate_with("LLLLL", Order::Attack, 2, self_vote).await;
            assert_eq!(report.self_vote, self_vote);
            assert!(report.decisions.iter().all(|d| d.action == Order::Attack));
        }
    }

    // ==================== Ports ====================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_progress_sees_every_decision() {
        let progress = RecordingProgress::default();
        let input = RunSimulationInput::new(Roster::parse("LLLT").unwrap(), Order::Attack, 1);

        let report = RunSimulationUseCase::new()
            .execute_with_progress(input, &progress)
            .await
            .unwrap();

        assert_eq!(*progress.started.lock().unwrap(), Some((4, 3)));
        assert!(*progress.completed.lock().unwrap());

        let mut seen = progress.decisions.lock().unwrap().clone();
        seen.sort_by_key(|d| d.general);
        assert_eq!(seen, report.decisions);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_transcript_counts_match_expected() {
        let observer = Arc::new(RecordingObserver::default());
        let use_case = RunSimulationUseCase::new().with_observer(observer.clone());
        let input = RunSimulationInput::new(Roster::parse("LLLLL").unwrap(), Order::Attack, 2);
        use_case.execute(input).await.unwrap();

        let events = observer.events();
        for general in 1..5 {
            let filed = events
                .iter()
                .filter(|e| matches!(e, RelayEvent::ReportFiled { general: g, .. } if *g == general))
                .count();
            assert_eq!(filed, 10, "general {general}");
        }
        assert!(matches!(
            events.first(),
            Some(RelayEvent::SimulationStarted { expected_count: 10, .. })
        ));
        assert!(matches!(
            events.last(),
            Some(RelayEvent::SimulationFinished {
                agreement: Some(Order::Attack),
                valid: true
            })
        ));
    }

    #[tokio::test]
    async fn test_overflowing_expected_count_fails_fast() {
        let loyalty = "L".repeat(40);
        let input = RunSimulationInput::new(Roster::parse(&loyalty).unwrap(), Order::Attack, 30);
        let err = RunSimulationUseCase::new().execute(input).await.unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidInput(DomainError::ExpectedCountOverflow { .. })
        ));
    }
}
