//! Randomized territory selection.
//!
//! The spinner never owns the selection. It reports choices through a
//! [`SelectionSink`] and the host feeds the current selection back in when
//! it asks for the [`SpinnerPhase`]. Disallowed actions are silent no-ops.

pub mod plan;
pub mod timer;

pub use plan::{tick_delay, SpinPlan};
pub use timer::{SpinEvent, SpinTimer};

use crate::domain::{find_territory, Territory};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc::error::TryRecvError;

/// Receives the spinner's choices. An empty id clears the selection.
pub trait SelectionSink {
    fn on_select(&mut self, id: &str);
}

impl<F: FnMut(&str)> SelectionSink for F {
    fn on_select(&mut self, id: &str) {
        self(id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerPhase {
    Idle,
    Spinning,
    Settled,
}

#[derive(Debug)]
pub struct TerritorySpinner {
    spinning: bool,
    display_name: Option<String>,
    rng: StdRng,
    timer: Option<SpinTimer>,
}

impl TerritorySpinner {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic rolls, for tests and `--seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            spinning: false,
            display_name: None,
            rng,
            timer: None,
        }
    }

    pub const fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Name shown by the most recent tick of the running spin.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn phase(&self, items: &[Territory], selected_id: &str) -> SpinnerPhase {
        if self.spinning {
            SpinnerPhase::Spinning
        } else if find_territory(items, selected_id).is_some() {
            SpinnerPhase::Settled
        } else {
            SpinnerPhase::Idle
        }
    }

    /// Starts a spin. Returns `false` without side effects when `items` is
    /// empty, the spinner is disabled, or a spin is already running.
    pub fn spin(&mut self, items: &[Territory], disabled: bool) -> bool {
        if disabled || self.spinning {
            return false;
        }

        let Some(plan) = SpinPlan::roll(items, &mut self.rng) else {
            return false;
        };

        self.stop_timer();
        tracing::debug!(ticks = plan.frames.len(), settles_in = ?plan.duration(), "spin started");

        self.timer = Some(SpinTimer::start(plan));
        self.spinning = true;
        self.display_name = None;
        true
    }

    /// Manual choice that skips the animation.
    pub fn pick<S: SelectionSink + ?Sized>(
        &mut self,
        items: &[Territory],
        id: &str,
        disabled: bool,
        sink: &mut S,
    ) -> bool {
        if disabled || self.spinning || find_territory(items, id).is_none() {
            return false;
        }

        sink.on_select(id);
        true
    }

    /// Clears the host's selection so the spinner is idle again.
    pub fn change<S: SelectionSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.spinning {
            return false;
        }

        sink.on_select("");
        true
    }

    /// Applies every timer event that is already due. Returns the settled id
    /// if this call completed the spin.
    pub fn poll<S: SelectionSink + ?Sized>(&mut self, sink: &mut S) -> Option<String> {
        loop {
            let timer = self.timer.as_mut()?;

            match timer.try_next() {
                Ok(event) => {
                    if let Some(id) = self.apply(event, sink) {
                        return Some(id);
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    self.cancel();
                    return None;
                }
            }
        }
    }

    /// Waits for the running spin to settle. `None` if nothing is spinning.
    pub async fn settle<S: SelectionSink + ?Sized>(&mut self, sink: &mut S) -> Option<String> {
        loop {
            let event = self.timer.as_mut()?.next().await;

            match event {
                Some(event) => {
                    if let Some(id) = self.apply(event, sink) {
                        return Some(id);
                    }
                }
                None => {
                    self.cancel();
                    return None;
                }
            }
        }
    }

    /// Abandons a running spin without selecting anything.
    pub fn cancel(&mut self) {
        self.stop_timer();
        self.spinning = false;
        self.display_name = None;
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn apply<S: SelectionSink + ?Sized>(&mut self, event: SpinEvent, sink: &mut S) -> Option<String> {
        match event {
            SpinEvent::Tick { name } => {
                self.display_name = Some(name);
                None
            }
            SpinEvent::Settle { id } => {
                self.cancel();
                tracing::debug!(%id, "spin settled");
                sink.on_select(&id);
                Some(id)
            }
        }
    }
}

impl Default for TerritorySpinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::territory;
    use std::time::Duration;
    use tokio::time::Instant;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl SelectionSink for Recorder {
        fn on_select(&mut self, id: &str) {
            self.0.push(id.to_string());
        }
    }

    fn roster() -> Vec<Territory> {
        vec![
            territory("richmond", "Richmond"),
            territory("vicksburg", "Vicksburg"),
            territory("atlanta", "Atlanta"),
            territory("chattanooga", "Chattanooga"),
        ]
    }

    #[tokio::test]
    async fn guarded_spins_change_nothing() {
        let mut spinner = TerritorySpinner::with_seed(1);
        let mut sink = Recorder::default();

        assert!(!spinner.spin(&[], false));
        assert!(!spinner.spin(&roster(), true));
        assert!(!spinner.is_spinning());
        assert_eq!(spinner.phase(&roster(), ""), SpinnerPhase::Idle);
        assert_eq!(spinner.poll(&mut sink), None);
        assert!(sink.0.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn second_spin_while_spinning_is_ignored() {
        let items = roster();
        let mut spinner = TerritorySpinner::with_seed(2);
        let mut sink = Recorder::default();

        assert!(spinner.spin(&items, false));
        tokio::time::sleep(Duration::from_millis(300)).await;
        let shown = {
            spinner.poll(&mut sink);
            spinner.display_name().map(ToString::to_string)
        };

        assert!(!spinner.spin(&items, false));
        assert_eq!(spinner.display_name().map(ToString::to_string), shown);

        assert!(spinner.settle(&mut sink).await.is_some());
        assert_eq!(sink.0.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_spin_selects_exactly_one_listed_id() {
        let items = roster();

        for seed in 0..20 {
            let mut spinner = TerritorySpinner::with_seed(seed);
            let mut sink = Recorder::default();
            let start = Instant::now();

            assert!(spinner.spin(&items, false));
            assert_eq!(spinner.phase(&items, ""), SpinnerPhase::Spinning);

            let settled = spinner.settle(&mut sink).await;
            let elapsed = start.elapsed();

            assert_eq!(sink.0.len(), 1);
            let id = &sink.0[0];
            assert_eq!(settled.as_ref(), Some(id));
            assert!(items.iter().any(|t| &t.id == id), "{id} is not in the roster");
            assert!(elapsed >= Duration::from_millis(1_950), "{elapsed:?}");
            assert!(elapsed <= Duration::from_millis(3_480), "{elapsed:?}");

            assert!(!spinner.is_spinning());
            assert_eq!(spinner.display_name(), None);
            assert_eq!(spinner.phase(&items, id), SpinnerPhase::Settled);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_update_the_display_before_settling() {
        let items = roster();
        let mut spinner = TerritorySpinner::with_seed(5);
        let mut sink = Recorder::default();

        spinner.spin(&items, false);
        assert_eq!(spinner.display_name(), None);

        tokio::time::sleep(Duration::from_millis(51)).await;
        assert_eq!(spinner.poll(&mut sink), None);

        let shown = spinner.display_name().unwrap_or_default();
        assert!(items.iter().any(|t| t.name == shown));
        assert!(spinner.is_spinning());
        assert!(sink.0.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn polling_after_the_deadline_settles() {
        let items = roster();
        let mut spinner = TerritorySpinner::with_seed(9);
        let mut sink = Recorder::default();

        spinner.spin(&items, false);
        tokio::time::sleep(Duration::from_secs(4)).await;

        let settled = spinner.poll(&mut sink);
        assert!(settled.is_some());
        assert_eq!(sink.0.len(), 1);
        assert_eq!(spinner.poll(&mut sink), None);
        assert_eq!(sink.0.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_spin_never_selects() {
        let items = roster();
        let mut spinner = TerritorySpinner::with_seed(3);
        let mut sink = Recorder::default();

        spinner.spin(&items, false);
        tokio::time::sleep(Duration::from_millis(400)).await;
        spinner.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(spinner.poll(&mut sink), None);
        assert!(sink.0.is_empty());
        assert_eq!(spinner.phase(&items, ""), SpinnerPhase::Idle);

        assert!(spinner.spin(&items, false));
    }

    /// Spins in a detached task whose sink forwards every selection.
    fn spawn_spin(
        items: Vec<Territory>,
        seed: u64,
    ) -> (
        tokio::task::JoinHandle<()>,
        tokio::sync::mpsc::UnboundedReceiver<String>,
    ) {
        let (picks, received) = tokio::sync::mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut spinner = TerritorySpinner::with_seed(seed);
            let mut sink = move |id: &str| {
                let _ = picks.send(id.to_string());
            };
            spinner.spin(&items, false);
            spinner.settle(&mut sink).await;
        });
        (task, received)
    }

    #[tokio::test(start_paused = true)]
    async fn undisturbed_detached_spin_selects_once() {
        let (task, mut received) = spawn_spin(roster(), 4);

        let picked = received.recv().await;
        assert!(picked.is_some_and(|id| roster().iter().any(|t| t.id == id)));
        assert!(task.await.is_ok());
        assert_eq!(received.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn spinner_dropped_mid_spin_never_selects() {
        let (task, mut received) = spawn_spin(roster(), 4);

        tokio::time::sleep(Duration::from_millis(400)).await;
        task.abort();
        assert!(task.await.is_err_and(|e| e.is_cancelled()));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(received.recv().await, None);
    }

    #[tokio::test]
    async fn manual_pick_bypasses_the_animation() {
        let items = roster();
        let mut spinner = TerritorySpinner::with_seed(6);
        let mut sink = Recorder::default();

        assert!(!spinner.pick(&items, "gettysburg", false, &mut sink));
        assert!(!spinner.pick(&items, "atlanta", true, &mut sink));
        assert!(spinner.pick(&items, "atlanta", false, &mut sink));

        assert_eq!(sink.0, ["atlanta"]);
        assert!(!spinner.is_spinning());
        assert_eq!(spinner.phase(&items, "atlanta"), SpinnerPhase::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn pick_and_change_are_ignored_while_spinning() {
        let items = roster();
        let mut spinner = TerritorySpinner::with_seed(7);
        let mut sink = Recorder::default();

        spinner.spin(&items, false);
        assert!(!spinner.pick(&items, "atlanta", false, &mut sink));
        assert!(!spinner.change(&mut sink));
        assert!(sink.0.is_empty());

        spinner.settle(&mut sink).await;
        assert!(spinner.change(&mut sink));
        assert_eq!(sink.0.len(), 2);
        assert_eq!(sink.0[1], "");
    }
}
