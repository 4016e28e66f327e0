use super::plan::{tick_delay, SpinPlan};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinEvent {
    Tick { name: String },
    Settle { id: String },
}

/// Replays a [`SpinPlan`] on a re-armed timer.
///
/// Each tick sleeps for [`tick_delay`] of the ticks already fired, so the
/// cadence slows as the spin goes on. The task is aborted when the timer is
/// cancelled or dropped; no event is delivered after that.
#[derive(Debug)]
pub struct SpinTimer {
    task: JoinHandle<()>,
    events: UnboundedReceiver<SpinEvent>,
}

impl SpinTimer {
    /// Must be called from within a tokio runtime.
    pub fn start(plan: SpinPlan) -> Self {
        let (sender, events) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let SpinPlan { frames, winner } = plan;

            for (fired, name) in frames.into_iter().enumerate() {
                tokio::time::sleep(tick_delay(fired)).await;
                if sender.send(SpinEvent::Tick { name }).is_err() {
                    return;
                }
            }

            if sender.send(SpinEvent::Settle { id: winner }).is_err() {
                tracing::debug!("spin settled after its listener went away");
            }
        });

        Self { task, events }
    }

    pub fn try_next(&mut self) -> Result<SpinEvent, TryRecvError> {
        self.events.try_recv()
    }

    /// `None` once the plan has been fully delivered or the task is gone.
    pub async fn next(&mut self) -> Option<SpinEvent> {
        self.events.recv().await
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    #[cfg(test)]
    fn abort_handle(&self) -> tokio::task::AbortHandle {
        self.task.abort_handle()
    }
}

impl Drop for SpinTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn plan(frames: &[&str], winner: &str) -> SpinPlan {
        SpinPlan {
            frames: frames.iter().map(ToString::to_string).collect(),
            winner: winner.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_on_a_lengthening_schedule() {
        let mut timer = SpinTimer::start(plan(&["Atlanta", "Mobile", "Nashville"], "mobile"));
        let start = Instant::now();

        let expected = [
            (SpinEvent::Tick { name: "Atlanta".to_string() }, 50),
            (SpinEvent::Tick { name: "Mobile".to_string() }, 105),
            (SpinEvent::Tick { name: "Nashville".to_string() }, 165),
            (SpinEvent::Settle { id: "mobile".to_string() }, 165),
        ];

        for (event, at_ms) in expected {
            assert_eq!(timer.next().await, Some(event));
            assert_eq!(start.elapsed(), Duration::from_millis(at_ms));
        }

        assert_eq!(timer.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_arrives_before_the_first_delay() {
        let mut timer = SpinTimer::start(plan(&["Atlanta"], "atlanta"));

        tokio::time::sleep(Duration::from_millis(49)).await;
        assert!(matches!(timer.try_next(), Err(TryRecvError::Empty)));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            timer.try_next().ok(),
            Some(SpinEvent::Tick {
                name: "Atlanta".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_aborts_the_task() {
        let timer = SpinTimer::start(plan(&["Atlanta"; 25], "atlanta"));
        let handle = timer.abort_handle();

        tokio::time::sleep(Duration::from_millis(120)).await;
        drop(timer);

        for _ in 0..10 {
            if handle.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_closes_the_event_stream() {
        let mut timer = SpinTimer::start(plan(&["Atlanta"; 25], "atlanta"));

        assert!(timer.next().await.is_some());
        timer.cancel();

        assert_eq!(timer.next().await, None);
    }
}
