use crate::domain::Territory;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Delay before the first tick, in milliseconds.
pub const BASE_TICK_MS: u64 = 50;
/// Added to the delay after every tick, so the spin visibly slows down.
pub const TICK_STEP_MS: u64 = 5;
/// Number of ticks before a spin settles.
pub const TICK_COUNT: RangeInclusive<usize> = 20..=29;

/// Delay before the next tick once `ticks_fired` ticks have already fired.
pub fn tick_delay(ticks_fired: usize) -> Duration {
    let step = u64::try_from(ticks_fired).unwrap_or(u64::MAX);
    Duration::from_millis(BASE_TICK_MS.saturating_add(TICK_STEP_MS.saturating_mul(step)))
}

/// Every random draw of one spin, taken up front from the item snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinPlan {
    /// Names shown tick by tick.
    pub frames: Vec<String>,
    /// Id handed to the selection sink when the spin settles.
    pub winner: String,
}

impl SpinPlan {
    /// `None` when there is nothing to spin over.
    pub fn roll<R: Rng>(items: &[Territory], rng: &mut R) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let ticks = rng.random_range(TICK_COUNT);
        let frames = (0..ticks)
            .map(|_| items[rng.random_range(0..items.len())].name.clone())
            .collect();
        let winner = items[rng.random_range(0..items.len())].id.clone();

        Some(Self { frames, winner })
    }

    /// Time from spin start until the spin settles.
    pub fn duration(&self) -> Duration {
        (0..self.frames.len()).map(tick_delay).sum()
    }
}
