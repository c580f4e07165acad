use std::time::{Duration, Instant};

use crate::core::bounds::BoundsOriginRoot;
use crate::core::grid::Grid;
use crate::core::models::ReplayTick;

/// Re-enacts a recorded path one swap per delay. The task is live until
/// `advance` reports `Finished`.
#[derive(Clone, Debug)]
pub struct ReplayTask {
    path: Vec<usize>,
    next_step: usize,
    delay: Duration,
    due: Instant,
    selected: usize,
}

impl ReplayTask {
    /// The caller restores the snapshot; the first swap is due one delay later.
    pub fn new(path: Vec<usize>, delay: Duration, now: Instant) -> Self {
        let selected = path[0];
        ReplayTask {
            path,
            next_step: 1,
            delay,
            due: now + delay,
            selected,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn remaining_steps(&self) -> usize {
        self.path.len().saturating_sub(self.next_step)
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    /// Performs at most one swap if it is due. After the last swap the task
    /// waits one more delay before finishing.
    pub fn advance(&mut self, grid: &mut Grid, bounds: &BoundsOriginRoot, now: Instant) -> ReplayTick {
        if now < self.due {
            return ReplayTick::Waiting;
        }

        if self.next_step >= self.path.len() {
            return ReplayTick::Finished;
        }

        let prev = self.path[self.next_step - 1];
        let next = self.path[self.next_step];
        if !bounds.is_neighbor(prev, next) {
            tracing::warn!(prev, next, step = self.next_step, "replay path is not adjacent, stopping early");
            self.next_step = self.path.len();
            return ReplayTick::Finished;
        }

        grid.swap(prev, next);
        self.selected = next;
        self.next_step += 1;
        self.due = now + self.delay;
        tracing::debug!(prev, next, remaining = self.remaining_steps(), "replay step");
        ReplayTick::Stepped { index: next }
    }
}
