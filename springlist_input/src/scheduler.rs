// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling: input coalescing plus fixed-step animation time.
//!
//! ## Contract with the host
//!
//! - Forward raw events to [`Scheduler::push_input`]. When it returns `true`, request one display
//!   callback (e.g. `requestAnimationFrame`).
//! - In that callback, call [`Scheduler::run_frame`] with the callback's timestamp and the tick
//!   logic. When it returns `true`, request another display callback.
//!
//! At most one callback is ever outstanding, so ticks never overlap and events are only applied
//! at the start of a tick.
//!
//! ## Animation time
//!
//! [`AnimationClock`] tracks how much wall-clock time physics has already consumed. Each frame
//! runs `floor((now - animated_until) / ms_per_step)` steps and advances `animated_until` by
//! exactly that many steps, so the fractional remainder carries into the next frame. After an
//! idle period the clock restarts at `now`; there is never a backlog to flush.

use springlist_motion::MS_PER_ANIMATION_STEP;

use crate::event::{InputBatch, InputKinds, InputQueue, RawInput};

/// Converts irregular frame timestamps into whole physics steps.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    ms_per_step: f64,
    animated_until: Option<f64>,
    pending_until: f64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(MS_PER_ANIMATION_STEP)
    }
}

impl AnimationClock {
    /// A clock with the given step size in milliseconds.
    pub fn new(ms_per_step: f64) -> Self {
        debug_assert!(ms_per_step > 0.0, "step size must be positive");
        Self {
            ms_per_step,
            animated_until: None,
            pending_until: 0.0,
        }
    }

    /// Step size in milliseconds.
    pub fn ms_per_step(&self) -> f64 {
        self.ms_per_step
    }

    /// Time already consumed by physics, or `None` while idle.
    pub fn animated_until(&self) -> Option<f64> {
        self.animated_until
    }

    /// Number of whole steps to run for a frame at `now`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Step counts are small, non-negative whole numbers."
    )]
    pub fn begin(&mut self, now: f64) -> u32 {
        let start = self.animated_until.unwrap_or(now);
        let steps = ((now - start) / self.ms_per_step).floor().max(0.0);
        self.pending_until = start + steps * self.ms_per_step;
        steps as u32
    }

    /// Commit the frame started by [`begin`](Self::begin). An idle result forgets the
    /// consumed time so the next frame starts fresh.
    pub fn end(&mut self, still_animating: bool) {
        self.animated_until = still_animating.then_some(self.pending_until);
    }
}

/// What one tick sees.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    /// Display callback timestamp in milliseconds.
    pub now: f64,
    /// Inputs that arrived since the previous tick.
    pub batch: &'a InputBatch,
    /// Physics steps to run this tick.
    pub animation_steps: u32,
    /// Milliseconds each of those steps must integrate. Matches the clock that counted them.
    pub ms_per_step: f64,
}

/// Builder for [`Scheduler`].
#[derive(Clone, Debug)]
pub struct SchedulerBuilder {
    kinds: InputKinds,
    ms_per_step: f64,
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self {
            kinds: InputKinds::all(),
            ms_per_step: MS_PER_ANIMATION_STEP,
        }
    }
}

impl SchedulerBuilder {
    /// Only accept these input kinds.
    pub fn listen(mut self, kinds: InputKinds) -> Self {
        self.kinds = kinds;
        self
    }

    /// Physics step size in milliseconds.
    pub fn ms_per_step(mut self, ms: f64) -> Self {
        self.ms_per_step = ms;
        self
    }

    /// Finish building.
    pub fn build(self) -> Scheduler {
        Scheduler {
            queue: InputQueue::new(self.kinds),
            clock: AnimationClock::new(self.ms_per_step),
            pending: false,
        }
    }
}

/// Owns the pending-frame flag, the input queue and the animation clock.
#[derive(Clone, Debug)]
pub struct Scheduler {
    queue: InputQueue,
    clock: AnimationClock,
    pending: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Scheduler {
    /// Start configuring a scheduler.
    pub fn builder() -> SchedulerBuilder {
        SchedulerBuilder::default()
    }

    /// Whether a display callback is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The animation clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Mark a frame as wanted. Returns `true` if the host must request a display callback,
    /// `false` if one is already outstanding.
    pub fn request_frame(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Queue a raw input and request a frame for it.
    ///
    /// Returns `true` if the host must request a display callback.
    pub fn push_input(&mut self, input: RawInput) -> bool {
        if !self.queue.push(input) {
            return false;
        }
        self.request_frame()
    }

    /// Run one display callback.
    ///
    /// Takes the pending inputs, computes the step count, and hands both to `tick`. The batch is
    /// discarded afterwards whether or not `tick` used it. Returns `true` if the host must
    /// request another display callback.
    pub fn run_frame<F>(&mut self, now: f64, tick: F) -> bool
    where
        F: FnOnce(&FrameContext<'_>) -> bool,
    {
        self.pending = false;
        let animation_steps = self.clock.begin(now);
        let batch = self.queue.take();
        let still_animating = tick(&FrameContext {
            now,
            batch: &batch,
            animation_steps,
            ms_per_step: self.clock.ms_per_step(),
        });
        self.clock.end(still_animating);
        tracing::trace!(now, animation_steps, still_animating, "frame");
        if still_animating || self.queue.has_pending() {
            self.request_frame()
        } else {
            false
        }
    }
}
