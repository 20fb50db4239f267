// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unified pointer state: phase transitions and a short position history.
//!
//! ## Phases
//!
//! - `Idle` → `JustPressed` on a press.
//! - `JustPressed` → `Held` at the start of the following tick, so exactly one tick observes
//!   `JustPressed` (the first frame of a potential drag).
//! - `JustPressed` / `Held` → `Idle` on a release.
//! - A press while `Held` starts over at `JustPressed`.
//!
//! When a press and a release land in the same batch, the release wins the phase. Samples are
//! appended either way.
//!
//! ## History
//!
//! [`PointerHistory`] is oldest-first, bounded, and never empty. It starts with a synthetic
//! sample at the origin with timestamp `0`, and is reset to that seed whenever a tick ends in
//! `Idle`. Move samples are recorded in every phase so hover feedback can use the latest
//! position.

use std::collections::VecDeque;

use kurbo::{Point, Vec2};

use crate::event::InputBatch;

/// Default number of samples kept in a [`PointerHistory`].
pub const HISTORY_CAPACITY: usize = 20;

/// Default look-back window for flick velocity, in milliseconds.
pub const FLICK_WINDOW_MS: f64 = 100.0;

/// Phase of the unified pointer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PointerPhase {
    /// No contact.
    #[default]
    Idle,
    /// Contact started during the current tick.
    JustPressed,
    /// Contact has persisted for at least one full tick.
    Held,
}

/// One observed pointer position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Page-absolute position.
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time: f64,
}

impl PointerSample {
    /// The synthetic sample that seeds every history.
    pub const ORIGIN: Self = Self {
        position: Point::ORIGIN,
        time: 0.0,
    };
}

/// Bounded, oldest-first, never-empty ring of pointer samples.
#[derive(Clone, Debug)]
pub struct PointerHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
    // The front sample is the synthetic origin, not an observed position.
    seeded: bool,
}

impl Default for PointerHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl PointerHistory {
    /// A seeded history keeping at most `capacity` samples (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut samples = VecDeque::with_capacity(capacity);
        samples.push_back(PointerSample::ORIGIN);
        Self {
            samples,
            capacity,
            seeded: true,
        }
    }

    /// Append a sample, evicting the oldest when full.
    pub fn push(&mut self, sample: PointerSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
            self.seeded = false;
        }
        self.samples.push_back(sample);
    }

    /// Drop everything and go back to the single origin sample.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.samples.push_back(PointerSample::ORIGIN);
        self.seeded = true;
    }

    /// The most recent sample.
    pub fn latest(&self) -> PointerSample {
        // Never empty: seeded on construction and on reset, and push only evicts when full.
        self.samples
            .back()
            .copied()
            .unwrap_or(PointerSample::ORIGIN)
    }

    /// Number of samples held (between `1` and the capacity).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PointerSample> + '_ {
        self.samples.iter()
    }

    /// Release velocity in pixels per second.
    ///
    /// Walks back from the newest sample while samples are within `window_ms` of `now`, then
    /// divides the displacement between the oldest such sample and the newest by their time
    /// difference. Zero when fewer than two observed samples fall inside the window; the
    /// origin seed never counts.
    pub fn velocity(&self, now: f64, window_ms: f64) -> Vec2 {
        let mut in_window = self
            .samples
            .iter()
            .skip(usize::from(self.seeded))
            .rev()
            .take_while(|s| now - s.time <= window_ms);
        let Some(newest) = in_window.next() else {
            return Vec2::ZERO;
        };
        let Some(oldest) = in_window.last() else {
            return Vec2::ZERO;
        };
        let dt = newest.time - oldest.time;
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        (newest.position - oldest.position) / dt * 1000.0
    }
}

/// The pointer state machine.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    phase: PointerPhase,
    history: PointerHistory,
}

impl PointerTracker {
    /// An idle tracker with a history of `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            phase: PointerPhase::Idle,
            history: PointerHistory::with_capacity(capacity),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    /// Recent samples.
    pub fn history(&self) -> &PointerHistory {
        &self.history
    }

    /// The most recent pointer sample.
    pub fn latest(&self) -> PointerSample {
        self.history.latest()
    }

    /// Fold one tick's batch into the state. Call at the start of a tick.
    pub fn apply(&mut self, batch: &InputBatch, now: f64) {
        if self.phase == PointerPhase::JustPressed {
            self.phase = PointerPhase::Held;
        }
        for position in batch.moves() {
            self.history.push(PointerSample { position, time: now });
        }
        if let Some(position) = batch.pressed() {
            self.history.push(PointerSample { position, time: now });
            self.phase = PointerPhase::JustPressed;
        }
        if batch.released() {
            self.phase = PointerPhase::Idle;
        }
    }

    /// Close out a tick: an idle pointer forgets its history.
    pub fn finish_tick(&mut self) {
        if self.phase == PointerPhase::Idle {
            self.history.reset();
        }
    }
}
