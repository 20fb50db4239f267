// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped harmonic oscillator stepped at a fixed rate.
//!
//! ## Model
//!
//! A [`Spring`] drives one scalar toward its destination. Mass is fixed at `1`, so the
//! acceleration is `-k * (pos - dest) - b * v`. Each [`Spring::step`] advances the state by
//! [`MS_PER_ANIMATION_STEP`] milliseconds regardless of the display's frame interval; callers
//! derive the number of steps from elapsed wall-clock time (see the scheduler in
//! `springlist_input`).
//!
//! Six milliseconds fits twice into a 120 Hz frame (8.3 ms) and two or three times into a 60 Hz
//! frame (16.6 ms). A larger step would sometimes not fit at all into a 120 Hz frame, so the
//! simulation would skip whole frames.

/// Duration of one physics sub-step, in milliseconds.
pub const MS_PER_ANIMATION_STEP: f64 = 6.0;

/// Threshold below which both velocity and remaining distance count as "at rest".
pub const REST_EPSILON: f64 = 0.01;

/// Default stiffness, in `1 / s^2`.
pub const DEFAULT_STIFFNESS: f64 = 225.0;

/// Default damping, in `1 / s`.
pub const DEFAULT_DAMPING: f64 = 30.0;

/// One animated scalar: current position, destination, velocity, stiffness and damping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring {
    /// Current (stretched or compressed) position.
    pub pos: f64,
    /// Resting position the spring pulls toward.
    pub dest: f64,
    /// Velocity in units per second.
    pub v: f64,
    /// Stiffness. Must be positive.
    pub k: f64,
    /// Damping.
    pub b: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Spring {
    /// A spring resting at `pos` with the default stiffness and damping.
    pub fn new(pos: f64) -> Self {
        Self::with_params(pos, pos, 0.0, DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }

    /// A spring with every field given explicitly.
    pub fn with_params(pos: f64, dest: f64, v: f64, k: f64, b: f64) -> Self {
        debug_assert!(k > 0.0, "spring stiffness must be positive, got {k}");
        Self { pos, dest, v, k, b }
    }

    /// A critically damped spring (`b = 2 * sqrt(k)`) resting at `pos`.
    pub fn critically_damped(pos: f64, k: f64) -> Self {
        Self::with_params(pos, pos, 0.0, k, 2.0 * k.sqrt())
    }

    /// Advance by one sub-step of [`MS_PER_ANIMATION_STEP`].
    pub fn step(&mut self) {
        self.step_dt(MS_PER_ANIMATION_STEP);
    }

    /// Advance by one sub-step of `dt_ms` milliseconds.
    ///
    /// The new velocity feeds the position update of the same sub-step. Callers that pace steps
    /// with a clock must pass the clock's step size here.
    pub fn step_dt(&mut self, dt_ms: f64) {
        let t = dt_ms / 1000.0;
        let f_spring = -self.k * (self.pos - self.dest);
        let f_damper = -self.b * self.v;
        let a = f_spring + f_damper;
        self.v += a * t;
        self.pos += self.v * t;
    }

    /// Advance by `n` sub-steps of [`MS_PER_ANIMATION_STEP`].
    pub fn step_n(&mut self, n: u32) {
        self.step_n_dt(n, MS_PER_ANIMATION_STEP);
    }

    /// Advance by `n` sub-steps of `dt_ms` milliseconds each.
    pub fn step_n_dt(&mut self, n: u32, dt_ms: f64) {
        for _ in 0..n {
            self.step_dt(dt_ms);
        }
    }

    /// True when motion is imperceptible: both `|v|` and `|dest - pos|` are below
    /// [`REST_EPSILON`].
    pub fn is_at_rest(&self) -> bool {
        self.v.abs() < REST_EPSILON && (self.dest - self.pos).abs() < REST_EPSILON
    }

    /// Jump to the resting state: `pos = dest`, `v = 0`.
    pub fn settle(&mut self) {
        self.pos = self.dest;
        self.v = 0.0;
    }

    /// Settle if [`is_at_rest`](Self::is_at_rest). Returns `true` if the spring is now at rest.
    pub fn settle_if_at_rest(&mut self) -> bool {
        if self.is_at_rest() {
            self.settle();
            true
        } else {
            false
        }
    }

    /// Move the destination without touching position or velocity.
    pub fn retarget(&mut self, dest: f64) {
        self.dest = dest;
    }

    /// Pin both position and destination to `value`. Velocity is kept so that a later
    /// impulse can add to it.
    pub fn snap_to(&mut self, value: f64) {
        self.pos = value;
        self.dest = value;
    }

    /// Add an impulse to the velocity.
    pub fn add_velocity(&mut self, dv: f64) {
        self.v += dv;
    }
}
