// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Springlist Motion: a fixed-step spring integrator and the small math kit around it.
//!
//! Springlist Motion is the numeric leaf of the Springlist crates.
//!
//! - [`Spring`] is a unit-mass damped harmonic oscillator that drives one scalar toward a
//!   destination, advanced in fixed [`MS_PER_ANIMATION_STEP`] increments.
//! - [`math`] holds centering, clamping, remapping, overlap tests and deterministic hashes.
//!
//! Nothing here knows about frames, pointers or lists. Higher layers decide how many steps to
//! run per displayed frame and where each spring should be heading.
//!
//! # Example
//!
//! ```rust
//! use springlist_motion::Spring;
//!
//! let mut s = Spring::with_params(0.0, 100.0, 0.0, 225.0, 30.0);
//! for _ in 0..1000 {
//!     s.step();
//!     if s.settle_if_at_rest() {
//!         break;
//!     }
//! }
//! assert_eq!(s.pos, 100.0);
//! assert_eq!(s.v, 0.0);
//! ```
//!
//! Hashes give reproducible pseudo-random sizes:
//!
//! ```rust
//! use springlist_motion::math::{center, hash11};
//!
//! let height = 50.0 + hash11(3.0) * 150.0;
//! assert!((50.0..200.0).contains(&height));
//! assert_eq!(center(320.0, 1000.0), 340.0);
//! ```

pub mod math;
pub mod spring;

pub use spring::{DEFAULT_DAMPING, DEFAULT_STIFFNESS, MS_PER_ANIMATION_STEP, REST_EPSILON, Spring};
