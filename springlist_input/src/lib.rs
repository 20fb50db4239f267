// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Springlist Input: frame-coalesced pointer input and fixed-step animation scheduling.
//!
//! ## Overview
//!
//! Raw pointer, mouse and touch events arrive at arbitrary times. This crate turns them into one
//! immutable [`InputBatch`](crate::event::InputBatch) per displayed frame and a whole number of
//! physics steps for that frame.
//!
//! - [`event`]: the recognized [`InputKind`](crate::event::InputKind)s, a coalescing
//!   [`InputQueue`](crate::event::InputQueue) keyed by kind, and the per-tick batch.
//! - [`pointer`]: the unified pointer state machine (idle, just pressed, held) with a bounded
//!   position history and flick velocity.
//! - [`scheduler`]: the pending-frame flag and the [`AnimationClock`](crate::scheduler::AnimationClock)
//!   that decouples physics from the display refresh rate.
//!
//! ## Workflow
//!
//! 1) Build a [`Scheduler`](crate::scheduler::Scheduler) once, choosing the input kinds to accept.
//! 2) Forward every raw event to `push_input`; request a display callback when it says so.
//! 3) In the callback, call `run_frame` with your tick logic. Feed the batch to a
//!    [`PointerTracker`](crate::pointer::PointerTracker) first, then do the frame's work.
//!
//! ```
//! use springlist_input::event::{InputKind, RawInput};
//! use springlist_input::pointer::{PointerPhase, PointerTracker};
//! use springlist_input::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::default();
//! let mut pointer = PointerTracker::default();
//!
//! assert!(scheduler.push_input(RawInput::new(InputKind::PointerDown, 10.0, 10.0)));
//! let again = scheduler.run_frame(16.0, |ctx| {
//!     pointer.apply(ctx.batch, ctx.now);
//!     let pressed = pointer.phase() == PointerPhase::JustPressed;
//!     pointer.finish_tick();
//!     pressed
//! });
//! assert!(again);
//! ```

pub mod event;
pub mod pointer;
pub mod scheduler;
