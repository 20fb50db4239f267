// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input kinds, the coalescing queue, and the per-tick batch it produces.
//!
//! ## Coalescing
//!
//! The host forwards every raw event to [`InputQueue::push`] as it arrives. The queue keeps at
//! most one entry per [`InputKind`]; a later event of the same kind replaces the earlier one.
//! At the next display refresh the scheduler calls [`InputQueue::take`], which hands out an
//! immutable [`InputBatch`] and leaves the queue empty for the following frame.

use bitflags::bitflags;
use kurbo::Point;

/// The raw input kinds the engine understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InputKind {
    /// A mouse, pen or touch contact started.
    PointerDown,
    /// The mouse moved.
    MouseMove,
    /// A touch contact moved. Hosts report the first touch point.
    TouchMove,
    /// A mouse button was released.
    MouseUp,
    /// A touch contact ended.
    TouchEnd,
}

impl InputKind {
    /// Every kind.
    pub const ALL: [Self; 5] = [
        Self::PointerDown,
        Self::MouseMove,
        Self::TouchMove,
        Self::MouseUp,
        Self::TouchEnd,
    ];

    /// The single-bit set for this kind.
    pub const fn flag(self) -> InputKinds {
        match self {
            Self::PointerDown => InputKinds::POINTER_DOWN,
            Self::MouseMove => InputKinds::MOUSE_MOVE,
            Self::TouchMove => InputKinds::TOUCH_MOVE,
            Self::MouseUp => InputKinds::MOUSE_UP,
            Self::TouchEnd => InputKinds::TOUCH_END,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::PointerDown => 0,
            Self::MouseMove => 1,
            Self::TouchMove => 2,
            Self::MouseUp => 3,
            Self::TouchEnd => 4,
        }
    }
}

bitflags! {
    /// A set of [`InputKind`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputKinds: u8 {
        /// See [`InputKind::PointerDown`].
        const POINTER_DOWN = 0b0000_0001;
        /// See [`InputKind::MouseMove`].
        const MOUSE_MOVE   = 0b0000_0010;
        /// See [`InputKind::TouchMove`].
        const TOUCH_MOVE   = 0b0000_0100;
        /// See [`InputKind::MouseUp`].
        const MOUSE_UP     = 0b0000_1000;
        /// See [`InputKind::TouchEnd`].
        const TOUCH_END    = 0b0001_0000;

        /// Kinds that start a gesture.
        const PRESS = Self::POINTER_DOWN.bits();
        /// Kinds that carry a new pointer position mid-gesture.
        const MOVE = Self::MOUSE_MOVE.bits() | Self::TOUCH_MOVE.bits();
        /// Kinds that end a gesture.
        const RELEASE = Self::MOUSE_UP.bits() | Self::TOUCH_END.bits();
    }
}

impl Default for InputKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// One raw event, in page-absolute coordinates.
///
/// Page coordinates stay correct when the page scrolls without a move event; coordinates local
/// to a container would go stale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawInput {
    /// What happened.
    pub kind: InputKind,
    /// Where it happened.
    pub position: Point,
}

impl RawInput {
    /// Build a raw input from page coordinates.
    pub fn new(kind: InputKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }
}

/// Everything that arrived since the previous tick, at most one entry per kind.
///
/// Constructed by [`InputQueue::take`] and discarded after the tick that consumes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputBatch {
    kinds: InputKinds,
    positions: [Option<Point>; 5],
}

impl Default for InputBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBatch {
    /// An empty batch.
    pub fn new() -> Self {
        Self {
            kinds: InputKinds::empty(),
            positions: [None; 5],
        }
    }

    /// Build a batch directly from raw inputs, applying the queue's last-wins rule.
    pub fn from_inputs(inputs: impl IntoIterator<Item = RawInput>) -> Self {
        let mut batch = Self::new();
        for input in inputs {
            batch.record(input);
        }
        batch
    }

    fn record(&mut self, input: RawInput) {
        self.kinds |= input.kind.flag();
        self.positions[input.kind.slot()] = Some(input.position);
    }

    /// The kinds present in this batch.
    pub fn kinds(&self) -> InputKinds {
        self.kinds
    }

    /// True if nothing arrived.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The latest position reported for `kind`, if any.
    pub fn position(&self, kind: InputKind) -> Option<Point> {
        self.positions[kind.slot()]
    }

    /// The press position, if a gesture started.
    pub fn pressed(&self) -> Option<Point> {
        self.position(InputKind::PointerDown)
    }

    /// True if any release kind arrived.
    pub fn released(&self) -> bool {
        self.kinds.intersects(InputKinds::RELEASE)
    }

    /// Move positions, mouse first then touch.
    pub fn moves(&self) -> impl Iterator<Item = Point> + '_ {
        [InputKind::MouseMove, InputKind::TouchMove]
            .into_iter()
            .filter_map(|k| self.position(k))
    }
}

/// Coalescing queue for raw input, configured once with the kinds to listen for.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    listening: InputKinds,
    pending: InputBatch,
}

impl InputQueue {
    /// A queue that accepts only `kinds`.
    pub fn new(kinds: InputKinds) -> Self {
        Self {
            listening: kinds,
            pending: InputBatch::new(),
        }
    }

    /// A queue that accepts every [`InputKind`].
    pub fn listening_all() -> Self {
        Self::new(InputKinds::all())
    }

    /// The kinds this queue accepts.
    pub fn listening(&self) -> InputKinds {
        self.listening
    }

    /// Record `input`. Returns `false` (and drops it) if its kind is not listened for.
    pub fn push(&mut self, input: RawInput) -> bool {
        if !self.listening.contains(input.kind.flag()) {
            tracing::trace!(kind = ?input.kind, "dropping unrecognized input");
            return false;
        }
        self.pending.record(input);
        true
    }

    /// True if at least one input is waiting for the next tick.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Hand out everything queued so far and start a fresh, empty batch.
    pub fn take(&mut self) -> InputBatch {
        core::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_event_of_same_kind_wins() {
        let mut q = InputQueue::listening_all();
        assert!(q.push(RawInput::new(InputKind::MouseMove, 1.0, 1.0)));
        assert!(q.push(RawInput::new(InputKind::MouseMove, 5.0, 6.0)));
        let batch = q.take();
        assert_eq!(batch.position(InputKind::MouseMove), Some(Point::new(5.0, 6.0)));
        assert_eq!(batch.kinds(), InputKinds::MOUSE_MOVE);
    }

    #[test]
    fn take_leaves_queue_empty() {
        let mut q = InputQueue::listening_all();
        q.push(RawInput::new(InputKind::PointerDown, 1.0, 2.0));
        assert!(q.has_pending());
        let batch = q.take();
        assert_eq!(batch.pressed(), Some(Point::new(1.0, 2.0)));
        assert!(!q.has_pending());
        assert!(q.take().is_empty());
    }

    #[test]
    fn unrecognized_kinds_are_dropped() {
        let mut q = InputQueue::new(InputKinds::PRESS | InputKinds::MOUSE_UP);
        assert!(!q.push(RawInput::new(InputKind::TouchMove, 1.0, 1.0)));
        assert!(q.push(RawInput::new(InputKind::MouseUp, 1.0, 1.0)));
        let batch = q.take();
        assert!(batch.released());
        assert_eq!(batch.moves().count(), 0);
    }

    #[test]
    fn moves_are_mouse_then_touch() {
        let batch = InputBatch::from_inputs([
            RawInput::new(InputKind::TouchMove, 2.0, 2.0),
            RawInput::new(InputKind::MouseMove, 1.0, 1.0),
        ]);
        let moves: Vec<_> = batch.moves().collect();
        assert_eq!(moves, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        assert!(!batch.released());
        assert!(batch.kinds().contains(InputKinds::MOVE));
    }

    #[test]
    fn default_batch_is_empty() {
        assert!(InputBatch::default().is_empty());
        assert!(!InputQueue::default().has_pending());
        for kind in InputKind::ALL {
            assert!(InputQueue::default().listening().contains(kind.flag()));
        }
    }

    #[test]
    fn touch_end_counts_as_release() {
        let batch = InputBatch::from_inputs([RawInput::new(InputKind::TouchEnd, 0.0, 0.0)]);
        assert!(batch.released());
        assert_eq!(batch.pressed(), None);
    }
}
