// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick control flow.
//!
//! One tick, in order:
//!
//! 1. Fold the input batch into the pointer state.
//! 2. Read the viewport width and the latest pointer sample.
//! 3. On release, hand the released row the pointer's flick velocity.
//! 4. Resolve the dragged row, pin it under the pointer, and reorder.
//! 5. Retarget every other row to its resting slot and pick the cursor.
//! 6. Step every spring `animation_steps` times by the clock's step size, settling the ones at
//!    rest.
//! 7. Capture the frame, then close out the pointer state for the next tick.

use springlist_input::pointer::{PointerPhase, PointerTracker};
use springlist_input::scheduler::FrameContext;
use springlist_motion::math::center;

use crate::config::{ConfigError, EngineConfig};
use crate::drag::{self, DraggedInfo};
use crate::frame::{Frame, RenderSurface};
use crate::item::{Item, RowSeed};
use crate::list::ItemList;

/// All mutable engine state. One instance lives for the lifetime of the page.
#[derive(Clone, Debug)]
pub struct EngineState<H> {
    /// Row being dragged, if any.
    pub dragged: Option<DraggedInfo>,
    /// Most recently released row.
    pub last_dragged: Option<DraggedInfo>,
    /// Unified pointer.
    pub pointer: PointerTracker,
    /// Rows in visual order.
    pub items: ItemList<H>,
}

/// The drag-and-reorder engine.
#[derive(Clone, Debug)]
pub struct Engine<H> {
    config: EngineConfig,
    state: EngineState<H>,
}

impl<H> Engine<H> {
    /// Build the initial rows, asking `create` for each row's render handle.
    ///
    /// Rows start horizontally centered in a viewport of `viewport_width`, at `y = 0`; the first
    /// tick sends them to their stacked slots.
    pub fn new(
        config: EngineConfig,
        viewport_width: f64,
        mut create: impl FnMut(&RowSeed) -> H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let column_x = center(config.row_width, viewport_width);
        let items = RowSeed::initial(&config)
            .iter()
            .map(|seed| Item::new(seed, column_x, &config, create(seed)))
            .collect();
        tracing::debug!(items = config.item_count, viewport_width, "engine created");
        Ok(Self {
            state: EngineState {
                dragged: None,
                last_dragged: None,
                pointer: PointerTracker::with_capacity(config.history_capacity),
                items: ItemList::new(items),
            },
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &EngineState<H> {
        &self.state
    }

    /// Rows in visual order.
    pub fn items(&self) -> &ItemList<H> {
        &self.state.items
    }

    /// Current pointer phase.
    pub fn pointer_phase(&self) -> PointerPhase {
        self.state.pointer.phase()
    }

    /// Run one tick and return what it produced, without touching any surface.
    pub fn advance(&mut self, ctx: &FrameContext<'_>, viewport_width: f64) -> Frame {
        let config = &self.config;
        let state = &mut self.state;

        state.pointer.apply(ctx.batch, ctx.now);
        let column_x = center(config.row_width, viewport_width);
        let pointer = state.pointer.latest().position;
        let phase = state.pointer.phase();

        if phase == PointerPhase::Idle
            && let Some(released) = state.dragged
        {
            let velocity = state
                .pointer
                .history()
                .velocity(ctx.now, config.flick_window_ms);
            drag::release(&mut state.items, released, velocity);
        }

        let dragged = drag::resolve(
            phase,
            state.dragged,
            &state.items,
            pointer,
            config.row_width,
        );
        let dragged = dragged.and_then(|d| Some((d, state.items.position(d.id)?)));
        if let Some((info, index)) = dragged
            && let Some(item) = state.items.get_mut(index)
        {
            drag::position_dragged(item, info, pointer, column_x, config);
            drag::reorder(&mut state.items, index, pointer.y);
        }
        let dragged = dragged.map(|(info, _)| info);
        let dragged_id = dragged.map(|d| d.id);

        drag::layout_idle(&mut state.items, dragged_id, column_x, config.padding_top);
        let cursor = drag::cursor_for(&state.items, dragged, pointer, config.row_width);

        let mut still_animating = false;
        for item in state.items.iter_mut() {
            for spring in item.springs_mut() {
                spring.step_n_dt(ctx.animation_steps, ctx.ms_per_step);
                if !spring.settle_if_at_rest() {
                    still_animating = true;
                }
            }
        }

        let frame = Frame::capture(&state.items, dragged_id, cursor, still_animating);

        state.pointer.finish_tick();
        if state.dragged.is_some() && dragged.is_none() {
            state.last_dragged = state.dragged;
        }
        state.dragged = dragged;
        frame
    }

    /// Run one tick against `surface`: read its width, advance, and write the frame.
    ///
    /// Returns whether anything is still animating.
    pub fn tick<S>(&mut self, ctx: &FrameContext<'_>, surface: &mut S) -> bool
    where
        S: RenderSurface<Handle = H>,
    {
        let frame = self.advance(ctx, surface.viewport_width());
        frame.apply(&self.state.items, surface);
        frame.still_animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Cursor, Elevation};
    use crate::item::ItemId;
    use kurbo::Point;
    use springlist_input::event::{InputBatch, InputKind, RawInput};
    use springlist_motion::MS_PER_ANIMATION_STEP;

    const WIDTH: f64 = 1000.0;

    /// Drives an engine the way a 60 Hz display would, 16 ms and a couple of steps per frame.
    struct Harness {
        engine: Engine<()>,
        now: f64,
    }

    impl Harness {
        fn new(config: EngineConfig) -> Self {
            Self {
                engine: Engine::new(config, WIDTH, |_| ()).unwrap(),
                now: 1000.0,
            }
        }

        fn frame(&mut self, inputs: &[(InputKind, f64, f64)]) -> Frame {
            self.frame_with_steps(inputs, 2)
        }

        fn frame_with_steps(&mut self, inputs: &[(InputKind, f64, f64)], steps: u32) -> Frame {
            self.now += 16.0;
            let batch =
                InputBatch::from_inputs(inputs.iter().map(|&(k, x, y)| RawInput::new(k, x, y)));
            let ctx = FrameContext {
                now: self.now,
                batch: &batch,
                animation_steps: steps,
                ms_per_step: MS_PER_ANIMATION_STEP,
            };
            self.engine.advance(&ctx, WIDTH)
        }

        fn settle(&mut self) {
            for _ in 0..2000 {
                if !self.frame(&[]).still_animating {
                    return;
                }
            }
            panic!("engine never settled");
        }

        fn ids(&self) -> Vec<u32> {
            self.engine.items().ids().into_iter().map(|id| id.0).collect()
        }

        /// Pointer at the horizontal center of the column, `dy` below the top of row `id`.
        fn over(&self, id: u32, dy: f64) -> (f64, f64) {
            let item = self.engine.items().by_id(ItemId(id)).unwrap();
            (item.x.pos + 160.0, item.y.pos + dy)
        }
    }

    fn equal_rows() -> EngineConfig {
        // Zero height range: every row is 100 tall.
        EngineConfig::default()
            .with_item_count(4)
            .with_row_heights(100.0, 0.0)
    }

    #[test]
    fn rows_settle_into_stacked_layout() {
        let mut h = Harness::new(EngineConfig::default());
        h.settle();
        let mut top = 50.0;
        for item in h.engine.items().iter() {
            assert_eq!(item.x.pos, 340.0);
            assert_eq!(item.y.pos, top);
            top += item.size_y;
        }
        assert_eq!(h.engine.pointer_phase(), PointerPhase::Idle);
    }

    #[test]
    fn press_on_row_starts_drag_and_lifts_it() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let (x, y) = h.over(1, 10.0);
        let frame = h.frame(&[(InputKind::PointerDown, x, y)]);
        assert_eq!(frame.cursor, Cursor::Grabbing);
        assert_eq!(h.engine.state().dragged.map(|d| d.id), Some(ItemId(1)));
        let f = frame.item(ItemId(1)).unwrap();
        assert_eq!(f.elevation, Elevation::Lifted);
        assert!(f.scale > 1.0);
        assert!(f.z_index > 4);
        assert_eq!(h.engine.pointer_phase(), PointerPhase::JustPressed);
        h.frame(&[]);
        assert_eq!(h.engine.pointer_phase(), PointerPhase::Held);
    }

    #[test]
    fn press_outside_rows_drags_nothing() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let frame = h.frame(&[(InputKind::PointerDown, 5.0, 5.0)]);
        assert_eq!(frame.cursor, Cursor::Auto);
        assert!(h.engine.state().dragged.is_none());
    }

    #[test]
    fn hover_shows_grab_cursor() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let (x, y) = h.over(2, 50.0);
        let frame = h.frame(&[(InputKind::MouseMove, x, y)]);
        assert_eq!(frame.cursor, Cursor::Grab);
        assert_eq!(h.engine.pointer_phase(), PointerPhase::Idle);
    }

    #[test]
    fn dragging_down_past_two_midpoints_reorders_twice() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        assert_eq!(h.ids(), vec![0, 1, 2, 3]);
        // Rows rest at y = 50, 150, 250, 350; midpoints 100, 200, 300, 400.
        let (x, y) = h.over(0, 10.0);
        h.frame(&[(InputKind::PointerDown, x, y)]);
        h.frame(&[(InputKind::MouseMove, x, 310.0)]);
        assert_eq!(h.ids(), vec![1, 2, 0, 3]);
        h.frame(&[(InputKind::MouseMove, x, 260.0)]);
        assert_eq!(h.ids(), vec![1, 2, 0, 3]);
        h.frame(&[(InputKind::MouseMove, x, 90.0)]);
        assert_eq!(h.ids(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn dragged_row_follows_pointer_and_keeps_grabbing_off_row() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let (x, y) = h.over(3, 20.0);
        h.frame(&[(InputKind::PointerDown, x, y)]);
        // Far left of the column: outside the row's box, still dragging.
        let frame = h.frame(&[(InputKind::MouseMove, x - 600.0, y)]);
        assert_eq!(frame.cursor, Cursor::Grabbing);
        let item = h.engine.items().by_id(ItemId(3)).unwrap();
        assert_eq!(item.y.dest, y - 20.0);
        // Horizontal motion is pulled two thirds of the way back to the column.
        let expected_x = 340.0 - 600.0 + 600.0 / 1.5;
        assert!((item.x.dest - expected_x).abs() < 1e-9, "{}", item.x.dest);
    }

    #[test]
    fn release_returns_row_to_slot_and_records_last_dragged() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let (x, y) = h.over(1, 10.0);
        h.frame(&[(InputKind::PointerDown, x, y)]);
        h.frame(&[(InputKind::MouseMove, x + 30.0, y + 20.0)]);
        let frame = h.frame(&[(InputKind::MouseUp, x + 30.0, y + 20.0)]);
        assert_eq!(frame.cursor, Cursor::Grab);
        assert!(h.engine.state().dragged.is_none());
        assert_eq!(
            h.engine.state().last_dragged.map(|d| d.id),
            Some(ItemId(1))
        );
        assert_eq!(h.engine.state().pointer.history().len(), 1);
        h.settle();
        let item = h.engine.items().by_id(ItemId(1)).unwrap();
        assert_eq!((item.x.pos, item.y.pos, item.scale.pos), (340.0, 150.0, 1.0));
    }

    #[test]
    fn flick_release_adds_velocity() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let (x, y) = h.over(0, 10.0);
        h.frame(&[(InputKind::PointerDown, x, y)]);
        h.frame(&[(InputKind::MouseMove, x + 10.0, y)]);
        h.frame(&[(InputKind::MouseMove, x + 20.0, y)]);
        let before = h.engine.items().by_id(ItemId(0)).unwrap();
        let (before_x, before_y) = (before.x.v, before.y.v);
        assert_eq!((before_x, before_y), (0.0, 0.0));
        // No steps on the release tick, so the impulse is read back untouched.
        h.frame_with_steps(&[(InputKind::MouseUp, x + 20.0, y)], 0);
        let after = h.engine.items().by_id(ItemId(0)).unwrap();
        // Press at t, last move 32 ms later and 20 px to the right: 625 px/s.
        assert!((after.x.v - 625.0).abs() < 1e-9, "got {}", after.x.v);
        assert_eq!(after.y.v, 0.0);
    }

    #[test]
    fn click_without_movement_releases_at_rest() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        // Early timestamps put the history's origin seed inside the flick window.
        h.now = 24.0;
        let (x, y) = h.over(0, 10.0);
        h.frame(&[(InputKind::PointerDown, x, y)]);
        h.frame(&[(InputKind::MouseUp, x, y)]);
        assert_eq!(h.now, 56.0);
        let item = h.engine.items().by_id(ItemId(0)).unwrap();
        assert_eq!((item.x.v, item.y.v), (0.0, 0.0));
    }

    #[test]
    fn order_is_always_a_permutation() {
        let mut h = Harness::new(EngineConfig::default().with_item_count(7));
        h.settle();
        let mut expected = h.ids();
        expected.sort_unstable();
        let (x, y) = h.over(3, 5.0);
        h.frame(&[(InputKind::PointerDown, x, y)]);
        for (i, target) in [900.0, -200.0, 400.0, 40.0, 1200.0, 300.0].into_iter().enumerate() {
            let dx = if i % 2 == 0 { 80.0 } else { -80.0 };
            h.frame(&[(InputKind::TouchMove, x + dx, target)]);
            let mut ids = h.ids();
            ids.sort_unstable();
            assert_eq!(ids, expected);
        }
        h.frame(&[(InputKind::TouchEnd, 0.0, 0.0)]);
        h.settle();
        let mut ids = h.ids();
        ids.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn settled_engine_reports_not_animating() {
        let mut h = Harness::new(equal_rows());
        h.settle();
        let frame = h.frame(&[]);
        assert!(!frame.still_animating);
        let zs: Vec<_> = frame.items.iter().map(|f| f.z_index).collect();
        assert_eq!(zs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn grabbing_a_moving_row_uses_its_live_position() {
        let mut h = Harness::new(equal_rows());
        // First frame: rows start at y = 0 and head toward their slots.
        h.frame(&[]);
        let first = h.engine.items().get(0).unwrap();
        assert!(first.y.pos < first.y.dest);
        // Above every resting slot (the first starts at 50), but inside the first row's live box.
        let live = Point::new(first.x.pos + 1.0, first.y.pos + 1.0);
        assert!(live.y < 50.0);
        h.frame(&[(InputKind::PointerDown, live.x, live.y)]);
        assert_eq!(h.engine.state().dragged.map(|d| d.id), Some(ItemId(0)));
    }
}
