// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag identity, live drag positioning, reordering and resting layout.
//!
//! ## Reordering
//!
//! After the dragged row is moved under the pointer, [`reorder`] compares the pointer's `y`
//! against the resting midpoints of the row's neighbors. While the pointer is above the previous
//! row's midpoint the dragged row swaps one slot up; while it is below the next row's midpoint it
//! swaps one slot down. A fast pointer can cross several midpoints in one tick, so both checks
//! loop. Only the dragged row moves during a gesture and the rest of the list is already in
//! order, so this bidirectional bubble step keeps the whole list sorted.

use kurbo::{Point, Vec2};
use springlist_input::pointer::PointerPhase;

use crate::config::EngineConfig;
use crate::frame::Cursor;
use crate::item::{Item, ItemId};
use crate::list::ItemList;

/// The row being dragged and where the pointer grabbed it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DraggedInfo {
    /// Which row.
    pub id: ItemId,
    /// Pointer minus the row's top-left corner at grab time, held for the whole gesture.
    pub offset: Vec2,
}

/// Decide which row (if any) is dragged this tick.
///
/// - `Held` keeps whatever was dragged last tick. It does not hit-test again, so a fast pointer
///   cannot slip off a narrow row.
/// - `JustPressed` hit-tests the live boxes in list order.
/// - `Idle` drags nothing.
pub fn resolve<H>(
    phase: PointerPhase,
    previous: Option<DraggedInfo>,
    items: &ItemList<H>,
    pointer: Point,
    row_width: f64,
) -> Option<DraggedInfo> {
    match phase {
        PointerPhase::Held => previous,
        PointerPhase::Idle => None,
        PointerPhase::JustPressed => {
            let hit = items.hit_test(pointer, row_width)?;
            let offset = pointer - hit.position();
            tracing::debug!(id = hit.id.0, ?offset, "drag started");
            Some(DraggedInfo { id: hit.id, offset })
        }
    }
}

/// Give a released row the pointer's recent velocity, so a flick keeps it moving.
pub fn release<H>(items: &mut ItemList<H>, released: DraggedInfo, velocity: Vec2) {
    let Some(item) = items
        .position(released.id)
        .and_then(|index| items.get_mut(index))
    else {
        return;
    };
    item.x.add_velocity(velocity.x);
    item.y.add_velocity(velocity.y);
    tracing::debug!(id = released.id.0, ?velocity, "drag released");
}

/// Pin the dragged row under the pointer.
///
/// Vertical position follows the pointer exactly. Horizontal position is pulled back toward
/// `column_x` by `1 / horizontal_restriction` of the distance, so sideways drags feel
/// rubber-banded. The scale animates toward the drag scale rather than jumping.
pub fn position_dragged<H>(
    item: &mut Item<H>,
    dragged: DraggedInfo,
    pointer: Point,
    column_x: f64,
    config: &EngineConfig,
) {
    let raw = pointer - dragged.offset;
    let x = raw.x + (column_x - raw.x) / config.horizontal_restriction;
    item.x.snap_to(x);
    item.y.snap_to(raw.y);
    item.scale.retarget(config.drag_scale);
}

/// Bubble the row at `index` toward the pointer. Returns its new index.
pub fn reorder<H>(items: &mut ItemList<H>, mut index: usize, pointer_y: f64) -> usize {
    while index > 0
        && items
            .get(index - 1)
            .is_some_and(|prev| pointer_y < prev.dest_mid_y())
    {
        items.swap(index, index - 1);
        index -= 1;
        tracing::debug!(index, "dragged row moved up");
    }
    while index + 1 < items.len()
        && items
            .get(index + 1)
            .is_some_and(|next| pointer_y > next.dest_mid_y())
    {
        items.swap(index, index + 1);
        index += 1;
        tracing::debug!(index, "dragged row moved down");
    }
    index
}

/// Stack every row except `dragged` top to bottom under the top inset, centered at `column_x`,
/// at scale `1`. The dragged row still takes up its slot.
pub fn layout_idle<H>(
    items: &mut ItemList<H>,
    dragged: Option<ItemId>,
    column_x: f64,
    padding_top: f64,
) {
    let mut top = padding_top;
    for item in items.iter_mut() {
        if dragged != Some(item.id) {
            item.x.retarget(column_x);
            item.y.retarget(top);
            item.scale.retarget(1.0);
        }
        top += item.size_y;
    }
}

/// `Grabbing` while dragging, `Grab` over a row, `Auto` elsewhere.
pub fn cursor_for<H>(
    items: &ItemList<H>,
    dragged: Option<DraggedInfo>,
    pointer: Point,
    row_width: f64,
) -> Cursor {
    if dragged.is_some() {
        Cursor::Grabbing
    } else if items.hit_test(pointer, row_width).is_some() {
        Cursor::Grab
    } else {
        Cursor::Auto
    }
}
