// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame visual output and the rendering surface it is written to.
//!
//! ## Z-order
//!
//! Rows scaled above `1` (being dragged, or still shrinking back after a release) look closer to
//! the viewer, so they stack above every resting row: `len + floor(scale * 100)`. With the
//! default drag scale that maps `[1, 1.1]` to `len + [100, 110]`. Resting rows use their list
//! index, which already matches their top-to-bottom order.

use kurbo::Point;

use crate::item::{ItemId, RowSeed};
use crate::list::ItemList;

/// Page cursor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cursor {
    /// Nothing to grab.
    #[default]
    Auto,
    /// Hovering a row that can be dragged.
    Grab,
    /// A row is being dragged, whether or not the pointer is still over it.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Shadow and opacity treatment of a row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Elevation {
    /// Flat on the page.
    #[default]
    Resting,
    /// Picked up by the pointer.
    Lifted,
}

impl Elevation {
    /// CSS `box-shadow` value.
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => "rgba(0, 0, 0, 0.2) 0px 1px 2px 0px",
            Self::Lifted => "rgba(0, 0, 0, 0.2) 0px 16px 32px 0px",
        }
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        match self {
            Self::Resting => 1.0,
            Self::Lifted => 0.7,
        }
    }
}

/// Visual attributes of one row for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemFrame {
    /// Which row.
    pub id: ItemId,
    /// Top-left corner.
    pub position: Point,
    /// Uniform scale.
    pub scale: f64,
    /// Stacking order. Higher is drawn on top.
    pub z_index: i32,
    /// Shadow and opacity.
    pub elevation: Elevation,
}

/// Everything a tick produces.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// One entry per row, in list order.
    pub items: Vec<ItemFrame>,
    /// Page cursor.
    pub cursor: Cursor,
    /// Whether any spring is still moving.
    pub still_animating: bool,
}

/// Stacking order for the row at `index` of `len`, currently at `scale`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "Row counts and scaled z offsets are far below i32::MAX."
)]
pub fn z_index(index: usize, len: usize, scale: f64) -> i32 {
    if scale > 1.0 {
        len as i32 + (scale * 100.0).floor() as i32
    } else {
        index as i32
    }
}

impl Frame {
    /// Read the springs of every item into a frame.
    pub fn capture<H>(
        items: &ItemList<H>,
        dragged: Option<ItemId>,
        cursor: Cursor,
        still_animating: bool,
    ) -> Self {
        let len = items.len();
        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemFrame {
                id: item.id,
                position: item.position(),
                scale: item.scale.pos,
                z_index: z_index(index, len, item.scale.pos),
                elevation: if dragged == Some(item.id) {
                    Elevation::Lifted
                } else {
                    Elevation::Resting
                },
            })
            .collect();
        Self {
            items,
            cursor,
            still_animating,
        }
    }

    /// The entry for `id`, if present.
    pub fn item(&self, id: ItemId) -> Option<&ItemFrame> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Write this frame to `surface`. `items` must be the list the frame was captured from.
    pub fn apply<S: RenderSurface>(&self, items: &ItemList<S::Handle>, surface: &mut S) {
        debug_assert_eq!(self.items.len(), items.len(), "frame and list out of sync");
        for (frame, item) in self.items.iter().zip(items.iter()) {
            debug_assert_eq!(frame.id, item.id, "frame and list out of order");
            surface.write_z_index(&item.handle, frame.z_index);
            surface.write_transform(&item.handle, frame.position, frame.scale);
            surface.write_elevation(&item.handle, frame.elevation);
        }
        surface.write_cursor(self.cursor);
    }
}

/// The rendering collaborator.
///
/// The engine never draws. It asks the surface for the usable viewport width, asks it to create
/// one visual node per row at startup, and writes plain attributes back every frame.
pub trait RenderSurface {
    /// Opaque per-row render target.
    type Handle;

    /// Usable viewport width: excludes scrollbars and is stable under pinch zoom.
    fn viewport_width(&self) -> f64;

    /// Create the visual node for one row.
    fn create_row(&mut self, seed: &RowSeed) -> Self::Handle;

    /// Position (top-left corner) and uniform scale.
    fn write_transform(&mut self, handle: &Self::Handle, position: Point, scale: f64);

    /// Stacking order.
    fn write_z_index(&mut self, handle: &Self::Handle, z_index: i32);

    /// Shadow and opacity.
    fn write_elevation(&mut self, handle: &Self::Handle, elevation: Elevation);

    /// Page-level cursor.
    fn write_cursor(&mut self, cursor: Cursor);
}
