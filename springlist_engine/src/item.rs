// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List items and the deterministic seeds they are created from.

use kurbo::{Point, Rect};
use springlist_motion::Spring;
use springlist_motion::math::hash11;

use crate::config::EngineConfig;

/// Stable identity of an item, independent of its position in the list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// An HSL color, as handed to the surface when a row is created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation in percent.
    pub saturation: f64,
    /// Lightness in percent.
    pub lightness: f64,
}

impl core::fmt::Display for Hsl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Everything needed to create one row's visual node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowSeed {
    /// Identity of the row.
    pub id: ItemId,
    /// Label shown on the row.
    pub index: u32,
    /// Row width.
    pub size_x: f64,
    /// Row height.
    pub size_y: f64,
    /// Background color.
    pub color: Hsl,
}

impl RowSeed {
    /// Seeds for the initial rows. Heights come from a hash of the index, not randomness, so the
    /// initial layout is reproducible.
    pub fn initial(config: &EngineConfig) -> Vec<Self> {
        (0..config.item_count)
            .map(|i| {
                let index = f64::from(i);
                Self {
                    id: ItemId(i),
                    index: i,
                    size_x: config.row_width,
                    size_y: config.min_row_height + hash11(index) * config.row_height_range,
                    // Lighter blues toward the top.
                    color: Hsl {
                        hue: 205.0,
                        saturation: 100.0,
                        lightness: 90.0 - index * 5.0,
                    },
                }
            })
            .collect()
    }
}

/// One row: identity, fixed height, three springs and the surface's handle.
#[derive(Clone, Debug)]
pub struct Item<H> {
    /// Stable identity.
    pub id: ItemId,
    /// Height, fixed after creation.
    pub size_y: f64,
    /// Horizontal position of the top-left corner.
    pub x: Spring,
    /// Vertical position of the top-left corner.
    pub y: Spring,
    /// Visual scale.
    pub scale: Spring,
    /// Opaque render target, passed back to the surface untouched.
    pub handle: H,
}

impl<H> Item<H> {
    /// An item resting at `(x, 0)` with scale `1`.
    pub fn new(seed: &RowSeed, x: f64, config: &EngineConfig, handle: H) -> Self {
        let spring = |pos| Spring::with_params(pos, pos, 0.0, config.stiffness, config.damping);
        Self {
            id: seed.id,
            size_y: seed.size_y,
            x: spring(x),
            y: spring(0.0),
            scale: spring(1.0),
            handle,
        }
    }

    /// Current animated top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x.pos, self.y.pos)
    }

    /// Current animated bounding box.
    ///
    /// This follows the springs' positions, not their destinations, so a row can be grabbed
    /// while it is still moving.
    pub fn live_bounds(&self, row_width: f64) -> Rect {
        Rect::new(
            self.x.pos,
            self.y.pos,
            self.x.pos + row_width,
            self.y.pos + self.size_y,
        )
    }

    /// Vertical midpoint of the row's resting slot.
    pub fn dest_mid_y(&self) -> f64 {
        self.y.dest + self.size_y / 2.0
    }

    /// The three springs, mutably.
    pub fn springs_mut(&mut self) -> [&mut Spring; 3] {
        [&mut self.x, &mut self.y, &mut self.scale]
    }
}
