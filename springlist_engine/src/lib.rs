// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Springlist Engine: a drag-to-reorder list whose rows are laid out by springs.
//!
//! A fixed set of rows is stacked in a centered column. Pressing on a row picks it up: it follows
//! the pointer vertically, rubber-bands horizontally, scales up and casts a deeper shadow. Moving
//! it past a neighbor's midpoint swaps the two, and every other row springs into its new slot.
//! Releasing hands the row the pointer's recent velocity, so a flick throws it back into place.
//!
//! ## Overview
//!
//! - [`EngineConfig`]: layout, spring and gesture tuning, validated into a [`ConfigError`].
//! - [`Item`](crate::item::Item) and [`ItemList`](crate::list::ItemList): rows with three springs
//!   each, in visual order, hit-tested by their live (animated) boxes.
//! - [`drag`]: drag resolution, pinning, reordering and resting layout.
//! - [`Engine`]: one tick of the above, producing a [`Frame`].
//! - [`RenderSurface`]: the collaborator a frame is written to. The engine never draws.
//! - [`Host`]: bundles a [`Scheduler`](springlist_input::scheduler::Scheduler), an engine and a
//!   surface behind three entry points.
//!
//! ## Not a widget toolkit
//!
//! Row content, text, scrolling and accessibility belong to whatever owns the surface. The
//! engine only writes positions, scales, stacking order, elevation and the page cursor.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use springlist_engine::{Cursor, Elevation, EngineConfig, Host, RenderSurface, RowSeed};
//! use springlist_input::event::{InputKind, RawInput};
//!
//! #[derive(Default)]
//! struct Rows(Vec<Point>);
//!
//! impl RenderSurface for Rows {
//!     type Handle = usize;
//!     fn viewport_width(&self) -> f64 { 800.0 }
//!     fn create_row(&mut self, _: &RowSeed) -> usize {
//!         self.0.push(Point::ZERO);
//!         self.0.len() - 1
//!     }
//!     fn write_transform(&mut self, h: &usize, position: Point, _: f64) { self.0[*h] = position; }
//!     fn write_z_index(&mut self, _: &usize, _: i32) {}
//!     fn write_elevation(&mut self, _: &usize, _: Elevation) {}
//!     fn write_cursor(&mut self, _: Cursor) {}
//! }
//!
//! let mut host = Host::new(EngineConfig::default(), Rows::default()).unwrap();
//! let mut now = 0.0;
//! let mut more = host.start();
//! while more {
//!     now += 16.0;
//!     more = host.on_animation_frame(now);
//! }
//! // The first row rests at the top inset, centered in the 800 px viewport.
//! assert_eq!(host.surface().0[0], Point::new(240.0, 50.0));
//!
//! // Press on it: the next frame lifts it.
//! host.push_input(RawInput::new(InputKind::PointerDown, 250.0, 60.0));
//! host.on_animation_frame(now + 16.0);
//! assert!(host.engine().state().dragged.is_some());
//! ```

pub mod config;
pub mod drag;
pub mod engine;
pub mod frame;
pub mod host;
pub mod item;
pub mod list;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, EngineState};
pub use frame::{Cursor, Elevation, Frame, ItemFrame, RenderSurface};
pub use host::Host;
pub use item::{Hsl, ItemId, RowSeed};
