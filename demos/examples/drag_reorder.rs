// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag gesture against a surface that prints instead of drawing.
//!
//! The first row is pressed, dragged below the third row, and released with a flick. The
//! listing after each phase shows the visual order, each row's position and scale, and the page
//! cursor.
//!
//! Run:
//! - `cargo run -p springlist_demos --example drag_reorder`
//! - `RUST_LOG=debug cargo run -p springlist_demos --example drag_reorder` to see drag events.

use kurbo::Point;
use springlist_engine::{Cursor, Elevation, EngineConfig, Host, RenderSurface, RowSeed};
use springlist_input::event::{InputKind, RawInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FRAME_MS: f64 = 1000.0 / 60.0;

struct Row {
    label: String,
    color: String,
    position: Point,
    scale: f64,
    z_index: i32,
    elevation: Elevation,
}

struct PrintSurface {
    width: f64,
    rows: Vec<Row>,
    cursor: Cursor,
}

impl RenderSurface for PrintSurface {
    type Handle = usize;

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn create_row(&mut self, seed: &RowSeed) -> usize {
        self.rows.push(Row {
            label: format!("row {}", seed.index),
            color: seed.color.to_string(),
            position: Point::ZERO,
            scale: 1.0,
            z_index: 0,
            elevation: Elevation::Resting,
        });
        self.rows.len() - 1
    }

    fn write_transform(&mut self, handle: &usize, position: Point, scale: f64) {
        let row = &mut self.rows[*handle];
        row.position = position;
        row.scale = scale;
    }

    fn write_z_index(&mut self, handle: &usize, z_index: i32) {
        self.rows[*handle].z_index = z_index;
    }

    fn write_elevation(&mut self, handle: &usize, elevation: Elevation) {
        self.rows[*handle].elevation = elevation;
    }

    fn write_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

struct Driver {
    host: Host<PrintSurface>,
    now: f64,
    wants_frame: bool,
}

impl Driver {
    fn send(&mut self, kind: InputKind, x: f64, y: f64) {
        self.wants_frame |= self.host.push_input(RawInput::new(kind, x, y));
    }

    fn frame(&mut self) {
        self.now += FRAME_MS;
        self.wants_frame = self.host.on_animation_frame(self.now);
    }

    fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.wants_frame {
            self.frame();
            frames += 1;
        }
        frames
    }

    fn print(&self, title: &str) {
        let surface = self.host.surface();
        println!("{title} (cursor: {})", surface.cursor.as_css());
        for item in self.host.engine().items().iter() {
            let row = &surface.rows[item.handle];
            println!(
                "  {:<6} {:<22} at ({:>7.2}, {:>7.2}) scale {:.3} z {:>3} {}",
                row.label,
                row.color,
                row.position.x,
                row.position.y,
                row.scale,
                row.z_index,
                row.elevation.box_shadow(),
            );
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let surface = PrintSurface {
        width: 1024.0,
        rows: Vec::new(),
        cursor: Cursor::Auto,
    };
    let host = match Host::new(EngineConfig::default(), surface) {
        Ok(host) => host,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return;
        }
    };
    let mut d = Driver {
        host,
        now: 0.0,
        wants_frame: false,
    };

    d.wants_frame = d.host.start();
    let frames = d.run_until_idle();
    tracing::info!(frames, "initial layout settled");
    d.print("Resting");

    let (grab_x, grab_y) = {
        let first = d.host.engine().items().get(0).map(|i| i.position());
        let first = first.unwrap_or(Point::ZERO);
        (first.x + 40.0, first.y + 10.0)
    };
    d.send(InputKind::PointerDown, grab_x, grab_y);
    d.frame();
    d.print("Pressed");

    // Drag down in even steps until the pointer is below the third row's midpoint.
    let target_y = {
        let third = d.host.engine().items().get(2);
        third.map_or(grab_y, |i| i.dest_mid_y() + 10.0)
    };
    let steps = 12;
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        d.send(
            InputKind::MouseMove,
            grab_x + 60.0 * t,
            grab_y + (target_y - grab_y) * t,
        );
        d.frame();
    }
    d.print("Dragged");

    d.send(InputKind::MouseUp, grab_x + 60.0, target_y);
    let frames = d.run_until_idle();
    tracing::info!(frames, "released row settled");
    d.print("Released");
}
