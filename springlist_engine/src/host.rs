// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A driver that owns the scheduler, the engine and the surface.
//!
//! Hosts that just want the list on screen forward three things: raw input events to
//! [`Host::push_input`], display callbacks to [`Host::on_animation_frame`], and one
//! [`Host::start`] at boot. Each of them returns `true` when the host must request another
//! display callback.

use springlist_input::event::RawInput;
use springlist_input::scheduler::Scheduler;

use crate::config::{ConfigError, EngineConfig};
use crate::engine::Engine;
use crate::frame::RenderSurface;

/// Scheduler, engine and surface bundled together.
pub struct Host<S: RenderSurface> {
    scheduler: Scheduler,
    engine: Engine<S::Handle>,
    surface: S,
}

impl<S: RenderSurface> core::fmt::Debug for Host<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Host")
            .field("scheduler", &self.scheduler)
            .field("phase", &self.engine.pointer_phase())
            .finish_non_exhaustive()
    }
}

impl<S: RenderSurface> Host<S> {
    /// Validate `config`, create every row on `surface`, and set up the scheduler.
    pub fn new(config: EngineConfig, mut surface: S) -> Result<Self, ConfigError> {
        let width = surface.viewport_width();
        let scheduler = Scheduler::builder()
            .ms_per_step(config.ms_per_step)
            .build();
        let engine = Engine::new(config, width, |seed| surface.create_row(seed))?;
        Ok(Self {
            scheduler,
            engine,
            surface,
        })
    }

    /// Ask for the first frame. Returns `true` if the host must request a display callback.
    pub fn start(&mut self) -> bool {
        self.scheduler.request_frame()
    }

    /// Queue a raw input event.
    pub fn push_input(&mut self, input: RawInput) -> bool {
        self.scheduler.push_input(input)
    }

    /// Run one display callback at timestamp `now` (milliseconds).
    pub fn on_animation_frame(&mut self, now: f64) -> bool {
        let Self {
            scheduler,
            engine,
            surface,
        } = self;
        scheduler.run_frame(now, |ctx| engine.tick(ctx, surface))
    }

    /// Whether a display callback is outstanding.
    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// The engine.
    pub fn engine(&self) -> &Engine<S::Handle> {
        &self.engine
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably. Use this to resize a test surface between frames.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
