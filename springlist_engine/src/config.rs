// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and its validation.

use springlist_input::pointer::{FLICK_WINDOW_MS, HISTORY_CAPACITY};
use springlist_motion::MS_PER_ANIMATION_STEP;

/// Reasons an [`EngineConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A field that must be strictly positive is not.
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The pointer history must hold at least one sample.
    #[error("pointer history capacity must be at least 1")]
    EmptyHistory,
}

/// Layout metrics, spring tuning and gesture constants.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Width of every row.
    pub row_width: f64,
    /// Gap between the top of the page and the first row.
    pub padding_top: f64,
    /// Number of rows created at startup.
    pub item_count: u32,
    /// Smallest generated row height.
    pub min_row_height: f64,
    /// Generated heights fall in `[min_row_height, min_row_height + row_height_range)`.
    pub row_height_range: f64,
    /// Stiffness of every item spring.
    pub stiffness: f64,
    /// Damping of every item spring.
    pub damping: f64,
    /// Scale target of the dragged row.
    pub drag_scale: f64,
    /// Horizontal drag is divided by this factor on the way back to the column center.
    pub horizontal_restriction: f64,
    /// Look-back window for release velocity, in milliseconds.
    pub flick_window_ms: f64,
    /// Physics step size, in milliseconds. Both the step count per frame and the time each
    /// step integrates use it, so smaller steps trade work for accuracy, not speed.
    pub ms_per_step: f64,
    /// Pointer samples kept for release velocity.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            row_width: 320.0,
            padding_top: 50.0,
            item_count: 5,
            min_row_height: 50.0,
            row_height_range: 150.0,
            stiffness: 225.0,
            damping: 25.0,
            drag_scale: 1.1,
            horizontal_restriction: 1.5,
            flick_window_ms: FLICK_WINDOW_MS,
            ms_per_step: MS_PER_ANIMATION_STEP,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Set the row width.
    pub fn with_row_width(mut self, row_width: f64) -> Self {
        self.row_width = row_width;
        self
    }

    /// Set the top inset.
    pub fn with_padding_top(mut self, padding_top: f64) -> Self {
        self.padding_top = padding_top;
        self
    }

    /// Set the number of rows.
    pub fn with_item_count(mut self, item_count: u32) -> Self {
        self.item_count = item_count;
        self
    }

    /// Set the generated height range.
    pub fn with_row_heights(mut self, min: f64, range: f64) -> Self {
        self.min_row_height = min;
        self.row_height_range = range;
        self
    }

    /// Set spring stiffness and damping.
    pub fn with_spring(mut self, stiffness: f64, damping: f64) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    /// Set the dragged row's scale target.
    pub fn with_drag_scale(mut self, drag_scale: f64) -> Self {
        self.drag_scale = drag_scale;
        self
    }

    /// Set the horizontal restriction factor.
    pub fn with_horizontal_restriction(mut self, factor: f64) -> Self {
        self.horizontal_restriction = factor;
        self
    }

    /// Set the flick look-back window.
    pub fn with_flick_window_ms(mut self, window: f64) -> Self {
        self.flick_window_ms = window;
        self
    }

    /// Set the physics step size.
    pub fn with_ms_per_step(mut self, ms: f64) -> Self {
        self.ms_per_step = ms;
        self
    }

    /// Set the pointer history capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("row_width", self.row_width),
            ("padding_top", self.padding_top),
            ("min_row_height", self.min_row_height),
            ("row_height_range", self.row_height_range),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("drag_scale", self.drag_scale),
            ("horizontal_restriction", self.horizontal_restriction),
            ("flick_window_ms", self.flick_window_ms),
            ("ms_per_step", self.ms_per_step),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in [
            ("row_width", self.row_width),
            ("stiffness", self.stiffness),
            ("horizontal_restriction", self.horizontal_restriction),
            ("ms_per_step", self.ms_per_step),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        Ok(())
    }
}
