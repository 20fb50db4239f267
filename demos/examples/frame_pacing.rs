// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physics steps per displayed frame at different refresh rates.
//!
//! The same spring is driven by the animation clock at 30, 60 and 144 Hz. Each display runs a
//! different number of steps per frame, but every display has run the same number of steps by
//! any given time, so the spring lands in the same place.
//!
//! Run:
//! - `cargo run -p springlist_demos --example frame_pacing`

use springlist_input::scheduler::AnimationClock;
use springlist_motion::{MS_PER_ANIMATION_STEP, Spring};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    for hz in [30.0, 60.0, 144.0] {
        let frame_ms = 1000.0 / hz;
        let mut clock = AnimationClock::new(MS_PER_ANIMATION_STEP);
        let mut spring = Spring::with_params(0.0, 100.0, 0.0, 225.0, 25.0);
        let mut now = 0.0;
        let mut first_steps = Vec::new();
        let mut total = 0;
        while now <= 500.0 {
            let steps = clock.begin(now);
            spring.step_n(steps);
            clock.end(true);
            if first_steps.len() < 8 {
                first_steps.push(steps);
            }
            total += steps;
            now += frame_ms;
        }
        println!(
            "{hz:>5} Hz: steps {first_steps:?}... total {total}, spring at {:.3}",
            spring.pos
        );
        tracing::debug!(hz, total, pos = spring.pos, "display simulated");
    }
}
