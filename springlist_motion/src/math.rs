// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless numeric and geometry helpers used by layout and hit testing.
//!
//! The hashes are the "hash without sine" family: cheap, deterministic pseudo-random values in
//! `[0, 1)` derived from an integer-valued input. They let initial layouts look varied while
//! staying reproducible across runs.

use kurbo::{Point, Rect, Vec2};

/// Offset that centers `containee` inside `container`.
///
/// Returns `0` when the two sizes coincide, and a negative offset when the containee is larger.
pub fn center(containee: f64, container: f64) -> f64 {
    center_inset(containee, container, 0.0, 0.0)
}

/// Like [`center`], with insets on both ends. `container` includes both insets.
pub fn center_inset(containee: f64, container: f64, inset_start: f64, inset_end: f64) -> f64 {
    inset_start + (container - inset_start - inset_end - containee) / 2.0
}

/// Linearly map `value` from `[old_min, old_max]` to `[new_min, new_max]`.
///
/// A degenerate source range maps everything to the middle of the target range.
pub fn remap(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    if old_min == old_max {
        return (new_min + new_max) / 2.0;
    }
    (value - old_min) / (old_max - old_min) * (new_max - new_min) + new_min
}

/// Euclidean length of `(x, y)`.
pub fn length(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// `a <= b <= c`.
pub fn less_equal(a: f64, b: f64, c: f64) -> bool {
    a <= b && b <= c
}

/// Clamp `v` into `[min, max]`. Argument order follows reading order: `min <= v <= max`.
#[allow(
    clippy::manual_clamp,
    reason = "f64::clamp panics when min > max; this returns max instead."
)]
pub fn clamp(min: f64, v: f64, max: f64) -> f64 {
    if v > max {
        max
    } else if v < min {
        min
    } else {
        v
    }
}

/// Point containment with all four edges inclusive.
///
/// Hit testing of list rows uses [`Rect::contains`] instead, which excludes the far edges.
pub fn inside_inclusive(p: Point, r: Rect) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

/// Whether two rectangles touch or overlap, edges inclusive.
pub fn overlap_inclusive(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Area of the intersection of `a` and `b`, or `0` if they do not overlap.
pub fn overlap_area(a: Rect, b: Rect) -> f64 {
    let left = a.x0.max(b.x0);
    let right = a.x1.min(b.x1);
    let top = a.y0.max(b.y0);
    let bottom = a.y1.min(b.y1);
    if right > left && bottom > top {
        (right - left) * (bottom - top)
    } else {
        0.0
    }
}

/// Largest width that fits in the container while keeping `aspect_ratio` (width / height).
///
/// The fitted height is `width / aspect_ratio`.
pub fn fit(aspect_ratio: f64, container_w: f64, container_h: f64) -> f64 {
    container_w.min(container_h * aspect_ratio)
}

/// Quadratic ease-out on `[0, 1]`.
pub fn ease_out_quad(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(2)
}

/// Quartic ease-out on `[0, 1]`.
pub fn ease_out_quart(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(4)
}

/// CSS `rem` at the default 16px root font size.
pub fn rem(x: f64) -> f64 {
    x * 16.0
}

/// Index of the smallest value; the first one wins on ties. `0` for an empty slice.
pub fn min_index(values: &[f64]) -> usize {
    let mut min = f64::INFINITY;
    let mut min_index = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < min {
            min_index = i;
            min = v;
        }
    }
    min_index
}

/// Fractional part, always in `[0, 1)` for finite input.
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// One-in, one-out hash in `[0, 1)`.
pub fn hash11(p: f64) -> f64 {
    let mut p = fract(p * 0.1031);
    p *= p + 33.33;
    p *= p + p;
    fract(p)
}

fn hash_seed3(p: f64) -> (f64, f64, f64) {
    let x = fract(p * 0.1031);
    let y = fract(p * 0.103);
    let z = fract(p * 0.0973);
    let dot = x * (y + 33.33) + y * (z + 33.33) + z * (x + 33.33);
    (x + dot, y + dot, z + dot)
}

/// One-in, two-out hash, each component in `[0, 1)`.
pub fn hash21(p: f64) -> Vec2 {
    let (x, y, z) = hash_seed3(p);
    Vec2::new(fract((x + y) * z), fract((x + z) * y))
}

/// One-in, three-out hash, each component in `[0, 1)`.
pub fn hash31(p: f64) -> (f64, f64, f64) {
    let (x, y, z) = hash_seed3(p);
    (
        fract((x + y) * z),
        fract((x + z) * y),
        fract((y + z) * x),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_in_container() {
        assert_eq!(center(320.0, 1000.0), 340.0);
        assert_eq!(center(100.0, 100.0), 0.0);
        assert_eq!(center(200.0, 100.0), -50.0);
        assert_eq!(center_inset(100.0, 300.0, 50.0, 50.0), 100.0);
    }

    #[test]
    fn remap_degenerate_range_is_midpoint() {
        assert_eq!(remap(5.0, 2.0, 2.0, 10.0, 20.0), 15.0);
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(0.0, 0.0, 10.0, 100.0, 0.0), 100.0);
    }

    #[test]
    fn clamp_and_interval() {
        assert_eq!(clamp(0.0, -1.0, 1.0), 0.0);
        assert_eq!(clamp(0.0, 2.0, 1.0), 1.0);
        assert_eq!(clamp(0.0, 0.5, 1.0), 0.5);
        assert!(less_equal(1.0, 1.0, 2.0));
        assert!(!less_equal(1.0, 3.0, 2.0));
    }

    #[test]
    fn length_is_euclidean() {
        assert_eq!(length(3.0, 4.0), 5.0);
    }

    #[test]
    fn inclusive_containment_includes_far_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(inside_inclusive(Point::new(10.0, 10.0), r));
        assert!(inside_inclusive(Point::new(0.0, 0.0), r));
        assert!(!inside_inclusive(Point::new(10.5, 5.0), r));
    }

    #[test]
    fn overlap_tests() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let apart = Rect::new(30.0, 30.0, 40.0, 40.0);
        assert_eq!(overlap_area(a, b), 25.0);
        assert_eq!(overlap_area(a, touching), 0.0);
        assert!(overlap_inclusive(a, touching));
        assert!(!overlap_inclusive(a, apart));
        assert_eq!(overlap_area(a, apart), 0.0);
    }

    #[test]
    fn fit_respects_aspect_ratio() {
        assert_eq!(fit(2.0, 1000.0, 100.0), 200.0);
        assert_eq!(fit(2.0, 150.0, 100.0), 150.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > ease_out_quad(0.5));
    }

    #[test]
    fn min_index_prefers_first() {
        assert_eq!(min_index(&[3.0, 1.0, 1.0, 2.0]), 1);
        assert_eq!(min_index(&[]), 0);
        assert_eq!(rem(2.0), 32.0);
    }

    #[test]
    fn hashes_are_deterministic_and_in_unit_range() {
        for i in 0..64 {
            let p = f64::from(i);
            let h = hash11(p);
            assert_eq!(h, hash11(p));
            assert!((0.0..1.0).contains(&h), "hash11({p}) = {h}");
            let v = hash21(p);
            assert!((0.0..1.0).contains(&v.x) && (0.0..1.0).contains(&v.y));
            let (a, b, c) = hash31(p);
            assert!([a, b, c].iter().all(|x| (0.0..1.0).contains(x)));
        }
        assert_eq!(hash11(0.0), 0.0);
        assert_ne!(hash11(1.0), hash11(2.0));
    }

    #[test]
    fn fract_of_negative() {
        assert_eq!(fract(-0.25), 0.75);
        assert_eq!(fract(2.5), 0.5);
    }
}
