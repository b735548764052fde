//! Bounding box derivation by parametric sampling.
//!
//! The box of a sheared and rotated ellipse is approximated from a closed
//! polygon of samples rather than solved analytically. Handle positions and
//! the anchor-preserving resize are both defined against this approximate
//! box, so the two must agree on the sample count.

use crate::affine::transform_point;
use crate::shapes::EditableEllipse;
use crate::widget::{HANDLE_ORDER, Handle};
use kurbo::{Point, Rect};
use std::f64::consts::TAU;

/// Default number of polygon segments used for sampling.
pub const DEFAULT_SAMPLE_STEPS: usize = 60;

/// Sample `steps + 1` screen-space points around the outline of `shape`.
///
/// The first and last samples coincide (`t = 0` and `t = 2π`).
pub fn sample_points(shape: &EditableEllipse, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = TAU * i as f64 / steps as f64;
            let local = Point::new(shape.radius_x * t.cos(), shape.radius_y * t.sin());
            transform_point(local, shape.shear_x, shape.shear_y, shape.rotation)
                + shape.center.to_vec2()
        })
        .collect()
}

/// Axis-aligned bounds of a point set. An empty set yields `Rect::ZERO`.
pub fn bounding_box_of(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::ZERO;
    }
    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Rect::new(min_x, min_y, max_x, max_y)
}

/// Sampled screen-space bounds of `shape`.
pub fn shape_bounds(shape: &EditableEllipse, steps: usize) -> Rect {
    bounding_box_of(&sample_points(shape, steps))
}

/// The eight handles of `bounds`: four corners, then four edge midpoints.
pub fn handles_of(bounds: Rect) -> [Handle; 8] {
    HANDLE_ORDER.map(|kind| Handle::new(kind, kind.point_on(bounds)))
}
