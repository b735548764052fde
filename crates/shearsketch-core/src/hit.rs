//! Hit-testing against the bounding box, the shape interior and the handles.

use crate::affine::{DEGENERATE_EPSILON, screen_to_local};
use crate::shapes::EditableEllipse;
use crate::widget::Handle;
use kurbo::{Point, Rect};

/// Inclusive containment test (`kurbo::Rect::contains` excludes the far edges).
pub fn point_in_box(point: Point, bounds: Rect) -> bool {
    point.x >= bounds.x0 && point.x <= bounds.x1 && point.y >= bounds.y0 && point.y <= bounds.y1
}

/// Whether `point` lies inside (or on) the transformed ellipse.
pub fn point_in_shape(point: Point, shape: &EditableEllipse) -> bool {
    point_in_shape_with_epsilon(point, shape, DEGENERATE_EPSILON)
}

/// [`point_in_shape`] with a caller-supplied degeneracy threshold.
///
/// A degenerate shear can't be inverted, so the point counts as outside.
pub fn point_in_shape_with_epsilon(point: Point, shape: &EditableEllipse, epsilon: f64) -> bool {
    match screen_to_local(shape, point, epsilon) {
        Ok(local) => {
            let nx = local.x / shape.radius_x;
            let ny = local.y / shape.radius_y;
            nx * nx + ny * ny <= 1.0
        }
        Err(err) => {
            log::warn!("treating point {point:?} as outside: {err}");
            false
        }
    }
}

/// First handle, in enumeration order, within `radius` of `point`.
pub fn find_handle_hit(handles: &[Handle], point: Point, radius: f64) -> Option<Handle> {
    handles.iter().copied().find(|handle| handle.hit_test(point, radius))
}
