//! Affine point mapping between local ellipse space and screen space.
//!
//! The local-to-screen mapping is always shear first, then rotation, then
//! translation by the shape center. Translation is left to the caller for
//! the point functions so the same math serves zero-centered probes.

use crate::shapes::EditableEllipse;
use kurbo::{Affine, Point, Vec2};
use thiserror::Error;

/// `|1 - shear_x * shear_y|` below this value makes the shear non-invertible.
pub const DEGENERATE_EPSILON: f64 = 1e-10;

/// Transform errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    #[error("degenerate shear: determinant {determinant} is too close to zero")]
    DegenerateShear { determinant: f64 },
}

/// Determinant of the shear matrix `[[1, shear_x], [shear_y, 1]]`.
pub fn shear_determinant(shear_x: f64, shear_y: f64) -> f64 {
    1.0 - shear_x * shear_y
}

/// Map a local point to (untranslated) screen space: shear, then rotate.
pub fn transform_point(point: Point, shear_x: f64, shear_y: f64, rotation: f64) -> Point {
    let sheared_x = point.x + shear_x * point.y;
    let sheared_y = shear_y * point.x + point.y;

    let (sin_r, cos_r) = rotation.sin_cos();
    Point::new(
        sheared_x * cos_r - sheared_y * sin_r,
        sheared_x * sin_r + sheared_y * cos_r,
    )
}

/// Undo [`transform_point`]: rotate by `-rotation`, then apply the inverse shear.
pub fn inverse_transform_point(
    point: Point,
    shear_x: f64,
    shear_y: f64,
    rotation: f64,
) -> Result<Point, TransformError> {
    inverse_transform_point_with_epsilon(point, shear_x, shear_y, rotation, DEGENERATE_EPSILON)
}

/// [`inverse_transform_point`] with a caller-supplied degeneracy threshold.
pub fn inverse_transform_point_with_epsilon(
    point: Point,
    shear_x: f64,
    shear_y: f64,
    rotation: f64,
    epsilon: f64,
) -> Result<Point, TransformError> {
    let (sin_r, cos_r) = rotation.sin_cos();
    let unrotated_x = point.x * cos_r + point.y * sin_r;
    let unrotated_y = -point.x * sin_r + point.y * cos_r;

    let determinant = shear_determinant(shear_x, shear_y);
    if determinant.abs() < epsilon {
        return Err(TransformError::DegenerateShear { determinant });
    }

    Ok(Point::new(
        (unrotated_x - shear_x * unrotated_y) / determinant,
        (-shear_y * unrotated_x + unrotated_y) / determinant,
    ))
}

/// Full local-to-screen transform of a shape, translation included.
///
/// Equivalent to `transform_point` followed by adding the center; handy for
/// mapping whole paths.
pub fn shape_affine(shape: &EditableEllipse) -> Affine {
    let shear = Affine::new([1.0, shape.shear_y, shape.shear_x, 1.0, 0.0, 0.0]);
    Affine::translate(shape.center.to_vec2()) * Affine::rotate(shape.rotation) * shear
}

/// Map a local point of `shape` all the way to screen space.
pub fn local_to_screen(shape: &EditableEllipse, local: Point) -> Point {
    transform_point(local, shape.shear_x, shape.shear_y, shape.rotation) + shape.center.to_vec2()
}

/// Map a screen point into the local (pre-shear, unrotated) frame of `shape`.
pub fn screen_to_local(
    shape: &EditableEllipse,
    screen: Point,
    epsilon: f64,
) -> Result<Point, TransformError> {
    let relative: Vec2 = screen - shape.center;
    inverse_transform_point_with_epsilon(
        relative.to_point(),
        shape.shear_x,
        shape.shear_y,
        shape.rotation,
        epsilon,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-9, "y: {} vs {}", a.y, b.y);
    }

    #[test]
    fn test_identity() {
        let p = Point::new(3.0, -4.0);
        assert_close(transform_point(p, 0.0, 0.0, 0.0), p);
    }

    #[test]
    fn test_shear_precedes_rotation() {
        // Shear (1, 0) -> (1, 0.5), then a quarter turn -> (-0.5, 1).
        let p = transform_point(Point::new(1.0, 0.0), 0.0, 0.5, FRAC_PI_2);
        assert_close(p, Point::new(-0.5, 1.0));
    }

    #[test]
    fn test_round_trip() {
        let params = [(0.0, 0.0, 0.0), (0.3, -0.2, 1.1), (-1.5, 0.4, -2.7), (0.9, 0.9, 12.0)];
        let points = [Point::new(10.0, 0.0), Point::new(-7.5, 3.25), Point::new(0.0, -42.0)];
        for &(sx, sy, rot) in &params {
            for &p in &points {
                let forward = transform_point(p, sx, sy, rot);
                let back = inverse_transform_point(forward, sx, sy, rot).unwrap();
                assert_close(back, p);
            }
        }
    }

    #[test]
    fn test_degenerate_shear() {
        let result = inverse_transform_point(Point::new(1.0, 1.0), 2.0, 0.5, 0.3);
        assert!(matches!(result, Err(TransformError::DegenerateShear { .. })));
    }

    #[test]
    fn test_shape_affine_matches_point_math() {
        let mut shape = EditableEllipse::new(Point::new(120.0, 80.0), 40.0, 25.0);
        shape.shear_x = 0.35;
        shape.shear_y = -0.1;
        shape.rotation = 0.8;

        let local = Point::new(17.0, -9.0);
        assert_close(shape_affine(&shape) * local, local_to_screen(&shape, local));

        let screen = local_to_screen(&shape, local);
        assert_close(screen_to_local(&shape, screen, DEGENERATE_EPSILON).unwrap(), local);
    }
}
