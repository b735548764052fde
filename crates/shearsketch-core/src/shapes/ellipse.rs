//! Editable ellipse shape.

use crate::affine::{shape_affine, shear_determinant};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Smallest radius a finalized ellipse may have.
pub const MIN_RADIUS: f64 = 5.0;

/// An ellipse under shear, rotation and translation.
///
/// Radii are measured in the local (pre-shear) frame. The screen position of a
/// local point is `center + rotate(rotation) * shear(shear_x, shear_y) * p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableEllipse {
    /// Screen position of the local origin.
    pub center: Point,
    /// Horizontal semi-axis (local frame).
    pub radius_x: f64,
    /// Vertical semi-axis (local frame).
    pub radius_y: f64,
    /// Rotation angle in radians. Accumulates without wrapping.
    #[serde(default)]
    pub rotation: f64,
    /// Horizontal shear factor.
    #[serde(default)]
    pub shear_x: f64,
    /// Vertical shear factor.
    #[serde(default)]
    pub shear_y: f64,
}

impl EditableEllipse {
    /// Create an unsheared, unrotated ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            rotation: 0.0,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }

    /// Copy of this shape moved to the origin with different radii.
    ///
    /// Shear and rotation are kept, so the bounds of the result are the bounds
    /// the resized shape would have relative to its own center.
    pub fn zero_centered(&self, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center: Point::ZERO,
            radius_x,
            radius_y,
            ..self.clone()
        }
    }

    /// Raise both radii to at least `min_radius`.
    pub fn clamp_radii(&mut self, min_radius: f64) {
        self.radius_x = self.radius_x.max(min_radius);
        self.radius_y = self.radius_y.max(min_radius);
    }

    /// Determinant of the shear part of the transform.
    pub fn shear_determinant(&self) -> f64 {
        shear_determinant(self.shear_x, self.shear_y)
    }

    /// Local-frame ellipse (centered at the origin, axis aligned).
    pub fn as_kurbo_local(&self) -> KurboEllipse {
        KurboEllipse::new(Point::ZERO, (self.radius_x, self.radius_y), 0.0)
    }

    /// Screen-space outline.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        shape_affine(self) * self.as_kurbo_local().to_path(tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_creation() {
        let ellipse = EditableEllipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        assert!((ellipse.center.x - 50.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_x - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 20.0).abs() < f64::EPSILON);
        assert!(ellipse.rotation.abs() < f64::EPSILON);
        assert!((ellipse.shear_determinant() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_radii() {
        let mut ellipse = EditableEllipse::new(Point::ZERO, 2.0, 40.0);
        ellipse.clamp_radii(MIN_RADIUS);
        assert!((ellipse.radius_x - MIN_RADIUS).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_centered_keeps_transform() {
        let mut ellipse = EditableEllipse::new(Point::new(10.0, 20.0), 30.0, 20.0);
        ellipse.shear_x = 0.2;
        ellipse.rotation = 1.0;
        let probe = ellipse.zero_centered(70.0, 5.0);
        assert_eq!(probe.center, Point::ZERO);
        assert!((probe.radius_x - 70.0).abs() < f64::EPSILON);
        assert!((probe.shear_x - 0.2).abs() < f64::EPSILON);
        assert!((probe.rotation - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outline_is_translated() {
        use kurbo::Shape as _;
        let ellipse = EditableEllipse::new(Point::new(100.0, 100.0), 50.0, 30.0);
        let bbox = ellipse.to_path(0.01).bounding_box();
        assert!((bbox.x0 - 50.0).abs() < 0.1);
        assert!((bbox.y1 - 130.0).abs() < 0.1);
    }

    #[test]
    fn test_deserialize_defaults_transform() {
        let json = r#"{"center":{"x":1.0,"y":2.0},"radius_x":8.0,"radius_y":9.0}"#;
        let ellipse: EditableEllipse = serde_json::from_str(json).unwrap();
        assert!(ellipse.shear_x.abs() < f64::EPSILON);
        assert!(ellipse.rotation.abs() < f64::EPSILON);
    }
}
