//! Handle definitions for shape manipulation.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The diagonally opposite corner.
    pub fn opposite(self) -> Self {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Position of this corner on `bounds`.
    pub fn point_on(self, bounds: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(bounds.x0, bounds.y0),
            Corner::TopRight => Point::new(bounds.x1, bounds.y0),
            Corner::BottomLeft => Point::new(bounds.x0, bounds.y1),
            Corner::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }

    /// Radius growth direction per unit of pointer motion: `-1` for left/top.
    pub fn signs(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }
}

/// Edge midpoint positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Midpoint of this edge on `bounds`.
    pub fn point_on(self, bounds: Rect) -> Point {
        let center = bounds.center();
        match self {
            Edge::Top => Point::new(center.x, bounds.y0),
            Edge::Bottom => Point::new(center.x, bounds.y1),
            Edge::Left => Point::new(bounds.x0, center.y),
            Edge::Right => Point::new(bounds.x1, center.y),
        }
    }

    /// Top and bottom edges shear horizontally.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// The kind of handle - determines what manipulation it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "at", rename_all = "kebab-case")]
pub enum HandleKind {
    /// Corner handle (resize).
    Corner(Corner),
    /// Edge midpoint handle (shear).
    Edge(Edge),
}

/// Enumeration order of the eight handles: corners before midpoints.
///
/// Hit-testing walks handles in this order, so it also breaks ties.
pub const HANDLE_ORDER: [HandleKind; 8] = [
    HandleKind::Corner(Corner::TopLeft),
    HandleKind::Corner(Corner::TopRight),
    HandleKind::Corner(Corner::BottomLeft),
    HandleKind::Corner(Corner::BottomRight),
    HandleKind::Edge(Edge::Top),
    HandleKind::Edge(Edge::Bottom),
    HandleKind::Edge(Edge::Left),
    HandleKind::Edge(Edge::Right),
];

impl HandleKind {
    /// Role name used by renderers and logs.
    pub fn role(self) -> &'static str {
        match self {
            HandleKind::Corner(Corner::TopLeft) => "top-left",
            HandleKind::Corner(Corner::TopRight) => "top-right",
            HandleKind::Corner(Corner::BottomLeft) => "bottom-left",
            HandleKind::Corner(Corner::BottomRight) => "bottom-right",
            HandleKind::Edge(Edge::Top) => "top-middle",
            HandleKind::Edge(Edge::Bottom) => "bottom-middle",
            HandleKind::Edge(Edge::Left) => "left-middle",
            HandleKind::Edge(Edge::Right) => "right-middle",
        }
    }

    /// Position of this handle on `bounds`.
    pub fn point_on(self, bounds: Rect) -> Point {
        match self {
            HandleKind::Corner(corner) => corner.point_on(bounds),
            HandleKind::Edge(edge) => edge.point_on(bounds),
        }
    }
}

impl std::fmt::Display for HandleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.role())
    }
}

/// A manipulation handle: role plus screen position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// The kind of handle (determines behavior).
    pub kind: HandleKind,
    /// Position in screen coordinates.
    pub position: Point,
}

impl Handle {
    /// Create a new handle.
    pub fn new(kind: HandleKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Whether `point` lies within `radius` of this handle (inclusive).
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= radius * radius
    }
}
