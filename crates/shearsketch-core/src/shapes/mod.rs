//! Shape definitions.

mod ellipse;

pub use ellipse::{EditableEllipse, MIN_RADIUS};
