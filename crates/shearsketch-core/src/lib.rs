//! ShearSketch Core Library
//!
//! Platform-agnostic geometry and interaction logic for editing a single
//! ellipse under shear, rotation and translation.

pub mod affine;
pub mod bounds;
pub mod config;
pub mod controller;
pub mod hit;
pub mod input;
pub mod shapes;
pub mod widget;

pub use affine::{TransformError, inverse_transform_point, shape_affine, transform_point};
pub use bounds::{bounding_box_of, handles_of, sample_points, shape_bounds};
pub use config::{ConfigError, InteractionConfig};
pub use controller::{ControllerSnapshot, EditMode, Effect, InteractionController, Phase};
pub use hit::{find_handle_hit, point_in_box, point_in_shape};
pub use input::{MouseButton, PointerEvent};
pub use shapes::EditableEllipse;
pub use widget::{Corner, Edge, Handle, HandleKind};
