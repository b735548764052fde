//! Manipulation handles derived from a shape's bounding box.
//!
//! Handles are never stored: they are recomputed from the current bounds
//! whenever they are needed, so they can't go stale.

mod handles;

pub use handles::{Corner, Edge, HANDLE_ORDER, Handle, HandleKind};
