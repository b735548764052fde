//! ShearSketch Render Library
//!
//! Turns controller state into a backend-neutral display list. Drawing the
//! list onto an actual surface is left to a [`Renderer`] implementation.

mod renderer;
mod scene;

pub use renderer::{CommandCounter, RenderResult, RenderStyle, Renderer, RendererError};
pub use scene::{DisplayList, DrawCommand, HandleGlyph, build_display_list};
