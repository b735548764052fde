//! Renderer trait abstraction.

use crate::scene::{DisplayList, DrawCommand, HandleGlyph};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Non-finite geometry in {0} command")]
    NonFiniteGeometry(&'static str),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors and sizes used when building a display list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Background color, cleared at the start of every frame.
    pub background_color: Color,
    /// Ellipse outline color.
    pub outline_color: Color,
    /// Outline stroke width.
    pub outline_width: f64,
    /// Bounding box and handle color.
    pub selection_color: Color,
    /// Color of the handle being dragged.
    pub active_handle_color: Color,
    /// Anchor marker color.
    pub anchor_color: Color,
    /// Drawn handle radius (independent of the hit radius).
    pub handle_radius: f64,
    /// Anchor marker radius.
    pub anchor_radius: f64,
    /// Flattening tolerance for the outline path.
    pub path_tolerance: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(250, 250, 250, 255),
            outline_color: Color::from_rgba8(30, 30, 30, 255),
            outline_width: 2.0,
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
            active_handle_color: Color::from_rgba8(239, 68, 68, 255),
            anchor_color: Color::from_rgba8(16, 185, 129, 255),
            handle_radius: 5.0,
            anchor_radius: 4.0,
            path_tolerance: 0.1,
        }
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, a 2D canvas, or anything else that can
/// stroke paths and fill circles.
pub trait Renderer {
    /// Consume the display list for one frame.
    fn build_scene(&mut self, list: &DisplayList) -> RenderResult<()>;
}

/// Renderer that only tallies what it was asked to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandCounter {
    pub clears: usize,
    pub outlines: usize,
    pub boxes: usize,
    pub filled_handles: usize,
    pub arc_handles: usize,
    pub anchors: usize,
    pub frames: usize,
}

impl Renderer for CommandCounter {
    fn build_scene(&mut self, list: &DisplayList) -> RenderResult<()> {
        for command in list.commands() {
            if !command.is_finite() {
                return Err(RendererError::NonFiniteGeometry(command.name()));
            }
        }
        for command in list.commands() {
            match command {
                DrawCommand::Clear { .. } => self.clears += 1,
                DrawCommand::Outline { .. } => self.outlines += 1,
                DrawCommand::BoundingBox { .. } => self.boxes += 1,
                DrawCommand::Handle { glyph: HandleGlyph::Disc(_), .. } => self.filled_handles += 1,
                DrawCommand::Handle { glyph: HandleGlyph::HalfArc(_), .. } => self.arc_handles += 1,
                DrawCommand::AnchorMarker { .. } => self.anchors += 1,
            }
        }
        self.frames += 1;
        log::trace!("frame {} with {} commands", self.frames, list.len());
        Ok(())
    }
}
