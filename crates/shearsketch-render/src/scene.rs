//! Display list construction from controller state.

use crate::renderer::RenderStyle;
use kurbo::{Arc, BezPath, Circle, Point, Rect, Vec2};
use peniko::Color;
use shearsketch_core::{EditMode, HandleKind, InteractionController};
use std::f64::consts::PI;

/// How a handle is drawn.
#[derive(Debug, Clone, Copy)]
pub enum HandleGlyph {
    /// Filled circle (resize/shear mode).
    Disc(Circle),
    /// Upper half-circle arc (rotate mode).
    HalfArc(Arc),
}

/// One drawing instruction, in screen coordinates.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill the whole surface with the background color.
    Clear { color: Color },
    /// Stroke the ellipse outline.
    Outline {
        path: BezPath,
        color: Color,
        width: f64,
    },
    /// Stroke the sampled bounding box.
    BoundingBox { rect: Rect, color: Color },
    /// Draw one of the eight handles.
    Handle {
        kind: HandleKind,
        glyph: HandleGlyph,
        color: Color,
        active: bool,
    },
    /// Mark the point that stays fixed during a drag.
    AnchorMarker { center: Point, radius: f64, color: Color },
}

impl DrawCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::Clear { .. } => "clear",
            DrawCommand::Outline { .. } => "outline",
            DrawCommand::BoundingBox { .. } => "bounding box",
            DrawCommand::Handle { .. } => "handle",
            DrawCommand::AnchorMarker { .. } => "anchor marker",
        }
    }

    /// Whether every coordinate in the command is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCommand::Clear { .. } => true,
            DrawCommand::Outline { path, .. } => path.is_finite(),
            DrawCommand::BoundingBox { rect, .. } => rect.is_finite(),
            DrawCommand::Handle { glyph: HandleGlyph::Disc(circle), .. } => {
                circle.center.is_finite() && circle.radius.is_finite()
            }
            DrawCommand::Handle { glyph: HandleGlyph::HalfArc(arc), .. } => {
                arc.center.is_finite() && arc.radii.is_finite()
            }
            DrawCommand::AnchorMarker { center, radius, .. } => {
                center.is_finite() && radius.is_finite()
            }
        }
    }
}

/// Ordered drawing instructions for one frame, back to front.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Build the display list for the controller's current state.
///
/// Every list starts with a clear. The outline is drawn whenever a shape
/// exists (including the live preview while creating). Box and handles follow
/// visibility; the anchor marker is only drawn mid-drag.
pub fn build_display_list(ctrl: &InteractionController, style: &RenderStyle) -> DisplayList {
    let mut list = DisplayList::default();
    list.push(DrawCommand::Clear {
        color: style.background_color,
    });
    let Some(shape) = ctrl.shape() else {
        return list;
    };

    list.push(DrawCommand::Outline {
        path: shape.to_path(style.path_tolerance),
        color: style.outline_color,
        width: style.outline_width,
    });

    if ctrl.is_box_visible() {
        if let (Some(bounds), Some(handles)) = (ctrl.bounding_box(), ctrl.handles()) {
            list.push(DrawCommand::BoundingBox {
                rect: bounds,
                color: style.selection_color,
            });

            let active_kind = ctrl.active_handle().map(|handle| handle.kind);
            for handle in handles {
                let glyph = match ctrl.edit_mode() {
                    EditMode::ResizeShear => {
                        HandleGlyph::Disc(Circle::new(handle.position, style.handle_radius))
                    }
                    EditMode::Rotate => HandleGlyph::HalfArc(Arc {
                        center: handle.position,
                        radii: Vec2::new(style.handle_radius, style.handle_radius),
                        start_angle: PI,
                        sweep_angle: PI,
                        x_rotation: 0.0,
                    }),
                };
                let active = active_kind == Some(handle.kind);
                list.push(DrawCommand::Handle {
                    kind: handle.kind,
                    glyph,
                    color: if active {
                        style.active_handle_color
                    } else {
                        style.selection_color
                    },
                    active,
                });
            }
        }
    }

    if let Some(anchor) = ctrl.active_anchor() {
        list.push(DrawCommand::AnchorMarker {
            center: anchor,
            radius: style.anchor_radius,
            color: style.anchor_color,
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandCounter, Renderer};
    use shearsketch_core::{Corner, PointerEvent};

    fn created() -> InteractionController {
        let mut ctrl = InteractionController::default();
        ctrl.handle_event(PointerEvent::down(100.0, 100.0));
        ctrl.handle_event(PointerEvent::moved(150.0, 130.0));
        ctrl.handle_event(PointerEvent::down(150.0, 130.0));
        ctrl
    }

    fn count(ctrl: &InteractionController) -> CommandCounter {
        let mut counter = CommandCounter::default();
        counter
            .build_scene(&build_display_list(ctrl, &RenderStyle::default()))
            .unwrap();
        counter
    }

    #[test]
    fn test_idle_only_clears() {
        let ctrl = InteractionController::default();
        let style = RenderStyle {
            background_color: Color::from_rgba8(1, 2, 3, 255),
            ..RenderStyle::default()
        };
        let list = build_display_list(&ctrl, &style);
        assert_eq!(list.len(), 1);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Clear { color } if color == style.background_color
        ));
    }

    #[test]
    fn test_creating_draws_preview_only() {
        let mut ctrl = InteractionController::default();
        ctrl.handle_event(PointerEvent::down(100.0, 100.0));
        ctrl.handle_event(PointerEvent::moved(130.0, 110.0));
        let counter = count(&ctrl);
        assert_eq!(counter.outlines, 1);
        assert_eq!(counter.boxes, 0);
        assert_eq!(counter.filled_handles, 0);
    }

    #[test]
    fn test_resize_mode_draws_discs() {
        let counter = count(&created());
        assert_eq!(counter.clears, 1);
        assert_eq!(counter.outlines, 1);
        assert_eq!(counter.boxes, 1);
        assert_eq!(counter.filled_handles, 8);
        assert_eq!(counter.arc_handles, 0);
        assert_eq!(counter.anchors, 0);
    }

    #[test]
    fn test_rotate_mode_draws_arcs() {
        let mut ctrl = created();
        ctrl.handle_event(PointerEvent::down(80.0, 90.0));
        let counter = count(&ctrl);
        assert_eq!(counter.arc_handles, 8);
        assert_eq!(counter.filled_handles, 0);
    }

    #[test]
    fn test_drag_draws_anchor_and_active_handle() {
        let mut ctrl = created();
        ctrl.handle_event(PointerEvent::down(150.0, 130.0));
        let list = build_display_list(&ctrl, &RenderStyle::default());

        let anchor = list.commands().iter().find_map(|command| match command {
            DrawCommand::AnchorMarker { center, .. } => Some(*center),
            _ => None,
        });
        let anchor = anchor.unwrap();
        assert!((anchor.x - 50.0).abs() < 1e-9);
        assert!((anchor.y - 70.0).abs() < 1e-9);

        let active: Vec<HandleKind> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Handle { kind, active: true, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![HandleKind::Corner(Corner::BottomRight)]);
    }

    #[test]
    fn test_hidden_draws_outline_only() {
        let mut ctrl = created();
        ctrl.handle_event(PointerEvent::secondary(0.0, 0.0));
        let counter = count(&ctrl);
        assert_eq!(counter.outlines, 1);
        assert_eq!(counter.boxes, 0);
        assert_eq!(counter.filled_handles + counter.arc_handles, 0);
    }

    #[test]
    fn test_rejects_non_finite_geometry() {
        let mut list = DisplayList::default();
        list.push(DrawCommand::AnchorMarker {
            center: Point::new(f64::NAN, 0.0),
            radius: 4.0,
            color: RenderStyle::default().anchor_color,
        });
        let mut counter = CommandCounter::default();
        assert!(counter.build_scene(&list).is_err());
        assert_eq!(counter.frames, 0);
    }
}
