//! Interaction state machine: turns pointer events into shape edits.
//!
//! Each event is handled to completion before the next one arrives, and
//! every handler returns an [`Effect`] telling the host whether a redraw is
//! needed. Nothing here depends on a live event loop.

use crate::bounds::{handles_of, shape_bounds};
use crate::config::InteractionConfig;
use crate::hit::{find_handle_hit, point_in_box, point_in_shape_with_epsilon};
use crate::input::{MouseButton, PointerEvent};
use crate::shapes::EditableEllipse;
use crate::widget::{Corner, Handle, HandleKind};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// What dragging a handle does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Corners resize, edge midpoints shear.
    #[default]
    ResizeShear,
    /// Every handle rotates about the center.
    Rotate,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::ResizeShear => EditMode::Rotate,
            EditMode::Rotate => EditMode::ResizeShear,
        }
    }
}

/// Lifecycle of the single editable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// No shape yet.
    #[default]
    Idle,
    /// Center placed; radii follow the pointer until the next press.
    Creating,
    /// Shape finalized. `box_visible` controls whether box and handles show.
    Created { box_visible: bool },
}

/// Side effect requested by an event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
}

impl Effect {
    pub fn needs_redraw(self) -> bool {
        self == Effect::Redraw
    }
}

/// An in-progress handle drag.
#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Handle being dragged, with its most recent position.
    handle: Handle,
    /// Screen point that stays fixed for the duration of the drag.
    anchor: Point,
}

/// Mode and drag bookkeeping, owned by the controller.
#[derive(Debug, Clone, Default)]
struct InteractionState {
    phase: Phase,
    mode: EditMode,
    drag: Option<DragState>,
    /// Position of the previous pointer event of any kind, not only the
    /// previous move. Drag deltas are measured from here, so a drag's first
    /// move is relative to the press that started it.
    last_pointer: Option<Point>,
}

/// Everything a renderer needs for one frame, detached from the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    #[serde(flatten)]
    pub phase: Phase,
    pub edit_mode: EditMode,
    pub shape: Option<EditableEllipse>,
    pub bounding_box: Option<Rect>,
    pub handles: Vec<Handle>,
    pub active_handle: Option<Handle>,
    pub active_anchor: Option<Point>,
    /// The shear can't be inverted; interior hit-tests report "outside".
    pub shear_degenerate: bool,
}

/// Owns the shape and the interaction state; the only writer of either.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    config: InteractionConfig,
    shape: Option<EditableEllipse>,
    state: InteractionState,
}

impl InteractionController {
    /// Create a controller with no shape.
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            shape: None,
            state: InteractionState::default(),
        }
    }

    /// Create a controller around an existing shape, box visible, in resize mode.
    pub fn with_shape(config: InteractionConfig, mut shape: EditableEllipse) -> Self {
        shape.clamp_radii(config.min_radius);
        Self {
            config,
            shape: Some(shape),
            state: InteractionState {
                phase: Phase::Created { box_visible: true },
                ..InteractionState::default()
            },
        }
    }

    /// Drop the shape and return to `Idle`.
    pub fn reset(&mut self) {
        log::debug!("reset to idle");
        self.shape = None;
        self.state = InteractionState::default();
    }

    /// Process one pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) -> Effect {
        let effect = match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.on_primary_down(position),
            PointerEvent::Down {
                button: MouseButton::Right,
                ..
            } => self.on_secondary(),
            PointerEvent::Move { position } => self.on_move(position),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => self.on_primary_up(),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => Effect::None,
        };
        self.state.last_pointer = Some(event.position());
        effect
    }

    // --- Accessors -------------------------------------------------------

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn shape(&self) -> Option<&EditableEllipse> {
        self.shape.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn edit_mode(&self) -> EditMode {
        self.state.mode
    }

    pub fn is_creating(&self) -> bool {
        self.state.phase == Phase::Creating
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_some()
    }

    pub fn is_box_visible(&self) -> bool {
        self.state.phase == Phase::Created { box_visible: true }
    }

    /// Handle currently being dragged.
    pub fn active_handle(&self) -> Option<Handle> {
        self.state.drag.map(|drag| drag.handle)
    }

    /// Fixed point of the current drag.
    pub fn active_anchor(&self) -> Option<Point> {
        self.state.drag.map(|drag| drag.anchor)
    }

    /// Sampled screen-space bounds of the shape, if there is one.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.shape
            .as_ref()
            .map(|shape| shape_bounds(shape, self.config.sample_steps))
    }

    /// The eight handles of the current bounding box.
    pub fn handles(&self) -> Option<[Handle; 8]> {
        self.bounding_box().map(handles_of)
    }

    /// Handle under `point`, only while handles are shown.
    pub fn hovered_handle(&self, point: Point) -> Option<Handle> {
        if !self.is_box_visible() {
            return None;
        }
        let handles = self.handles()?;
        find_handle_hit(&handles, point, self.config.handle_hit_radius)
    }

    /// Whether the current shear is too close to singular to invert.
    pub fn is_shear_degenerate(&self) -> bool {
        self.shape
            .as_ref()
            .is_some_and(|shape| shape.shear_determinant().abs() < self.config.degenerate_epsilon)
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            phase: self.state.phase,
            edit_mode: self.state.mode,
            shape: self.shape.clone(),
            bounding_box: self.bounding_box(),
            handles: self.handles().map(Vec::from).unwrap_or_default(),
            active_handle: self.active_handle(),
            active_anchor: self.active_anchor(),
            shear_degenerate: self.is_shear_degenerate(),
        }
    }

    // --- Transitions -----------------------------------------------------

    fn on_primary_down(&mut self, position: Point) -> Effect {
        match self.state.phase {
            Phase::Idle => {
                self.shape = Some(EditableEllipse::new(position, 0.0, 0.0));
                self.state.phase = Phase::Creating;
                log::debug!("idle -> creating at {position:?}");
                Effect::Redraw
            }
            Phase::Creating => {
                let Some(shape) = self.shape.as_mut() else {
                    return Effect::None;
                };
                if shape.radius_x == 0.0 && shape.radius_y == 0.0 {
                    shape.radius_x = self.config.default_radius;
                    shape.radius_y = self.config.default_radius;
                }
                shape.clamp_radii(self.config.min_radius);
                self.state.phase = Phase::Created { box_visible: true };
                self.state.mode = EditMode::ResizeShear;
                log::debug!(
                    "creating -> created: radii ({}, {})",
                    shape.radius_x,
                    shape.radius_y
                );
                Effect::Redraw
            }
            Phase::Created { box_visible: true } => self.on_visible_down(position),
            Phase::Created { box_visible: false } => {
                let Some(shape) = self.shape.as_ref() else {
                    return Effect::None;
                };
                if point_in_shape_with_epsilon(position, shape, self.config.degenerate_epsilon) {
                    self.state.phase = Phase::Created { box_visible: true };
                    self.state.mode = EditMode::ResizeShear;
                    log::debug!("box shown");
                    Effect::Redraw
                } else {
                    Effect::None
                }
            }
        }
    }

    fn on_visible_down(&mut self, position: Point) -> Effect {
        if self.state.drag.is_some() {
            return Effect::None;
        }
        let (Some(shape), Some(bounds)) = (self.shape.as_ref(), self.bounding_box()) else {
            return Effect::None;
        };

        let handles = handles_of(bounds);
        if let Some(handle) = find_handle_hit(&handles, position, self.config.handle_hit_radius) {
            let anchor = match (self.state.mode, handle.kind) {
                (EditMode::ResizeShear, HandleKind::Corner(corner)) => {
                    corner.opposite().point_on(bounds)
                }
                (EditMode::ResizeShear, HandleKind::Edge(_)) | (EditMode::Rotate, _) => {
                    shape.center
                }
            };
            log::debug!("drag start on {} anchored at {anchor:?}", handle.kind);
            self.state.drag = Some(DragState { handle, anchor });
            return Effect::Redraw;
        }

        if point_in_box(position, bounds) {
            self.state.mode = self.state.mode.toggled();
            log::debug!("edit mode -> {:?}", self.state.mode);
            return Effect::Redraw;
        }
        Effect::None
    }

    fn on_secondary(&mut self) -> Effect {
        match self.state.phase {
            Phase::Created { box_visible: true } => {
                self.state.phase = Phase::Created { box_visible: false };
                log::debug!("box hidden");
                Effect::Redraw
            }
            _ => Effect::None,
        }
    }

    fn on_primary_up(&mut self) -> Effect {
        match self.state.drag.take() {
            Some(drag) => {
                log::debug!("drag end on {}", drag.handle.kind);
                Effect::Redraw
            }
            None => Effect::None,
        }
    }

    fn on_move(&mut self, position: Point) -> Effect {
        if self.state.phase == Phase::Creating {
            let Some(shape) = self.shape.as_mut() else {
                return Effect::None;
            };
            shape.radius_x = (position.x - shape.center.x).abs();
            shape.radius_y = (position.y - shape.center.y).abs();
            return Effect::Redraw;
        }

        let (Some(drag), Some(last)) = (self.state.drag, self.state.last_pointer) else {
            return Effect::None;
        };
        let Some(shape) = self.shape.as_mut() else {
            return Effect::None;
        };
        let delta = position - last;

        match (self.state.mode, drag.handle.kind) {
            (EditMode::Rotate, _) => {
                shape.rotation += delta.x * self.config.rotation_speed;
            }
            (EditMode::ResizeShear, HandleKind::Edge(edge)) => {
                if edge.is_horizontal() {
                    shape.shear_x += delta.x * self.config.shear_sensitivity;
                } else {
                    shape.shear_y += delta.y * self.config.shear_sensitivity;
                }
                if shape.shear_determinant().abs() < self.config.degenerate_epsilon {
                    log::warn!("shear ({}, {}) is degenerate", shape.shear_x, shape.shear_y);
                }
            }
            (EditMode::ResizeShear, HandleKind::Corner(corner)) => {
                resize_from_corner(shape, corner, delta, drag.anchor, &self.config);
            }
        }
        log::trace!(
            "{} moved by {delta:?}: center {:?} radii ({:.2}, {:.2}) \
             shear ({:.3}, {:.3}) rotation {:.3}",
            drag.handle.kind,
            shape.center,
            shape.radius_x,
            shape.radius_y,
            shape.shear_x,
            shape.shear_y,
            shape.rotation
        );

        let bounds = shape_bounds(shape, self.config.sample_steps);
        if let Some(active) = self.state.drag.as_mut() {
            active.handle.position = active.handle.kind.point_on(bounds);
        }
        Effect::Redraw
    }
}

/// Resize `shape` from `corner` while keeping `anchor` (the opposite corner of
/// the bounding box) fixed on screen.
///
/// Under shear and rotation the box is not a simple function of center and
/// radii, so the new center is found by probing: the resized shape is sampled
/// at the origin, and its center is placed so that the probe's opposite
/// corner lands on `anchor`.
pub fn resize_from_corner(
    shape: &mut EditableEllipse,
    corner: Corner,
    delta: Vec2,
    anchor: Point,
    config: &InteractionConfig,
) {
    let (sign_x, sign_y) = corner.signs();
    let radius_x = (shape.radius_x + sign_x * delta.x).max(config.min_radius);
    let radius_y = (shape.radius_y + sign_y * delta.y).max(config.min_radius);

    let probe_bounds = shape_bounds(&shape.zero_centered(radius_x, radius_y), config.sample_steps);
    let anchor_offset = corner.opposite().point_on(probe_bounds).to_vec2();

    shape.radius_x = radius_x;
    shape.radius_y = radius_y;
    shape.center = anchor - anchor_offset;
}
