//! Drag gesture tracking for the popup handle.

use crate::geometry::{clamp_to_viewport, Point, Rect, Size, DEFAULT_MARGIN_PX};
use crate::popup::Placement;

/// One in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_start: Point,
    pub widget_start: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    session: Option<DragSession>,
    margin: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_PX)
    }
}

impl DragController {
    pub fn new(margin: f64) -> Self {
        Self {
            session: None,
            margin,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Start a gesture at `pointer` over a widget currently laid out at
    /// `widget_rect`. Returns false if a gesture is already running.
    pub fn begin(&mut self, pointer: Point, widget_rect: Rect) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer_start: pointer,
            widget_start: widget_rect.origin(),
        });
        true
    }

    /// Follow the pointer. `size` is the widget's current bounding size.
    /// Returns `None` when no gesture is running.
    pub fn continue_drag(&self, pointer: Point, size: Size, viewport: Size) -> Option<Placement> {
        let session = self.session?;
        let delta = pointer.offset_from(session.pointer_start);
        let proposed = session.widget_start.translate(delta);
        let clamped = clamp_to_viewport(proposed, size, viewport, self.margin);
        Some(Placement::new(clamped, size))
    }

    /// Drop the gesture. Returns whether one was running; calling again is a no-op.
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }
}

/// Pick the tracked point of a gesture: the first touch when the event carried
/// touches, the mouse position otherwise. Extra touches are ignored.
pub fn primary_point(touches: &[Point], mouse: Option<Point>) -> Option<Point> {
    touches.first().copied().or(mouse)
}
