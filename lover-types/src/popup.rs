//! Popup lifecycle: Closed, Open and Minimized.
//!
//! The state is the only stored fact. Overlay visibility, the `aria-hidden`
//! value and the mini preview visibility are all derived from it, so the
//! mini preview can never be shown while the popup is anything but minimized.

use serde::{Deserialize, Serialize};

use crate::geometry::{clamp_to_viewport, Point, Size};

/// Delay before focusing the first interactive child after opening.
pub const DEFAULT_FOCUS_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupState {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// Deferred work the host must run after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEffect {
    /// Focus the first `.thumb` or `button` inside the popup after `delay_ms`.
    ScheduleFocus { delay_ms: u32 },
}

/// Outcome of one popup operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: PopupState,
    pub to: PopupState,
    pub effect: Option<PopupEffect>,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Dragged placement: the clamped top-left and the size it was clamped with.
///
/// Applied as a fixed, center-anchored position so it composes with the
/// stylesheet's `translate(-50%, -50%)` centering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn new(top_left: Point, size: Size) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The same placement pulled back inside `viewport`.
    pub fn clamped_to(&self, viewport: Size, margin: f64) -> Placement {
        let top_left = clamp_to_viewport(self.top_left(), self.size(), viewport, margin);
        Placement::new(top_left, self.size())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupWidget {
    state: PopupState,
    placement: Option<Placement>,
    focus_delay_ms: u32,
}

impl Default for PopupWidget {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DELAY_MS)
    }
}

impl PopupWidget {
    pub fn new(focus_delay_ms: u32) -> Self {
        Self {
            state: PopupState::Closed,
            placement: None,
            focus_delay_ms,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn overlay_visible(&self) -> bool {
        self.state == PopupState::Open
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.overlay_visible() {
            "false"
        } else {
            "true"
        }
    }

    pub fn mini_preview_visible(&self) -> bool {
        self.state == PopupState::Minimized
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Store a placement produced by the drag controller. State is untouched.
    pub fn move_to(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Re-clamp a dragged placement after the viewport changed size.
    /// Returns whether the placement moved.
    pub fn reclamp(&mut self, viewport: Size, margin: f64) -> bool {
        let Some(current) = self.placement else {
            return false;
        };
        let clamped = current.clamped_to(viewport, margin);
        self.placement = Some(clamped);
        clamped != current
    }

    /// Show the popup. Re-opening an open popup only re-schedules focus;
    /// opening a minimized popup is a restore.
    pub fn open(&mut self) -> Transition {
        let from = self.state;
        self.state = PopupState::Open;
        Transition {
            from,
            to: self.state,
            effect: Some(PopupEffect::ScheduleFocus {
                delay_ms: self.focus_delay_ms,
            }),
        }
    }

    pub fn close(&mut self) -> Transition {
        self.transition_to(PopupState::Closed)
    }

    /// Only meaningful while open; ignored otherwise.
    pub fn minimize(&mut self) -> Transition {
        if self.state != PopupState::Open {
            return self.unchanged();
        }
        self.transition_to(PopupState::Minimized)
    }

    /// Only meaningful while minimized; ignored otherwise.
    pub fn restore(&mut self) -> Transition {
        if self.state != PopupState::Minimized {
            return self.unchanged();
        }
        self.open()
    }

    /// Document-level keydown. Escape closes from any state.
    pub fn handle_key(&mut self, key: &str) -> Transition {
        if key == "Escape" {
            self.close()
        } else {
            self.unchanged()
        }
    }

    /// Click on the overlay. Closes only when the click hit the backdrop
    /// itself rather than something inside the popup.
    pub fn handle_backdrop_click(&mut self, target_is_backdrop: bool) -> Transition {
        if target_is_backdrop {
            self.close()
        } else {
            self.unchanged()
        }
    }

    fn transition_to(&mut self, to: PopupState) -> Transition {
        let from = self.state;
        self.state = to;
        Transition {
            from,
            to,
            effect: None,
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            from: self.state,
            to: self.state,
            effect: None,
        }
    }
}
