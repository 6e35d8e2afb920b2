//! Model for the lover page
//!
//! Everything here is host independent and runs natively:
//! - popup lifecycle (Closed / Open / Minimized)
//! - drag sessions and the viewport clamp
//! - thumbnail gallery sync
//! - image fit policy, hero typewriter and page configuration
//!
//! The Dioxus front end in `lover-web` owns these values in signals and maps
//! DOM events onto their operations.

pub mod config;
pub mod drag;
pub mod gallery;
pub mod geometry;
pub mod image_fit;
pub mod popup;
pub mod typewriter;

pub use config::{ConfigError, PageConfig};
pub use drag::{primary_point, DragController, DragSession};
pub use gallery::{FadeSwap, Gallery, ImageDisplay, Thumbnail};
pub use geometry::{clamp_axis, clamp_to_viewport, Point, Rect, Size};
pub use image_fit::ImageFit;
pub use popup::{Placement, PopupEffect, PopupState, PopupWidget, Transition};
pub use typewriter::Typewriter;
