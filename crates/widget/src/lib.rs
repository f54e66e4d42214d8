//! Declarative control and overlay menu adapters for buttonkit.
//!
//! [`control`] projects a configuration tree into in-view controls on every
//! refresh. [`overlay`] presents lazily supplied menus and owns their
//! presentation lifecycle.
pub use buttonkit_core as core;

pub mod control;
pub mod overlay;

pub use control::{ControlBuilder, Controls};
pub use overlay::{
    OverlayMenu, OverlayPresenter, Placement, Presentation, PresentationFailure,
    PresentationState, Selection,
};
