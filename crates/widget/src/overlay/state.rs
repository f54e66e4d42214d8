//! Lifecycle of an overlay presentation.

/// Where an [`OverlayMenu`](super::OverlayMenu) is in its presentation cycle.
///
/// ```text
/// Idle -> Presenting -> Shown -> Dismissed -> Idle
///            |
///            +-> Idle (supplier failed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationState {
    /// Nothing is presented.
    #[default]
    Idle,
    /// The content supplier is running.
    Presenting,
    /// The overlay is on screen.
    Shown,
    /// The overlay is being torn down.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Transition {
    Trigger,
    Supplied,
    Failed,
    Dismiss,
    TearDown,
}

impl PresentationState {
    /// Returns `true` while a presentation is in progress or on screen.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Presenting | Self::Shown)
    }

    pub(super) fn next(self, transition: Transition) -> Option<Self> {
        match (self, transition) {
            (Self::Idle, Transition::Trigger) => Some(Self::Presenting),
            (Self::Presenting, Transition::Supplied) => Some(Self::Shown),
            (Self::Presenting, Transition::Failed) => Some(Self::Idle),
            (Self::Shown, Transition::Dismiss) => Some(Self::Dismissed),
            (Self::Dismissed, Transition::TearDown) => Some(Self::Idle),
            _ => None,
        }
    }
}
