use std::time::Duration;

use crate::slide::Slide;

/// Everything the carousel loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    /// "Previous Slide" control activated.
    Previous,
    /// "Next Slide" control activated.
    Next,
    /// "Toggle Slide Rotation" control activated.
    ToggleRotation,
    /// Emitted by the rotation timer; `generation` identifies which start of
    /// the timer produced it.
    RotationTick { generation: u64 },
    /// Replace the slide list.
    SetSlides(Vec<Slide>),
    /// Change the rotation period.
    SetInterval(Duration),
}
