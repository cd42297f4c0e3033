use thiserror::Error;

/// Library error type for carousel construction and reconfiguration.
///
/// Transitions themselves never fail; only the inputs that shape a carousel do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// The rotation period must be strictly positive.
    #[error("rotation interval must be greater than zero")]
    ZeroInterval,

    /// A supplied slide has no image URL.
    #[error("slide {index} has an empty url")]
    MissingUrl { index: usize },
}
