use thiserror::Error;

/// Errors raised by control operations.
///
/// Every variant is raised before any state changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NeoError {
    /// A progress target outside [0, 1] (or NaN).
    #[error("progress should be between 0 and 1, got {value}")]
    ProgressOutOfRange { value: f32 },

    /// An animation was requested with a zero length.
    #[error("animation `{name}` needs a non-zero length")]
    InvalidDuration { name: &'static str },
}

pub type Result<T, E = NeoError> = std::result::Result<T, E>;
