//! Common error type for synthesis runs.
//!
//! Every failure aborts the current run; there is no retry policy
//! anywhere. Length-mismatch truncation in the buffer algebra is
//! defined behavior, not an error (see `dsp::buffer`).

/// Errors surfaced to the caller of a synthesis run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A numeric parameter is out of range, or channel shapes don't
    /// line up (unsupported channel count, unequal lengths at encode
    /// time).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A caller programming error, such as non-monotonic breakpoint
    /// positions. Never recovered.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// I/O error while writing the output container.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The system audio backend failed to open or run a stream.
    #[cfg(feature = "playback")]
    #[error("playback error: {0}")]
    Playback(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
