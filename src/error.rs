use thiserror::Error;

/// Failures the engine recovers from or contains; none of them escape a tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    /// The canvas has not been laid out yet; seeding waits for a resize.
    #[error("layout not ready: canvas is {width}x{height}")]
    LayoutNotReady { width: f64, height: f64 },

    /// No 2-D drawing context; rendering is disabled for the instance.
    #[error("2d context unavailable: {0}")]
    ContextUnavailable(String),

    /// A configuration value was replaced by a safe default.
    #[error("invalid config: {0}")]
    ConfigInvalid(String),
}
