//! Centralized error types for the animation.
//!
//! Drawing and configuration failures each get their own enum; `BackdropError` wraps them
//! for public APIs.

/// Main error type for the animation.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Errors raised while validating configuration or parsing the command line.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Band '{name}' is invalid: min {min} must be finite and not exceed max {max}")]
    InvalidBand { name: &'static str, min: f32, max: f32 },

    #[error("Square sizes must be strictly positive, got minimum {0}")]
    NonPositiveSize(f32),

    #[error("'{name}' must lie within 0..=100, got {value}")]
    OutOfPercentRange { name: &'static str, value: f32 },

    #[error("Missing value for argument '{0}'")]
    MissingValue(String),

    #[error("Invalid value '{value}' for argument '{argument}'")]
    InvalidValue { argument: String, value: String },

    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Errors reported by drawing surfaces.
#[derive(thiserror::Error, Debug)]
pub enum SurfaceError {
    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("Resizing to {width}x{height} failed: {reason}")]
    Resize { width: u32, height: u32, reason: String },
}

/// Result type for animation operations.
pub type BackdropResult<T> = Result<T, BackdropError>;
