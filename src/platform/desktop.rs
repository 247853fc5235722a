//! Desktop platform implementation.

use std::time::Duration;

use glam::UVec2;
use rand::rngs::ThreadRng;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::error::PlatformError;
use crate::formatter::CustomFormatter;

/// Sleeps out the rest of a frame; spins for precision only while the window has focus.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_console() -> Result<(), PlatformError> {
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(true)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .event_format(CustomFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {}", e)))
}

/// The desktop window is sized by the command line, not by a page.
pub fn host_viewport() -> Option<UVec2> {
    None
}

pub fn rng() -> ThreadRng {
    rand::rng()
}
