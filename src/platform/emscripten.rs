//! Emscripten platform implementation.

use crate::error::PlatformError;
use crate::formatter::CustomFormatter;
use glam::UVec2;
use rand::{rngs::SmallRng, SeedableRng};
use std::ffi::{c_void, CString};
use std::io::{self, Write};
use std::os::raw::c_int;

/// Callback invoked by the browser once per animation frame.
pub type EmMainLoopCallback = unsafe extern "C" fn(*mut c_void);

// Emscripten FFI functions
extern "C" {
    fn emscripten_get_element_css_size(target: *const u8, width: *mut f64, height: *mut f64) -> c_int;
    // Standard C functions that Emscripten redirects to console
    fn printf(format: *const u8, ...) -> i32;

    /// Runs `func` once per frame. `fps = 0` drives it from `requestAnimationFrame`;
    /// `simulate_infinite_loop = 1` means the call never returns.
    pub fn emscripten_set_main_loop_arg(func: EmMainLoopCallback, arg: *mut c_void, fps: c_int, simulate_infinite_loop: c_int);
}

pub fn init_console() -> Result<(), PlatformError> {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    // Browser console via printf; there are no ANSI colors there.
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(|| EmscriptenConsoleWriter)
                .with_ansi(false)
                .event_format(CustomFormatter),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {}", e)))
}

/// A writer that outputs to the browser console via printf (redirected by emscripten)
struct EmscriptenConsoleWriter;

impl Write for EmscriptenConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(s) = std::str::from_utf8(buf) {
            if let Ok(line) = CString::new(s.trim_end_matches('\n')) {
                unsafe {
                    printf(c"%s\n".as_ptr().cast(), line.as_ptr());
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The CSS size of the page's `<canvas>` element, which stands in for the window.
pub fn host_viewport() -> Option<UVec2> {
    let mut width = 0.0;
    let mut height = 0.0;

    unsafe {
        emscripten_get_element_css_size(c"canvas".as_ptr().cast(), &mut width, &mut height);
    }
    if width < 1.0 || height < 1.0 {
        return None;
    }
    Some(UVec2::new(width as u32, height as u32))
}

pub fn rng() -> SmallRng {
    SmallRng::from_os_rng()
}
