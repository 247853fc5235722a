#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;
use std::process::ExitCode;

use backdrop::app::App;
use backdrop::config::{AnimationConfig, LaunchOptions};
use backdrop::platform;
use tracing::info;

// Emscripten-specific: static storage for the App instance
// Required because emscripten_set_main_loop_arg needs a persistent pointer
#[cfg(target_os = "emscripten")]
static mut APP: Option<App> = None;

/// Emscripten main loop callback - runs once per animation frame
#[cfg(target_os = "emscripten")]
unsafe extern "C" fn main_loop_callback(_arg: *mut std::ffi::c_void) {
    if let Some(ref mut app) = APP {
        let _ = app.run();
    }
}

/// The main entry point of the application.
///
/// Parses the command line, sets up logging and the window, then hands control to the
/// refresh-driven loop for the rest of the process lifetime.
pub fn main() -> ExitCode {
    let options = match LaunchOptions::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n\n{}", LaunchOptions::USAGE);
            return ExitCode::FAILURE;
        }
    };
    if options.show_help {
        println!("{}", LaunchOptions::USAGE);
        return ExitCode::SUCCESS;
    }

    platform::init_console().expect("Could not initialize console");

    let config = AnimationConfig::default();
    let app = App::new(&options, &config).expect("Could not create app");

    info!(squares = app.animation().squares().len(), vsync = options.vsync, "Starting animation loop");

    #[cfg(target_os = "emscripten")]
    {
        use std::ptr;

        unsafe {
            APP = Some(app);
        }

        // fps=0 means use requestAnimationFrame; simulate_infinite_loop=1 means this call won't return
        unsafe {
            platform::emscripten_set_main_loop_arg(main_loop_callback, ptr::null_mut(), 0, 1);
        }
    }

    #[cfg(not(target_os = "emscripten"))]
    {
        let mut app = app;
        while app.run() {}
    }

    ExitCode::SUCCESS
}
