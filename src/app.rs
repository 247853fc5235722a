use std::time::Instant;

use glam::UVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::event::{Event, WindowEvent};
#[cfg(not(target_os = "emscripten"))]
use sdl2::keyboard::Keycode;
use sdl2::{EventPump, Sdl};
use tracing::{debug, error, info, trace, warn};

use crate::animation::AnimationLoop;
use crate::config::{AnimationConfig, LaunchOptions};
use crate::constants::WINDOW_TITLE;
use crate::error::{BackdropError, BackdropResult};
use crate::formatter;
use crate::platform;
use crate::render::CanvasSurface;
use crate::scheduler::RefreshScheduler;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Hosts the animation in an SDL window: owns the canvas, feeds it window events and runs one
/// tick per display refresh.
pub struct App {
    animation: AnimationLoop,
    surface: CanvasSurface,
    scheduler: RefreshScheduler,
    event_pump: EventPump,
    vsync: bool,
    focused: bool,
    // Keep SDL alive for the app lifetime so the video subsystem is not shut down
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, opens a resizable window and builds the animation on its canvas.
    ///
    /// # Errors
    ///
    /// Returns `BackdropError::Sdl` if any SDL initialization step fails, or propagates errors
    /// from `AnimationLoop::initialize()`.
    pub fn new(options: &LaunchOptions, config: &AnimationConfig) -> BackdropResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(BackdropError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackdropError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(BackdropError::Sdl)?;

        let requested = platform::host_viewport().unwrap_or(options.window_size);
        trace!(width = requested.x, height = requested.y, "Creating window");
        let window = video_subsystem
            .window(WINDOW_TITLE, requested.x, requested.y)
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| BackdropError::Sdl(e.to_string()))?;

        if cfg!(target_os = "emscripten") && !options.vsync {
            warn!("--no-vsync has no effect in the browser; frames follow requestAnimationFrame");
        }

        let mut builder = window.into_canvas().accelerated();
        if options.vsync {
            builder = builder.present_vsync();
        }
        let canvas = builder.build().map_err(|e| BackdropError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), vsync = options.vsync, "Canvas renderer initialized");

        // The window manager may not honor the requested size; draw at whatever was granted.
        let mut surface = CanvasSurface::new(canvas, config.background);
        let viewport = Viewport::from(surface.size());
        let animation = match options.seed {
            Some(seed) => {
                info!(seed, "Using seeded layout");
                AnimationLoop::initialize(&mut surface, viewport, config, &mut SmallRng::seed_from_u64(seed))?
            }
            None => AnimationLoop::initialize(&mut surface, viewport, config, &mut platform::rng())?,
        };

        let mut scheduler = RefreshScheduler::new();
        animation.start(&mut scheduler);

        info!("Application initialization completed successfully");
        Ok(Self {
            animation,
            surface,
            scheduler,
            event_pump,
            vsync: options.vsync,
            focused: true,
            _sdl_context: sdl_context,
        })
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    /// Handles one display refresh: window events, then the requested tick, then presentation.
    ///
    /// # Returns
    ///
    /// `true` while the host should keep calling, `false` once the window was closed.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                // Closing makes no sense inside a page
                #[cfg(not(target_os = "emscripten"))]
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                    ..
                } => {
                    info!("Exit requested. Exiting...");
                    return false;
                }
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::SizeChanged(width, height) => {
                        let size = UVec2::new(width.max(0) as u32, height.max(0) as u32);
                        if let Err(e) = self.animation.resize(&mut self.surface, size) {
                            error!("Failed to resize surface: {e}");
                        }
                    }
                    WindowEvent::FocusGained => self.focused = true,
                    WindowEvent::FocusLost => self.focused = false,
                    _ => {}
                },
                _ => {}
            }
        }

        if let Some(size) = platform::host_viewport() {
            if size != self.animation.viewport().size() {
                if let Err(e) = self.animation.resize(&mut self.surface, size) {
                    error!("Failed to follow page canvas size: {e}");
                }
            }
        }

        match self.animation.pump(&mut self.surface, &mut self.scheduler) {
            Ok(true) => {
                formatter::increment_frame();
                self.surface.present();
            }
            Ok(false) => warn!("No tick was requested for this refresh"),
            Err(e) => error!("Failed to draw frame: {e}"),
        }

        if !self.vsync {
            self.pace(start);
        }

        true
    }

    /// Sleeps out the rest of the frame budget when the display is not pacing presentation.
    #[cfg(not(target_os = "emscripten"))]
    fn pace(&self, start: Instant) {
        use crate::constants::LOOP_TIME;
        use std::time::Duration;

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        } else {
            warn!("Frame behind schedule by: {:?}", elapsed - LOOP_TIME);
        }
    }

    /// The browser paces frames through `requestAnimationFrame`.
    #[cfg(target_os = "emscripten")]
    fn pace(&self, _start: Instant) {}
}
