//! This module contains all the constants used by the animation.

use std::time::Duration;

use glam::UVec2;

use crate::color::Hsl;

/// Frame budget used when the display refresh cannot pace the loop (vsync disabled).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window when nothing else is requested, in pixels.
pub const DEFAULT_VIEWPORT: UVec2 = UVec2::new(800, 600);

/// The number of squares, created once at startup.
pub const ENTITY_COUNT: usize = 22;

/// Hue shared by every square, in degrees.
pub const SQUARE_HUE: f32 = 200.0;
/// Saturation shared by every square, in percent.
pub const SQUARE_SATURATION: f32 = 60.0;
/// Lightness band (percent) each square's color is drawn from.
pub const SQUARE_LIGHTNESS: (f32, f32) = (30.0, 70.0);

/// Side length band, in pixels.
pub const SQUARE_SIZE: (f32, f32) = (12.0, 48.0);
/// Drift speed band, in pixels per tick along both axes.
pub const SQUARE_SPEED: (f32, f32) = (0.2, 1.2);
/// Rotation band, in radians per tick.
pub const SQUARE_ANGULAR_MOMENTUM: (f32, f32) = (-0.03, 0.03);

/// The color the surface is cleared to.
pub const BACKGROUND: Hsl = Hsl::new(220.0, 35.0, 8.0);

/// Title of the desktop window.
pub const WINDOW_TITLE: &str = "Backdrop";
