//! The rotating squares that make up the animation.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::color::Hsl;
use crate::config::AnimationConfig;
use crate::error::SurfaceError;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// The fixed traits of a square, chosen once at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareParams {
    pub color: Hsl,
    /// Side length, in pixels.
    pub size: f32,
    /// Pixels moved along both axes per tick.
    pub speed: f32,
    /// Radians added to the angle per tick.
    pub angular_momentum: f32,
}

impl SquareParams {
    /// Draws every trait independently from the configured bands.
    pub fn random<R: Rng>(config: &AnimationConfig, rng: &mut R) -> Self {
        Self {
            color: Hsl::new(config.hue, config.saturation, config.lightness.sample(rng)),
            size: config.size.sample(rng),
            speed: config.speed.sample(rng),
            angular_momentum: config.angular_momentum.sample(rng),
        }
    }
}

/// A single square drifting diagonally while it spins.
///
/// Only `position` and `angle` ever change; the rest is readable but private.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    position: Vec2,
    angle: f32,
    params: SquareParams,
}

impl Square {
    /// Creates a square, wrapping `position` and `angle` into their valid ranges for `viewport`.
    pub fn new(position: Vec2, angle: f32, params: SquareParams, viewport: Viewport) -> Self {
        let extent = viewport.wrap_extent(params.size);
        Self {
            position: Vec2::new(wrap(position.x, extent.x), wrap(position.y, extent.y)),
            angle: wrap(angle, TAU),
            params,
        }
    }

    /// Creates a square with random traits, placed uniformly within its wrap extent.
    pub fn spawn<R: Rng>(config: &AnimationConfig, viewport: Viewport, rng: &mut R) -> Self {
        let params = SquareParams::random(config, rng);
        let extent = viewport.wrap_extent(params.size);
        let position = Vec2::new(rng.random_range(0.0..extent.x), rng.random_range(0.0..extent.y));
        let angle = rng.random_range(0.0..TAU);
        Self::new(position, angle, params, viewport)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn params(&self) -> &SquareParams {
        &self.params
    }

    pub fn color(&self) -> Hsl {
        self.params.color
    }

    pub fn size(&self) -> f32 {
        self.params.size
    }

    pub fn speed(&self) -> f32 {
        self.params.speed
    }

    pub fn angular_momentum(&self) -> f32 {
        self.params.angular_momentum
    }

    /// Paints the square rotated about its position, leaving the surface state as it found it.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        let size = self.params.size;

        surface.save();
        surface.translate(self.position);
        surface.rotate(self.angle);
        surface.set_fill_color(self.params.color);
        let filled = surface.fill_rect(Vec2::splat(-size / 2.0), Vec2::splat(size));
        surface.restore();

        filled
    }

    /// Advances one tick: drift by `speed` on both axes and spin by `angular_momentum`.
    pub fn update(&mut self, viewport: Viewport) {
        let extent = viewport.wrap_extent(self.params.size);
        let moved = self.position + Vec2::splat(self.params.speed);

        self.position = Vec2::new(wrap(moved.x, extent.x), wrap(moved.y, extent.y));
        self.angle = wrap(self.angle + self.params.angular_momentum, TAU);
    }
}

/// Euclidean modulo into `[0, modulus)`.
///
/// `rem_euclid` can round up to exactly `modulus` for tiny negative inputs; that case folds to zero.
pub fn wrap(value: f32, modulus: f32) -> f32 {
    let wrapped = value.rem_euclid(modulus);
    if wrapped >= modulus {
        0.0
    } else {
        wrapped
    }
}
