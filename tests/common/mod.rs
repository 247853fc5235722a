#![allow(dead_code)]

use backdrop::animation::AnimationLoop;
use backdrop::color::Hsl;
use backdrop::config::AnimationConfig;
use backdrop::entity::SquareParams;
use backdrop::error::SurfaceError;
use backdrop::surface::{RecordingSurface, Surface};
use backdrop::viewport::Viewport;
use glam::{UVec2, Vec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const SEED: u64 = 0x5EED_CAFE;

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

pub fn viewport() -> Viewport {
    Viewport::new(800, 600)
}

/// A loop built from `config` on a fresh recording surface, with the initial resize drained.
pub fn initialized(config: &AnimationConfig) -> (AnimationLoop, RecordingSurface) {
    let mut surface = RecordingSurface::new(UVec2::ZERO);
    let animation = AnimationLoop::initialize(&mut surface, viewport(), config, &mut rng()).unwrap();
    surface.take_commands();
    (animation, surface)
}

pub fn params(size: f32, speed: f32, angular_momentum: f32) -> SquareParams {
    SquareParams {
        color: Hsl::new(200.0, 60.0, 50.0),
        size,
        speed,
        angular_momentum,
    }
}

/// A recording surface whose `fill_rect` fails on the `fail_on`-th call (1-based).
pub struct FailingSurface {
    pub inner: RecordingSurface,
    fills: usize,
    fail_on: usize,
}

impl FailingSurface {
    pub fn new(size: UVec2, fail_on: usize) -> Self {
        Self {
            inner: RecordingSurface::new(size),
            fills: 0,
            fail_on,
        }
    }
}

impl Surface for FailingSurface {
    fn size(&self) -> UVec2 {
        self.inner.size()
    }

    fn resize(&mut self, size: UVec2) -> Result<(), SurfaceError> {
        self.inner.resize(size)
    }

    fn clear_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError> {
        self.inner.clear_rect(origin, extent)
    }

    fn set_fill_color(&mut self, color: Hsl) {
        self.inner.set_fill_color(color);
    }

    fn translate(&mut self, offset: Vec2) {
        self.inner.translate(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.inner.rotate(radians);
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError> {
        self.fills += 1;
        if self.fills == self.fail_on {
            return Err(SurfaceError::Draw(format!("fill #{} rejected", self.fills)));
        }
        self.inner.fill_rect(origin, extent)
    }

    fn save(&mut self) {
        self.inner.save();
    }

    fn restore(&mut self) {
        self.inner.restore();
    }
}
