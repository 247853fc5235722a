//! SDL2 implementation of [`Surface`].
//!
//! SDL's renderer has no transform stack, so the current transform is tracked here as an
//! [`Affine2`] and rectangles are mapped through it and filled as polygons with SDL2_gfx.

use glam::{Affine2, UVec2, Vec2};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::trace;

use crate::color::Hsl;
use crate::error::SurfaceError;
use crate::surface::Surface;

/// Transform and fill color, as pushed by `save`.
#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: Affine2,
    fill: Color,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            fill: Color::BLACK,
        }
    }
}

/// A window canvas the animation draws onto.
pub struct CanvasSurface {
    canvas: Canvas<Window>,
    background: Color,
    state: DrawState,
    saved: Vec<DrawState>,
    size: UVec2,
}

impl CanvasSurface {
    pub fn new(canvas: Canvas<Window>, background: Hsl) -> Self {
        let (width, height) = canvas.window().size();
        Self {
            canvas,
            background: background.into(),
            state: DrawState::default(),
            saved: Vec::new(),
            size: UVec2::new(width, height),
        }
    }

    /// Shows everything drawn since the last call. Blocks until the refresh when vsync is on.
    pub fn present(&mut self) {
        self.canvas.present();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn resize(&mut self, size: UVec2) -> Result<(), SurfaceError> {
        // The window is usually already this size (the resize came from it); only the
        // Emscripten host, which follows the page's canvas element, needs to push it.
        if self.canvas.window().size() != (size.x, size.y) {
            self.canvas
                .window_mut()
                .set_size(size.x, size.y)
                .map_err(|e| SurfaceError::Resize {
                    width: size.x,
                    height: size.y,
                    reason: e.to_string(),
                })?;
        }

        trace!(width = size.x, height = size.y, "Canvas surface resized");
        self.size = size;
        Ok(())
    }

    fn clear_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError> {
        let rect = Rect::new(
            origin.x.floor() as i32,
            origin.y.floor() as i32,
            extent.x.ceil().max(0.0) as u32,
            extent.y.ceil().max(0.0) as u32,
        );

        self.canvas.set_draw_color(self.background);
        self.canvas.fill_rect(rect).map_err(SurfaceError::Draw)
    }

    fn set_fill_color(&mut self, color: Hsl) {
        self.state.fill = color.into();
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(radians);
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError> {
        let corners = [
            origin,
            origin + Vec2::new(extent.x, 0.0),
            origin + extent,
            origin + Vec2::new(0.0, extent.y),
        ]
        .map(|corner| self.state.transform.transform_point2(corner));

        let xs = corners.map(|corner| to_coordinate(corner.x));
        let ys = corners.map(|corner| to_coordinate(corner.y));

        self.canvas.filled_polygon(&xs, &ys, self.state.fill).map_err(SurfaceError::Draw)
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }
}

/// SDL2_gfx takes `i16` vertices; anything further out is clipped anyway.
fn to_coordinate(value: f32) -> i16 {
    value.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
}
