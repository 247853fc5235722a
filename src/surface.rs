//! The drawing primitives the animation paints with.
//!
//! The primitives mirror a 2D canvas context: a current fill color, a current transform that
//! `translate`/`rotate` compose onto, and a `save`/`restore` stack holding both.

use glam::{UVec2, Vec2};

use crate::color::Hsl;
use crate::error::SurfaceError;

/// A 2D drawing surface sized to the viewport.
pub trait Surface {
    /// The current drawing size, in pixels.
    fn size(&self) -> UVec2;

    /// Resizes the drawing area. Anything already drawn may be discarded.
    fn resize(&mut self, size: UVec2) -> Result<(), SurfaceError>;

    /// Resets a region to the background, ignoring the current transform.
    fn clear_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError>;

    fn set_fill_color(&mut self, color: Hsl);

    /// Moves the origin of the current transform.
    fn translate(&mut self, offset: Vec2);

    /// Rotates the current transform clockwise (y grows downward) by `radians`.
    fn rotate(&mut self, radians: f32);

    /// Fills an axis-aligned rectangle in transformed space with the current fill color.
    fn fill_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError>;

    /// Pushes the current transform and fill color.
    fn save(&mut self);

    /// Pops the last saved state; does nothing when nothing was saved.
    fn restore(&mut self);
}

/// One primitive call, as seen by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(UVec2),
    Clear { origin: Vec2, extent: Vec2 },
    SetFillColor(Hsl),
    Translate(Vec2),
    Rotate(f32),
    FillRect { origin: Vec2, extent: Vec2 },
    Save,
    Restore,
}

/// A headless surface that records every call instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: UVec2,
    depth: usize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands, keeping the size and save depth.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// How many saves are currently outstanding.
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    /// The number of filled rectangles recorded so far.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillRect { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn resize(&mut self, size: UVec2) -> Result<(), SurfaceError> {
        self.size = size;
        self.commands.push(DrawCommand::Resize(size));
        Ok(())
    }

    fn clear_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Clear { origin, extent });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Hsl) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::FillRect { origin, extent });
        Ok(())
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }
}
