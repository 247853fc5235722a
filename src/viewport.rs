use glam::{UVec2, Vec2};

/// The visible drawing area, kept in step with the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn extent(&self) -> Vec2 {
        self.size().as_vec2()
    }

    /// The per-axis modulus a square of side `size` wraps within: one full side of margin on each edge.
    pub fn wrap_extent(&self, size: f32) -> Vec2 {
        self.extent() + Vec2::splat(2.0 * size)
    }
}

impl From<UVec2> for Viewport {
    fn from(size: UVec2) -> Self {
        Self::new(size.x, size.y)
    }
}
