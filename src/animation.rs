//! The animation loop: a fixed set of squares, cleared, drawn and advanced once per tick.

use glam::{UVec2, Vec2};
use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::AnimationConfig;
use crate::entity::Square;
use crate::error::{BackdropResult, SurfaceError};
use crate::scheduler::Scheduler;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Owns the viewport and the square collection for the lifetime of the host.
///
/// The collection is built once by [`AnimationLoop::initialize`] and never grows or shrinks.
#[derive(Debug, Clone)]
pub struct AnimationLoop {
    viewport: Viewport,
    squares: Vec<Square>,
    ticks: u64,
}

impl AnimationLoop {
    /// Sizes `surface` to `viewport` and builds `config.entity_count` randomized squares.
    ///
    /// # Errors
    ///
    /// Returns `BackdropError::Config` if a band is malformed, or `BackdropError::Surface` if the
    /// surface cannot take the viewport's size.
    pub fn initialize<S, R>(surface: &mut S, viewport: Viewport, config: &AnimationConfig, rng: &mut R) -> BackdropResult<Self>
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        config.validate()?;
        surface.resize(viewport.size())?;

        let squares = (0..config.entity_count)
            .map(|_| Square::spawn(config, viewport, rng))
            .collect::<Vec<_>>();

        info!(
            count = squares.len(),
            width = viewport.width,
            height = viewport.height,
            "Animation initialized"
        );

        Ok(Self::from_squares(viewport, squares))
    }

    /// Builds a loop around an existing collection, e.g. a hand-placed one.
    pub fn from_squares(viewport: Viewport, squares: Vec<Square>) -> Self {
        Self {
            viewport,
            squares,
            ticks: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Handles a viewport change: resizes the surface and the wrap bounds.
    ///
    /// Positions are left alone; squares outside the new bounds wrap back on their next update.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, size: UVec2) -> Result<(), SurfaceError> {
        let viewport = Viewport::from(size);
        if viewport == self.viewport && surface.size() == size {
            return Ok(());
        }

        debug!(
            from = ?self.viewport.size(),
            to = ?size,
            "Viewport resized"
        );
        surface.resize(size)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Asks `scheduler` for the first tick.
    pub fn start<H: Scheduler + ?Sized>(&self, scheduler: &mut H) {
        scheduler.request_next_tick();
    }

    /// Runs one tick: clear the viewport, then draw and update each square in order, then request
    /// the next tick.
    ///
    /// A drawing failure stops the tick early and is returned; the next tick is still requested so
    /// the host keeps animating.
    pub fn tick<S, H>(&mut self, surface: &mut S, scheduler: &mut H) -> Result<(), SurfaceError>
    where
        S: Surface + ?Sized,
        H: Scheduler + ?Sized,
    {
        let result = self.advance(surface);
        self.ticks += 1;
        scheduler.request_next_tick();
        trace!(tick = self.ticks, "Tick complete");
        result
    }

    /// Runs a tick if `scheduler` has one due, returning whether it did.
    pub fn pump<S, H>(&mut self, surface: &mut S, scheduler: &mut H) -> Result<bool, SurfaceError>
    where
        S: Surface + ?Sized,
        H: Scheduler + ?Sized,
    {
        if !scheduler.tick_due() {
            return Ok(false);
        }
        self.tick(surface, scheduler)?;
        Ok(true)
    }

    /// Pumps until `scheduler` stops delivering ticks, returning how many ran.
    ///
    /// With a scheduler that always delivers, this never returns.
    pub fn drive<S, H>(&mut self, surface: &mut S, scheduler: &mut H) -> Result<u64, SurfaceError>
    where
        S: Surface + ?Sized,
        H: Scheduler + ?Sized,
    {
        let mut ran = 0;
        while self.pump(surface, scheduler)? {
            ran += 1;
        }
        Ok(ran)
    }

    fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.clear_rect(Vec2::ZERO, self.viewport.extent())?;

        let viewport = self.viewport;
        for square in &mut self.squares {
            square.draw(surface)?;
            square.update(viewport);
        }
        Ok(())
    }
}
