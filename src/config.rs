//! Runtime configuration: the randomization bands squares are drawn from, and launch options.

use std::ops::RangeInclusive;

use glam::UVec2;
use rand::Rng;

use crate::color::Hsl;
use crate::constants::{
    BACKGROUND, DEFAULT_VIEWPORT, ENTITY_COUNT, SQUARE_ANGULAR_MOMENTUM, SQUARE_HUE, SQUARE_LIGHTNESS, SQUARE_SATURATION,
    SQUARE_SIZE, SQUARE_SPEED,
};
use crate::error::ConfigError;

/// An inclusive range a value is sampled uniformly from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A band that always yields `value`.
    pub const fn fixed(value: f32) -> Self {
        Self { min: value, max: value }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.range())
    }

    pub fn contains(&self, value: f32) -> bool {
        self.range().contains(&value)
    }

    fn range(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidBand {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(f32, f32)> for Band {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

/// Parameters for building the square collection.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub entity_count: usize,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: Band,
    pub size: Band,
    pub speed: Band,
    pub angular_momentum: Band,
    pub background: Hsl,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entity_count: ENTITY_COUNT,
            hue: SQUARE_HUE,
            saturation: SQUARE_SATURATION,
            lightness: SQUARE_LIGHTNESS.into(),
            size: SQUARE_SIZE.into(),
            speed: SQUARE_SPEED.into(),
            angular_momentum: SQUARE_ANGULAR_MOMENTUM.into(),
            background: BACKGROUND,
        }
    }
}

impl AnimationConfig {
    /// Checks every band is well-formed and that sizes are strictly positive.
    ///
    /// The wrap modulus of each square is `viewport + 2 * size`, so a zero size on a zero-sized
    /// viewport would leave nothing to wrap into.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lightness.validate("lightness")?;
        self.size.validate("size")?;
        self.speed.validate("speed")?;
        self.angular_momentum.validate("angular_momentum")?;

        if self.size.min <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.size.min));
        }

        let percents = [
            ("saturation", self.saturation),
            ("lightness.min", self.lightness.min),
            ("lightness.max", self.lightness.max),
        ];
        for (name, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::OutOfPercentRange { name, value });
            }
        }

        Ok(())
    }
}

/// Options read from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    /// Seeds the layout; random per launch when absent.
    pub seed: Option<u64>,
    /// Presents frames in step with the display refresh.
    pub vsync: bool,
    /// Initial window size, in pixels.
    pub window_size: UVec2,
    pub show_help: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            seed: None,
            vsync: true,
            window_size: DEFAULT_VIEWPORT,
            show_help: false,
        }
    }
}

impl LaunchOptions {
    pub const USAGE: &'static str = "\
Usage: backdrop [OPTIONS]

Options:
  --seed <N>        Seed the square layout for a reproducible animation
  --size <W>x<H>    Initial window size in pixels (default 800x600)
  --no-vsync        Pace frames with a 60 Hz timer instead of the display refresh
                    (ignored in the browser, which always paces by animation frame)
  -h, --help        Print this help";

    /// Parses arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    let seed = value.parse().map_err(|_| ConfigError::InvalidValue {
                        argument: arg.clone(),
                        value: value.clone(),
                    })?;
                    options.seed = Some(seed);
                }
                "--size" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    options.window_size = parse_size(&value).ok_or_else(|| ConfigError::InvalidValue {
                        argument: arg.clone(),
                        value: value.clone(),
                    })?;
                }
                "--no-vsync" => options.vsync = false,
                "-h" | "--help" => options.show_help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(options)
    }
}

/// Parses `WIDTHxHEIGHT`, rejecting zero dimensions.
fn parse_size(value: &str) -> Option<UVec2> {
    let (width, height) = value.split_once(['x', 'X'])?;
    let size = UVec2::new(width.trim().parse().ok()?, height.trim().parse().ok()?);
    (size.x > 0 && size.y > 0).then_some(size)
}
