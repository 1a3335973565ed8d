//! Host world access
//!
//! The host engine exposes its world through these traits; nothing here
//! owns world state.

pub mod day_cycle;

pub use day_cycle::DayCycle;

use crate::foundation::math::DVec3;

/// Read-only view of the sky and weather of the current world
pub trait WorldView {
    /// Dimension has a solid roof over it (no visible sky)
    fn has_ceiling(&self) -> bool;

    /// Dimension receives sky light
    fn has_sky_light(&self) -> bool;

    /// Celestial angle in `[0, 1)`; `0.0` is noon, `0.5` is midnight
    fn time_of_day(&self, partial_ticks: f32) -> f32;

    /// Rain strength in `[0, 1]`
    fn rain_level(&self, partial_ticks: f32) -> f32;

    /// Thunder strength in `[0, 1]`
    fn thunder_level(&self, partial_ticks: f32) -> f32;

    /// Brightness of the current moon phase in `[0, 1]`
    fn moon_brightness(&self) -> f32;
}

/// Kind of light stored per block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    /// Light from the sky
    Sky,
    /// Light emitted by blocks
    Block,
}

/// Per-block light levels
pub trait LightReader {
    /// Light level (0 to 15) of `kind` at `pos`
    fn brightness(&self, kind: LightType, pos: BlockPos) -> i32;
}

/// Integer block coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl BlockPos {
    /// Create a block position
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Block containing a world position
    #[allow(clippy::cast_possible_truncation)]
    pub fn containing(position: &DVec3) -> Self {
        Self {
            x: position.x.floor() as i32,
            y: position.y.floor() as i32,
            z: position.z.floor() as i32,
        }
    }
}
