//! Day cycle classification
//!
//! Buckets the sky state into coarse phases used to pick ambient sounds and
//! aurora visibility.

use std::fmt;

use super::WorldView;
use crate::foundation::localization::Localizer;
use crate::foundation::math::{constants::TAU, utils::clamp};

/// Sun brightness above which it is day
const DAYTIME_THRESHOLD: f32 = 0.68;
/// Sun brightness below which it is night
const NIGHTTIME_THRESHOLD: f32 = 0.3;
/// Celestial angle splitting dusk from dawn
const SUNSET_ANGLE: f32 = 0.744;

/// Coarse phase of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCycle {
    /// No visible sky in this dimension
    NoSky,
    /// Dawn
    Sunrise,
    /// Dusk
    Sunset,
    /// Full day
    Daytime,
    /// Full night
    Nighttime,
}

impl DayCycle {
    /// Classify the current sky of `world`
    pub fn classify(world: &dyn WorldView) -> Self {
        if world.has_ceiling() || !world.has_sky_light() {
            return DayCycle::NoSky;
        }

        let brightness = sun_brightness(1.0, world);
        if brightness > DAYTIME_THRESHOLD {
            return DayCycle::Daytime;
        }
        if brightness < NIGHTTIME_THRESHOLD {
            return DayCycle::Nighttime;
        }

        if world.time_of_day(0.0) < SUNSET_ANGLE {
            DayCycle::Sunset
        } else {
            DayCycle::Sunrise
        }
    }

    /// Whether auroras can be seen during this phase
    pub fn is_aurora_visible(self) -> bool {
        matches!(self, DayCycle::Sunset | DayCycle::Nighttime)
    }

    /// Stable name used in localization keys
    pub fn name(self) -> &'static str {
        match self {
            DayCycle::NoSky => "NoSky",
            DayCycle::Sunrise => "Sunrise",
            DayCycle::Sunset => "Sunset",
            DayCycle::Daytime => "Daytime",
            DayCycle::Nighttime => "Nighttime",
        }
    }

    /// Localization key, e.g. `surroundings.format.Daytime`
    pub fn localization_key(self, mod_id: &str) -> String {
        format!("{}.format.{}", mod_id, self.name())
    }

    /// Localized display name
    pub fn formatted_name(self, mod_id: &str, localizer: &dyn Localizer) -> String {
        localizer.translate(&self.localization_key(mod_id))
    }
}

impl fmt::Display for DayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check for full day
pub fn is_daytime(world: &dyn WorldView) -> bool {
    DayCycle::classify(world) == DayCycle::Daytime
}

/// Check for full night
pub fn is_nighttime(world: &dyn WorldView) -> bool {
    DayCycle::classify(world) == DayCycle::Nighttime
}

/// Check for dawn
pub fn is_sunrise(world: &dyn WorldView) -> bool {
    DayCycle::classify(world) == DayCycle::Sunrise
}

/// Check for dusk
pub fn is_sunset(world: &dyn WorldView) -> bool {
    DayCycle::classify(world) == DayCycle::Sunset
}

/// Check if auroras can currently be seen
pub fn is_aurora_visible_in(world: &dyn WorldView) -> bool {
    DayCycle::classify(world).is_aurora_visible()
}

/// Check if auroras are currently hidden
pub fn is_aurora_invisible_in(world: &dyn WorldView) -> bool {
    !is_aurora_visible_in(world)
}

/// Brightness of the current moon phase
pub fn moon_phase_factor(world: &dyn WorldView) -> f32 {
    world.moon_brightness()
}

/// Sun brightness in `[0.2, 1.0]`, dimmed by rain and thunder
pub fn sun_brightness(partial_ticks: f32, world: &dyn WorldView) -> f32 {
    let angle = world.time_of_day(partial_ticks);
    let mut factor = 1.0 - ((angle * TAU).cos() * 2.0 + 0.2);
    factor = 1.0 - clamp(factor, 0.0, 1.0);

    // Weather dimming is computed in double precision
    let rain = f64::from(world.rain_level(partial_ticks));
    let thunder = f64::from(world.thunder_level(partial_ticks));
    let mut dimmed = f64::from(factor);
    dimmed *= 1.0 - rain * 5.0 / 16.0;
    dimmed *= 1.0 - thunder * 5.0 / 16.0;

    #[allow(clippy::cast_possible_truncation)]
    let factor = dimmed as f32;
    factor * 0.8 + 0.2
}
