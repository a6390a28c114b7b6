// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Conversion between encoder clicks and the caller's logical position units.
//!
//! The ratio is fixed: `total_clicks` clicks of travel span `total_units` slider units. All values
//! here are relative to the home position; adding the home offset is the actuator's job.

use micromath::F32Ext;

use crate::error::{ConfigError, ConfigResult};

/// Clicks ↔ logical units ratio for one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelScale {
    total_clicks: u32,
    total_units: u16,
}

impl TravelScale {
    /// Create a scale. Both sides of the ratio must be non-zero, and the full travel must fit in
    /// the signed encoder count.
    pub fn new(total_clicks: u32, total_units: u16) -> ConfigResult<Self> {
        if total_units == 0 {
            return Err(ConfigError::ZeroSliderUnits);
        }
        if total_clicks == 0 {
            return Err(ConfigError::ZeroTravelClicks);
        }
        if total_clicks > i32::MAX as u32 {
            return Err(ConfigError::TravelClicksTooLarge(total_clicks));
        }
        Ok(Self {
            total_clicks,
            total_units,
        })
    }

    #[inline]
    pub fn total_clicks(&self) -> u32 {
        self.total_clicks
    }

    #[inline]
    pub fn total_units(&self) -> u16 {
        self.total_units
    }

    /// Relative clicks for a distance in logical units, rounded to the nearest click.
    pub fn units_to_clicks(&self, units: u16) -> i32 {
        let fraction = units as f32 / self.total_units as f32;
        (fraction * self.total_clicks as f32).round() as i32
    }

    /// Logical units for a relative click count. Not rounded; may be negative.
    pub fn clicks_to_units(&self, clicks: i32) -> f32 {
        (clicks as f32 / self.total_clicks as f32) * self.total_units as f32
    }
}
