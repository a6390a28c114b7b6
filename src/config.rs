// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Actuator configuration.
//!
//! Pin identifiers mirror the `P: char, N: u8` pairs the HAL uses for GPIO pins (e.g. `PD12` is
//! `PinId::new('D', 12)`). The actuator core never touches the pins themselves; it only echoes
//! them back so the caller can verify its wiring.

use core::fmt;

use crate::control::TravelScale;
use crate::error::{ConfigError, ConfigResult};
use crate::motors::Direction;

/// Encoder clicks over the full travel of the axis, as measured on the assembly.
pub const DEFAULT_TOTAL_CLICKS: u32 = 10_000;

/// Full scale of the caller's position input (12-bit slider).
pub const DEFAULT_TOTAL_UNITS: u16 = 4095;

/// Encoder jitter deadband, in clicks.
pub const DEFAULT_TOLERANCE: u32 = 25;

/// A GPIO pin identified by port letter and pin number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: char,
    pub number: u8,
}

impl PinId {
    pub const fn new(port: char, number: u8) -> Self {
        Self { port, number }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port, self.number)
    }
}

/// Pin roles of one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPins {
    /// Driver enable gate.
    pub enable: PinId,
    /// "CW" driver input. The driver wiring is crossed: this line is driven for `Ccw` travel.
    pub cw: PinId,
    /// "CCW" driver input, driven for `Cw` travel.
    pub ccw: PinId,
    /// Top proximity switch (calibration reference).
    pub top_sensor: PinId,
    pub bottom_sensor: PinId,
    pub encoder_a: PinId,
    pub encoder_b: PinId,
}

impl AxisPins {
    fn as_array(&self) -> [PinId; 7] {
        [
            self.enable,
            self.cw,
            self.ccw,
            self.top_sensor,
            self.bottom_sensor,
            self.encoder_a,
            self.encoder_b,
        ]
    }

    /// Returns the first pin that appears in more than one role.
    pub fn first_conflict(&self) -> Option<PinId> {
        let pins = self.as_array();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Some(*pin);
            }
        }
        None
    }
}

impl Default for AxisPins {
    /// Motor 1 connector of the board: TIM4 CH1/CH2 on PD12/PD13, TIM2 encoder on PA0/PA1.
    fn default() -> Self {
        Self {
            enable: PinId::new('A', 3),
            cw: PinId::new('D', 12),
            ccw: PinId::new('D', 13),
            top_sensor: PinId::new('E', 2),
            bottom_sensor: PinId::new('E', 3),
            encoder_a: PinId::new('A', 0),
            encoder_b: PinId::new('A', 1),
        }
    }
}

/// Everything needed to build an [`AxialActuator`](crate::motors::AxialActuator).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorConfig {
    pub pins: AxisPins,
    pub initial_direction: Direction,
    pub total_clicks: u32,
    pub total_units: u16,
    pub tolerance: u32,
}

impl ActuatorConfig {
    pub fn with_pins(mut self, pins: AxisPins) -> Self {
        self.pins = pins;
        self
    }

    pub fn with_initial_direction(mut self, direction: Direction) -> Self {
        self.initial_direction = direction;
        self
    }

    /// Set the clicks-per-full-travel / slider-units ratio.
    pub fn with_travel(mut self, total_clicks: u32, total_units: u16) -> Self {
        self.total_clicks = total_clicks;
        self.total_units = total_units;
        self
    }

    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check the configuration and build the travel scale from it.
    pub fn validate(&self) -> ConfigResult<TravelScale> {
        if let Some(pin) = self.pins.first_conflict() {
            return Err(ConfigError::PinConflict(pin));
        }
        TravelScale::new(self.total_clicks, self.total_units)
    }
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            pins: AxisPins::default(),
            initial_direction: Direction::Stopped,
            total_clicks: DEFAULT_TOTAL_CLICKS,
            total_units: DEFAULT_TOTAL_UNITS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let scale = ActuatorConfig::default().validate().unwrap();
        assert_eq!(scale.total_clicks(), 10_000);
        assert_eq!(scale.total_units(), 4095);
    }

    #[test]
    fn duplicate_pin_is_rejected() {
        let mut pins = AxisPins::default();
        pins.bottom_sensor = pins.top_sensor;
        let cfg = ActuatorConfig::default().with_pins(pins);
        assert_eq!(cfg.validate(), Err(ConfigError::PinConflict(PinId::new('E', 2))));
    }

    #[test]
    fn zero_units_is_rejected() {
        let cfg = ActuatorConfig::default().with_travel(10_000, 0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSliderUnits));
    }

    #[test]
    fn zero_clicks_is_rejected() {
        let cfg = ActuatorConfig::default().with_travel(0, 4095);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTravelClicks));
    }

    #[test]
    fn oversized_travel_is_rejected() {
        let cfg = ActuatorConfig::default().with_travel(u32::MAX, 4095);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TravelClicksTooLarge(u32::MAX))
        );
    }
}
