// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware ports consumed by the actuator core.
//!
//! The actuator never touches registers itself. It drives an H-bridge through a [`DriverPort`],
//! reads the encoder through an [`EncoderSource`] and samples the proximity switches through
//! [`ProximityInputs`]. Firmware implementations live in [`crate::hw`] and
//! [`crate::drivers::l298n`]; tests supply their own.

/// Full-scale level on a direction line.
pub const SIGNAL_FULL: u8 = 255;

/// Level written to both direction lines when stopped. Kept above zero so that the driver holds
/// the motor instead of letting it float.
pub const SIGNAL_HOLD: u8 = 1;

/// Which proximity switch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    Top,
    Bottom,
}

/// Which direction line of the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DirectionLine {
    Cw,
    Ccw,
}

/// Dual-direction motor driver with an enable gate.
pub trait DriverPort {
    /// Write both direction lines. Levels are on a `0..=255` scale.
    fn set_direction_signals(&mut self, cw: u8, ccw: u8);

    /// Gate the whole driver on or off, independent of direction.
    fn set_enable(&mut self, on: bool);

    /// Current state of the enable gate.
    fn is_enabled(&self) -> bool;
}

/// Source of cumulative quadrature counts.
///
/// Implementations must return a value read atomically with respect to whatever updates it
/// (timer hardware or an interrupt handler). No wraparound handling is assumed.
pub trait EncoderSource {
    fn read(&mut self) -> i32;
}

/// Raw levels of the proximity switches.
pub trait ProximityInputs {
    /// True when the switch reads released. The inputs are pulled up, so released reads high.
    fn is_released(&mut self, sensor: Sensor) -> bool;
}

impl<T: DriverPort + ?Sized> DriverPort for &mut T {
    #[inline]
    fn set_direction_signals(&mut self, cw: u8, ccw: u8) {
        (**self).set_direction_signals(cw, ccw)
    }

    #[inline]
    fn set_enable(&mut self, on: bool) {
        (**self).set_enable(on)
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<T: EncoderSource + ?Sized> EncoderSource for &mut T {
    #[inline]
    fn read(&mut self) -> i32 {
        (**self).read()
    }
}

impl<T: ProximityInputs + ?Sized> ProximityInputs for &mut T {
    #[inline]
    fn is_released(&mut self, sensor: Sensor) -> bool {
        (**self).is_released(sensor)
    }
}
