// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Commanded motor direction.

use crate::drivers::port::{SIGNAL_FULL, SIGNAL_HOLD};

/// Logical drive direction for the axial motor.
///
/// `Cw` moves the carriage toward the top switch, `Ccw` toward the bottom switch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Cw,
    Ccw,
    #[default]
    Stopped,
}

/// Levels for the two direction lines of the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveSignals {
    pub cw: u8,
    pub ccw: u8,
}

impl Direction {
    /// Raw direction code: `1` = CW, `0` = CCW, `-1` = stopped.
    pub const fn code(self) -> i8 {
        match self {
            Self::Cw => 1,
            Self::Ccw => 0,
            Self::Stopped => -1,
        }
    }

    /// Decode a raw direction code. Anything outside `{1, 0, -1}` stops the motor.
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Cw,
            0 => Self::Ccw,
            _ => Self::Stopped,
        }
    }

    /// Output levels for this direction.
    ///
    /// The driver inputs are crossed on the board: `Cw` asserts the "CCW" input and `Ccw` asserts
    /// the "CW" input. `Stopped` holds both inputs at a small non-zero level rather than zero so the
    /// driver does not float the motor.
    pub const fn signals(self) -> DriveSignals {
        match self {
            Self::Cw => DriveSignals {
                cw: 0,
                ccw: SIGNAL_FULL,
            },
            Self::Ccw => DriveSignals {
                cw: SIGNAL_FULL,
                ccw: 0,
            },
            Self::Stopped => DriveSignals {
                cw: SIGNAL_HOLD,
                ccw: SIGNAL_HOLD,
            },
        }
    }
}
