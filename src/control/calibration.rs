// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Calibration phases.
//!
//! A calibration run drives the axis toward the top proximity switch and records the encoder
//! reading there as the home offset:
//!
//! ```text
//! Idle --trigger--> Start --(command CW)--> SeekTop --(top switch, command STOP)--> Idle
//! ```
//!
//! Any attempt to advance from a phase other than `Start` or `SeekTop` lands in `Aborted`, which
//! is only left by re-triggering calibration.

/// Step of the calibration procedure.
///
/// The raw codes (`-1`, `0`, `1`, `-2`) are the ones reported over the debug terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationPhase {
    /// Not calibrating; normal position tracking.
    #[default]
    Idle,
    /// Calibration requested; the next step starts moving toward the top switch.
    Start,
    /// Moving toward the top switch, waiting for it to trigger.
    SeekTop,
    /// An invalid transition was requested.
    Aborted,
}

impl CalibrationPhase {
    pub const fn code(self) -> i8 {
        match self {
            Self::Idle => -1,
            Self::Start => 0,
            Self::SeekTop => 1,
            Self::Aborted => -2,
        }
    }

    /// Decode a raw phase code. Unknown codes decode to `Aborted`.
    pub const fn from_code(code: i8) -> Self {
        match code {
            -1 => Self::Idle,
            0 => Self::Start,
            1 => Self::SeekTop,
            _ => Self::Aborted,
        }
    }
}
