// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reported position of the axis.

/// Legacy status code sent instead of a position while calibrating.
pub const CODE_CALIBRATING: u16 = 1;

/// Legacy status code sent when the computed position is below home.
pub const CODE_NEGATIVE: u16 = 2;

/// Position report in logical units.
///
/// The older serial status line packed all three cases into one `u16` (see [`Self::code`]), where
/// a real position of 1 or 2 units is indistinguishable from the two status codes. Callers that can
/// should match on the enum instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportedPosition {
    /// Calibration is in progress or was aborted; no meaningful position.
    Calibrating,
    /// The encoder reads below the home position.
    NegativeComputed,
    /// Position in logical units.
    Value(u16),
}

impl ReportedPosition {
    /// Single-channel encoding used on the status line.
    pub const fn code(self) -> u16 {
        match self {
            Self::Calibrating => CODE_CALIBRATING,
            Self::NegativeComputed => CODE_NEGATIVE,
            Self::Value(units) => units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes() {
        assert_eq!(ReportedPosition::Calibrating.code(), 1);
        assert_eq!(ReportedPosition::NegativeComputed.code(), 2);
        assert_eq!(ReportedPosition::Value(1234).code(), 1234);
    }
}
