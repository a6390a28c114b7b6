// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Limit-switch slowdown policy.
//!
//! `Cw` travel heads for the top switch and `Ccw` travel for the bottom switch. The motor should
//! slow down only when it is heading into the switch that has just triggered.

use crate::motors::Direction;

/// Decide whether the motor should slow down given the latched switch flags.
///
/// | direction | top | bottom | result |
/// |---|---|---|---|
/// | `Cw` | set | clear | `true` |
/// | `Ccw` | clear | set | `true` |
/// | anything else | | | `false` |
///
/// Both flags set at once is not a valid input; it yields `false`.
pub fn should_slow_down(direction: Direction, top: bool, bottom: bool) -> bool {
    match (direction, top, bottom) {
        (Direction::Cw, true, false) => true,
        (Direction::Ccw, false, true) => true,
        _ => false,
    }
}
