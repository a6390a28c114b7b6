// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Edge latches for the proximity switches and the calibration button.
//!
//! The actuator consumes latched flags rather than raw levels. The polling loop (or an EXTI
//! handler) samples each input and feeds it to an [`EdgeLatch`]; the latched values are handed to
//! [`AxialActuator::tick`](crate::motors::AxialActuator::tick) as [`TickFlags`], which clears them
//! again once they have been acted upon.

/// Level at which an input counts as active.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// Latches the inactive → active edge of a level input.
#[derive(Copy, Clone, Debug)]
pub struct EdgeLatch {
    active: ActiveLevel,
    prev_active: bool,
}

impl EdgeLatch {
    /// Create a latch. The input is assumed inactive at startup.
    pub const fn new(active: ActiveLevel) -> Self {
        Self {
            active,
            prev_active: false,
        }
    }

    /// Proximity switches and the user button are pulled up and pull the line low when active.
    pub const fn active_low() -> Self {
        Self::new(ActiveLevel::Low)
    }

    pub const fn active_high() -> Self {
        Self::new(ActiveLevel::High)
    }

    /// Feed one raw sample. Returns true on the inactive → active edge.
    pub fn sample(&mut self, is_high: bool) -> bool {
        let active = match self.active {
            ActiveLevel::High => is_high,
            ActiveLevel::Low => !is_high,
        };
        let edge = active && !self.prev_active;
        self.prev_active = active;
        edge
    }

    /// Feed one raw sample and OR any edge into `flag`. The flag is never cleared here.
    #[inline]
    pub fn latch_into(&mut self, is_high: bool, flag: &mut bool) {
        if self.sample(is_high) {
            *flag = true;
        }
    }
}

/// Latched inputs consumed by one control cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickFlags {
    /// Top proximity switch has triggered.
    pub top: bool,
    /// Bottom proximity switch has triggered.
    pub bottom: bool,
    /// Calibration has been requested.
    pub calibrate: bool,
}

impl TickFlags {
    pub const fn new() -> Self {
        Self {
            top: false,
            bottom: false,
            calibrate: false,
        }
    }

    /// Request a calibration run on the next cycle.
    #[inline]
    pub fn request_calibration(&mut self) {
        self.calibrate = true;
    }
}
