// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Configuration errors.
//!
//! Runtime inputs are never rejected (bad directions become `Stopped`, bad calibration phases
//! become `Aborted`), so the only fallible step is building an actuator from its configuration.

use thiserror::Error;

use crate::config::PinId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("travel scale needs a non-zero number of slider units")]
    ZeroSliderUnits,

    #[error("travel scale needs a non-zero number of encoder clicks")]
    ZeroTravelClicks,

    #[error("travel of {0} clicks does not fit a signed 32-bit encoder count")]
    TravelClicksTooLarge(u32),

    #[error("pin {0} is assigned to more than one role")]
    PinConflict(PinId),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
