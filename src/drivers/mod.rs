// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device Drivers and Ports
//!
//! This module holds the port traits the actuator core is written against, plus the device
//! drivers that implement them.
//!
//! ## Modules
//!
//! - [`port`] – `DriverPort`, `EncoderSource` and `ProximityInputs`
//! - [`shared_count`] – Encoder count shared with an interrupt handler
//! - [`l298n`] – L298N-style H-bridge on two PWM channels (firmware only)

pub mod port;
pub mod shared_count;

#[cfg(feature = "firmware")]
pub mod l298n;

#[cfg(feature = "firmware")]
pub use l298n::L298n;
pub use port::{
    DirectionLine, DriverPort, EncoderSource, ProximityInputs, Sensor, SIGNAL_FULL, SIGNAL_HOLD,
};
pub use shared_count::AtomicCount;
