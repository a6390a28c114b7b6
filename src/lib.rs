// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Axial Actuator Firmware
//!
//! This crate contains the control logic and firmware for one linear (axial) actuator: a DC motor
//! on a dual-direction H-bridge, a quadrature encoder, and two proximity switches bounding the
//! travel. The axis is homed against the top switch and then tracks a target given in logical
//! slider units (0..=4095 by default).
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`motors`] | `AxialActuator` state machine, direction and position reporting |
//! | [`control`] | Calibration phases, travel scale, slowdown policy, edge latches |
//! | [`drivers`] | Port traits the core is written against, H-bridge driver |
//! | [`config`] | Pin roles, travel scale and tolerance, with board defaults |
//! | [`protocol`] | Framed serial command parser |
//! | `hw` | MCU-level wrappers around USART, timers and GPIO (`firmware` feature) |
//!
//! Everything outside `hw` and the L298N driver is hardware-independent and tested on the host.
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod motors;
pub mod protocol;

#[cfg(feature = "firmware")]
pub mod hw;

pub use config::{ActuatorConfig, AxisPins, PinId};
pub use control::{CalibrationPhase, TickFlags, TravelScale};
pub use drivers::{DirectionLine, DriverPort, EncoderSource, ProximityInputs, Sensor};
pub use error::ConfigError;
pub use motors::{AxialActuator, Direction, ReportedPosition};
