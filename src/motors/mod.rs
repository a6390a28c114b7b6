// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! Motor-level logic that sits above the port traits in `drivers`.
//!
//! ## Modules
//!
//! - [`axial_motor`] - Axial actuator state machine (calibration, tracking, slowdown).
//! - [`direction`] - Commanded direction and its driver line levels.
//! - [`position`] - Position report with its legacy status codes.

pub mod axial_motor;
pub mod direction;
pub mod position;

pub use axial_motor::{AxialActuator, UNKNOWN_POSITION};
pub use direction::{Direction, DriveSignals};
pub use position::ReportedPosition;
