// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Logic
//!
//! Hardware-independent building blocks used by the axial actuator.
//!
//! ## Modules
//!
//! - [`calibration`] - Calibration phases and their transitions.
//! - [`latch`] - Edge latches for switch and button inputs.
//! - [`scale`] - Clicks ↔ logical units conversion.
//! - [`slowdown`] - Limit-switch slowdown policy.

pub mod calibration;
pub mod latch;
pub mod scale;
pub mod slowdown;

pub use calibration::CalibrationPhase;
pub use latch::{ActiveLevel, EdgeLatch, TickFlags};
pub use scale::TravelScale;
pub use slowdown::should_slow_down;
