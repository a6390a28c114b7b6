// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers for the STM32F7.

pub mod encoder;
pub mod pins;
pub mod switches;
pub mod usart;

pub use encoder::Encoder;
pub use pins::BoardPins;
pub use switches::ProximitySwitches;
pub use usart::Usart;
