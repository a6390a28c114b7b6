// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the axial actuator board (STM32F777).
//!
//! The pin choices here must match [`AxisPins::default`](crate::config::AxisPins), which is what
//! the actuator reports back for wiring checks.

use stm32f7xx_hal::{
    gpio::{gpioa, gpioc, gpiod, gpioe, Alternate, Floating, Input, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub usart1: Usart1Pins,
    pub motor: MotorPins,
    pub encoder: EncoderPins,
    pub switches: SwitchPins,
    pub button: ButtonPins,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// H-bridge control pins
pub struct MotorPins {
    pub cw: gpiod::PD12<Alternate<2>>,  // TIM4_CH1 (PWM)
    pub ccw: gpiod::PD13<Alternate<2>>, // TIM4_CH2 (PWM)
    pub enable: gpioa::PA3<Output<PushPull>>,
}

/// TIM2 Quadrature Encoder Inputs
pub struct EncoderPins {
    pub ch1: gpioa::PA0<Alternate<1>>,
    pub ch2: gpioa::PA1<Alternate<1>>,
}

/// Proximity switches; configured as pulled-up inputs by `ProximitySwitches`.
pub struct SwitchPins {
    pub top: gpioe::PE2<Input<Floating>>,
    pub bottom: gpioe::PE3<Input<Floating>>,
}

/// Manual calibration button
pub struct ButtonPins {
    pub calibrate: gpioc::PC13<Input<Floating>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpioc: pac::GPIOC, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            motor: MotorPins {
                cw: gpiod.pd12.into_alternate::<2>(),
                ccw: gpiod.pd13.into_alternate::<2>(),
                enable: gpioa.pa3.into_push_pull_output(),
            },

            encoder: EncoderPins {
                ch1: gpioa.pa0.into_alternate::<1>(),
                ch2: gpioa.pa1.into_alternate::<1>(),
            },

            switches: SwitchPins {
                top: gpioe.pe2.into_floating_input(),
                bottom: gpioe.pe3.into_floating_input(),
            },

            button: ButtonPins {
                calibrate: gpioc.pc13.into_floating_input(),
            },
        }
    }
}
