// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! L298N-style dual H-bridge with PWM on both direction inputs and a GPIO enable gate.
//!
//! Wiring:
//! - IN1 ("CW" input):  TIM4 CH1 PWM
//! - IN2 ("CCW" input): TIM4 CH2 PWM
//! - ENA:               push-pull GPIO, high = bridge enabled
//!
//! Direction levels arrive on a `0..=255` scale and are rescaled to the timer's duty resolution.

use stm32f7xx_hal::{
    gpio::{self, Output, PushPull},
    prelude::*,
};

use crate::drivers::port::{DriverPort, SIGNAL_FULL};

pub struct L298n<const EN_P: char, const EN_N: u8, PwmCw, PwmCcw> {
    pwm_cw: PwmCw,
    pwm_ccw: PwmCcw,
    enable: gpio::Pin<EN_P, EN_N, Output<PushPull>>,
    enabled: bool,
}

impl<const EN_P: char, const EN_N: u8, PwmCw, PwmCcw> L298n<EN_P, EN_N, PwmCw, PwmCcw>
where
    PwmCw: _embedded_hal_PwmPin<Duty = u16>,
    PwmCcw: _embedded_hal_PwmPin<Duty = u16>,
{
    /// Take ownership of the PWM channels and the enable pin. The bridge starts disabled with
    /// both inputs at zero.
    pub fn new<MODE>(
        mut pwm_cw: PwmCw,
        mut pwm_ccw: PwmCcw,
        enable: gpio::Pin<EN_P, EN_N, MODE>,
    ) -> Self {
        let mut enable = enable.into_push_pull_output();
        enable.set_low();

        pwm_cw.set_duty(0);
        pwm_ccw.set_duty(0);
        pwm_cw.enable();
        pwm_ccw.enable();

        Self {
            pwm_cw,
            pwm_ccw,
            enable,
            enabled: false,
        }
    }

    #[inline]
    fn duty_for(level: u8, max_duty: u16) -> u16 {
        ((level as u32 * max_duty as u32) / SIGNAL_FULL as u32) as u16
    }
}

impl<const EN_P: char, const EN_N: u8, PwmCw, PwmCcw> DriverPort
    for L298n<EN_P, EN_N, PwmCw, PwmCcw>
where
    PwmCw: _embedded_hal_PwmPin<Duty = u16>,
    PwmCcw: _embedded_hal_PwmPin<Duty = u16>,
{
    fn set_direction_signals(&mut self, cw: u8, ccw: u8) {
        let cw_duty = Self::duty_for(cw, self.pwm_cw.get_max_duty());
        let ccw_duty = Self::duty_for(ccw, self.pwm_ccw.get_max_duty());
        self.pwm_cw.set_duty(cw_duty);
        self.pwm_ccw.set_duty(ccw_duty);
    }

    fn set_enable(&mut self, on: bool) {
        if on {
            self.enable.set_high();
        } else {
            self.enable.set_low();
        }
        self.enabled = on;
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
