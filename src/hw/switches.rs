// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Proximity switch inputs.
//!
//! Both switches are open-collector sensors on pulled-up GPIO inputs: the line reads high while
//! released and is pulled low when the carriage is in front of the sensor.

use stm32f7xx_hal::{
    gpio::{self, Input, PullUp},
    prelude::*,
};

use crate::drivers::{ProximityInputs, Sensor};

pub struct ProximitySwitches<const T_P: char, const T_N: u8, const B_P: char, const B_N: u8> {
    top: gpio::Pin<T_P, T_N, Input<PullUp>>,
    bottom: gpio::Pin<B_P, B_N, Input<PullUp>>,
}

impl<const T_P: char, const T_N: u8, const B_P: char, const B_N: u8>
    ProximitySwitches<T_P, T_N, B_P, B_N>
{
    /// Configure both pins as pulled-up inputs.
    pub fn new<TM, BM>(top: gpio::Pin<T_P, T_N, TM>, bottom: gpio::Pin<B_P, B_N, BM>) -> Self {
        Self {
            top: top.into_pull_up_input(),
            bottom: bottom.into_pull_up_input(),
        }
    }

    /// Raw level of the top switch (high = released).
    #[inline]
    pub fn top_is_high(&self) -> bool {
        self.top.is_high()
    }

    /// Raw level of the bottom switch (high = released).
    #[inline]
    pub fn bottom_is_high(&self) -> bool {
        self.bottom.is_high()
    }
}

impl<const T_P: char, const T_N: u8, const B_P: char, const B_N: u8> ProximityInputs
    for ProximitySwitches<T_P, T_N, B_P, B_N>
{
    fn is_released(&mut self, sensor: Sensor) -> bool {
        match sensor {
            Sensor::Top => self.top_is_high(),
            Sensor::Bottom => self.bottom_is_high(),
        }
    }
}
