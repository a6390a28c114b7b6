// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Quadrature encoder support via TIM2 in encoder mode.
//!
//! TIM2 is a 32-bit timer, so the counter covers the whole travel without wraparound handling, and
//! reading it is a single 32-bit load that cannot tear against the hardware's own updates.

use stm32f7xx_hal::pac;

use crate::drivers::EncoderSource;

pub struct Encoder<TIM> {
    tim: TIM,
}

impl Encoder<pac::TIM2> {
    /// Configure TIM2 as a quadrature encoder with full 32-bit range.
    ///
    /// The timer clock is enabled here; CH1/CH2 pins must already be in AF1.
    pub fn tim2(tim2: pac::TIM2) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Auto-reload: max 32-bit
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Slave mode: encoder mode 3 (count on both TI1 and TI2)
        tim.smcr.modify(|_, w| w.sms().bits(0b011));

        // Configure CH1/CH2 as inputs from TI1/TI2
        tim.ccmr1_input().modify(|_, w| w.cc1s().ti1().cc2s().ti2());

        // Polarity and enable for both channels.
        tim.ccer.modify(|_, w| {
            w.cc1p()
                .clear_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        tim.cnt.write(|w| w.bits(0));
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Interpret the counter as a signed 32-bit position.
    #[inline]
    pub fn position(&self) -> i32 {
        self.tim.cnt.read().cnt().bits() as i32
    }
}

impl EncoderSource for Encoder<pac::TIM2> {
    #[inline]
    fn read(&mut self) -> i32 {
        self.position()
    }
}
