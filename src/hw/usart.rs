// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! Carries the command stream from the host (see [`crate::protocol`]) and a human-readable status
//! line back to an attached terminal.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt::{self, Write as _};
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

use crate::control::CalibrationPhase;
use crate::motors::{Direction, ReportedPosition};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self { tx, rx }
    }

    /// Non-blocking read of one received byte.
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        self.rx.read().ok()
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// One status line: `pos=<code> enc=<clicks> home=<clicks> phase=<code> dir=<code>`.
    ///
    /// `pos` uses the single-channel encoding of [`ReportedPosition::code`].
    pub fn print_status(
        &mut self,
        position: ReportedPosition,
        encoder: i32,
        home: i32,
        phase: CalibrationPhase,
        direction: Direction,
    ) {
        let _ = write!(
            self,
            "pos={} enc={} home={} phase={} dir={}\r\n",
            position.code(),
            encoder,
            home,
            phase.code(),
            direction.code()
        );
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
