// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Message parser for the actuator command protocol.
//!
//! Bytes are pushed one at a time as they arrive on the USART. Unknown IDs and bad checksums are
//! dropped and the parser goes back to hunting for the start byte.

use crate::protocol::messages::*;

const MAX_PAYLOAD: usize = 2;

enum State {
    WaitStart,
    WaitId,
    Payload { id: u8, len: usize, got: usize },
    WaitChecksum { id: u8 },
}

pub struct Parser {
    state: State,
    checksum: u8,
    payload: [u8; MAX_PAYLOAD],
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            state: State::WaitStart,
            checksum: 0,
            payload: [0; MAX_PAYLOAD],
        }
    }

    /// Process a single incoming byte. Returns `Some(Command)` if a complete packet is received.
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        match self.state {
            State::WaitStart => {
                if byte == START_BYTE {
                    self.state = State::WaitId;
                    self.checksum = 0;
                }
            }
            State::WaitId => {
                self.checksum = self.checksum.wrapping_add(byte);

                self.state = match payload_len(byte) {
                    Some(0) => State::WaitChecksum { id: byte },
                    Some(len) => State::Payload {
                        id: byte,
                        len,
                        got: 0,
                    },
                    None => {
                        trace!("protocol: unknown id {=u8}", byte);
                        State::WaitStart
                    }
                };
            }
            State::Payload { id, len, got } => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.payload[got] = byte;

                let got = got + 1;
                self.state = if got == len {
                    State::WaitChecksum { id }
                } else {
                    State::Payload { id, len, got }
                };
            }
            State::WaitChecksum { id } => {
                let valid = byte == self.checksum;
                self.state = State::WaitStart;

                if !valid {
                    debug!("protocol: checksum mismatch for id {=u8}", id);
                    return None;
                }

                return match id {
                    MSG_SET_TARGET => Some(Command::SetTarget(u16::from_le_bytes(self.payload))),
                    MSG_CALIBRATE => Some(Command::Calibrate),
                    MSG_ENABLE_DRIVE => Some(Command::EnableDrive),
                    MSG_DISABLE_DRIVE => Some(Command::DisableDrive),
                    _ => None,
                };
            }
        }
        None
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
