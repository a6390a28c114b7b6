// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command messages accepted by the actuator over the serial link.
//!
//! Frame layout: `START_BYTE, id, payload.., checksum`, where the checksum is the wrapping sum of
//! the id and payload bytes.

/// Sync byte for the protocol.
pub const START_BYTE: u8 = 0xA5;

// Message IDs
pub const MSG_SET_TARGET: u8 = 0x40;
pub const MSG_CALIBRATE: u8 = 0x41;
pub const MSG_ENABLE_DRIVE: u8 = 0x42;
pub const MSG_DISABLE_DRIVE: u8 = 0x43;

/// Payload length in bytes for a message ID, or `None` for unknown IDs.
pub const fn payload_len(id: u8) -> Option<usize> {
    match id {
        MSG_SET_TARGET => Some(2),
        MSG_CALIBRATE | MSG_ENABLE_DRIVE | MSG_DISABLE_DRIVE => Some(0),
        _ => None,
    }
}

/// Commands for the axial actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// New target position in logical units (little-endian payload).
    SetTarget(u16),
    Calibrate,
    EnableDrive,
    DisableDrive,
}
