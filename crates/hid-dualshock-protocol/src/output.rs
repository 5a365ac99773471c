//! DualShock 4 HID output report encoding.
//!
//! All functions are pure and allocation-free.
//!
//! ## Wire layout
//!
//! The output payload is 31 bytes at fixed offsets; the full report is
//! the payload prefixed with a one-byte report id (32 bytes total).
//! The layout is a hardware contract and is written field-by-field
//! rather than relying on struct layout:
//!
//! - Byte 0: `flags` — subsystem-select bitmask (see [`crate::ids::flags`])
//! - Byte 1: reset marker (`0x01` only in the canonical reset payload)
//! - Byte 2: reserved (zero)
//! - Byte 3: small ("precision") motor power, 0–255
//! - Byte 4: large ("power") motor power, 0–255
//! - Bytes 5–7: lightbar red / green / blue channel intensities
//! - Byte 8: lightbar flash on-period (device units, ~10 ms each)
//! - Byte 9: lightbar flash off-period; 0/0 means solid
//! - Bytes 10–30: reserved tail (audio routing, aux bus — zero)
//!
//! Fields whose `flags` bit is clear are ignored by the controller, so
//! a zero-initialized payload is always safe to transmit ("no change").

use crate::ids::RESET_MARKER;

/// Wire size of the output payload (excluding the report id).
pub const OUTPUT_PAYLOAD_LEN: usize = 31;

/// Wire size of a full output report (report id + payload).
pub const OUTPUT_REPORT_LEN: usize = 32;

const OFFSET_FLAGS: usize = 0;
const OFFSET_RESET_MARKER: usize = 1;
const OFFSET_SMALL_MOTOR: usize = 3;
const OFFSET_LARGE_MOTOR: usize = 4;
const OFFSET_RED: usize = 5;
const OFFSET_GREEN: usize = 6;
const OFFSET_BLUE: usize = 7;
const OFFSET_FLASH_ON: usize = 8;
const OFFSET_FLASH_OFF: usize = 9;

/// Semantic fields of the DualShock 4 output payload.
///
/// A default-constructed payload is all-zero: every subsystem
/// deselected, every magnitude off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputPayload {
    /// Subsystem-select bitmask (see [`crate::ids::flags`]).
    pub flags: u8,
    /// Reset marker, `RESET_MARKER` only in the canonical reset payload.
    pub reset_marker: u8,
    /// Small ("precision") rumble motor power.
    pub small_motor_power: u8,
    /// Large ("power") rumble motor power.
    pub large_motor_power: u8,
    /// Lightbar red channel.
    pub red: u8,
    /// Lightbar green channel.
    pub green: u8,
    /// Lightbar blue channel.
    pub blue: u8,
    /// Lightbar flash on-period in device units.
    pub led_flash_on: u8,
    /// Lightbar flash off-period in device units.
    pub led_flash_off: u8,
}

impl OutputPayload {
    /// All-zero payload: no subsystem selected, everything off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical reset payload: all subsystems off, all magnitudes
    /// zero, reset marker set. Sent once at teardown.
    pub fn reset() -> Self {
        Self {
            reset_marker: RESET_MARKER,
            ..Self::default()
        }
    }

    /// Set bits in the subsystem-select bitmask.
    pub fn set_flag(&mut self, bits: u8) {
        self.flags |= bits;
    }

    /// Clear bits in the subsystem-select bitmask.
    pub fn clear_flag(&mut self, bits: u8) {
        self.flags &= !bits;
    }

    /// Whether all of `bits` are set in the bitmask.
    pub fn flag_set(&self, bits: u8) -> bool {
        self.flags & bits == bits
    }

    /// Encode the payload into its 31-byte wire form.
    ///
    /// Every byte of `out` is written: semantic fields at their defined
    /// offsets, everything else (including the reserved tail) zero.
    pub fn encode(&self, out: &mut [u8; OUTPUT_PAYLOAD_LEN]) {
        out.fill(0);
        out[OFFSET_FLAGS] = self.flags;
        out[OFFSET_RESET_MARKER] = self.reset_marker;
        out[OFFSET_SMALL_MOTOR] = self.small_motor_power;
        out[OFFSET_LARGE_MOTOR] = self.large_motor_power;
        out[OFFSET_RED] = self.red;
        out[OFFSET_GREEN] = self.green;
        out[OFFSET_BLUE] = self.blue;
        out[OFFSET_FLASH_ON] = self.led_flash_on;
        out[OFFSET_FLASH_OFF] = self.led_flash_off;
    }

    /// Reverse mapping of [`encode`](Self::encode), for tests and capture
    /// analysis. Reserved bytes are ignored.
    pub fn decode(raw: &[u8; OUTPUT_PAYLOAD_LEN]) -> Self {
        Self {
            flags: raw[OFFSET_FLAGS],
            reset_marker: raw[OFFSET_RESET_MARKER],
            small_motor_power: raw[OFFSET_SMALL_MOTOR],
            large_motor_power: raw[OFFSET_LARGE_MOTOR],
            red: raw[OFFSET_RED],
            green: raw[OFFSET_GREEN],
            blue: raw[OFFSET_BLUE],
            led_flash_on: raw[OFFSET_FLASH_ON],
            led_flash_off: raw[OFFSET_FLASH_OFF],
        }
    }

    /// Whether this payload is the canonical reset payload.
    pub fn is_reset(&self) -> bool {
        *self == Self::reset()
    }
}

/// A transport-framed output report: report id plus payload.
///
/// The report id is fixed when the connection is opened (USB vs.
/// Bluetooth framing) and never re-derived per send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputReport {
    /// Leading report id byte (see [`crate::ids::report_ids`]).
    pub report_id: u8,
    /// Staging payload, mutated between sends.
    pub payload: OutputPayload,
}

impl OutputReport {
    /// Zero-payload report with the given transport report id.
    pub fn new(report_id: u8) -> Self {
        Self {
            report_id,
            payload: OutputPayload::new(),
        }
    }

    /// Encode the full report into its 32-byte wire form.
    pub fn encode(&self) -> [u8; OUTPUT_REPORT_LEN] {
        let mut out = [0u8; OUTPUT_REPORT_LEN];
        out[0] = self.report_id;
        let mut payload = [0u8; OUTPUT_PAYLOAD_LEN];
        self.payload.encode(&mut payload);
        out[1..].copy_from_slice(&payload);
        out
    }
}
