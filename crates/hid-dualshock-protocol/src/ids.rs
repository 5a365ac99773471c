//! Sony DualShock 4 vendor/product IDs and output-report constants.
//!
//! The VID/PID pair matches the DualShock 4 v2 (CUH-ZCT2) as it
//! enumerates over both USB and Bluetooth. The output report id differs
//! per transport: `0x05` over USB, `0x11` over Bluetooth (the wireless
//! frame carries extra audio/CRC fields in the bytes this crate keeps
//! reserved).

/// Sony Interactive Entertainment USB vendor ID (1356 decimal).
pub const SONY_VENDOR_ID: u16 = 0x054C;

/// Known DualShock 4 product IDs.
pub mod product_ids {
    /// DualShock 4 v2 controller (CUH-ZCT2, 2508 decimal).
    pub const DUALSHOCK_4_V2: u16 = 0x09CC;
}

/// Output report IDs, one per transport framing.
pub mod report_ids {
    /// Output report over USB.
    pub const USB_OUTPUT: u8 = 0x05;
    /// Output report over Bluetooth.
    pub const BT_OUTPUT: u8 = 0x11;
}

/// Bits of the payload `flags` byte selecting which subsystems the
/// device applies from this report. Fields whose bit is clear are
/// ignored by the controller.
pub mod flags {
    /// Apply the rumble motor magnitudes.
    pub const RUMBLE: u8 = 0x01;
    /// Apply the lightbar color channels.
    pub const LED_COLOR: u8 = 0x02;
    /// Apply the lightbar blink on/off periods.
    pub const LED_BLINK: u8 = 0x04;
}

/// Value written at payload offset 1 in the canonical reset report.
pub const RESET_MARKER: u8 = 0x01;
