//! DualShock 4 HID output protocol: report layout, encoding, and
//! transport framing.
//!
//! This crate is intentionally I/O-free and allocation-free. It
//! provides pure types and encoders that can be tested without
//! hardware or OS-level HID plumbing; the actual device handle lives
//! in `padlink-dualshock`.
//!
//! ## Verification sources
//!
//! VID/PID, report ids, and the output payload layout have been
//! cross-referenced against the Linux kernel driver
//! (`drivers/hid/hid-sony.c`, `dualshock4_send_output_report`) and
//! public protocol notes:
//! - USB output report: id `0x05`, 31-byte payload, byte 0 = valid
//!   flags, bytes 3–4 = rumble (weak/strong), bytes 5–7 = lightbar
//!   RGB, bytes 8–9 = lightbar blink on/off.
//! - Bluetooth output report: id `0x11`, same semantic fields; the
//!   extra audio/CRC bytes of the full wireless frame fall inside the
//!   reserved tail this crate always zeroes.

#![deny(static_mut_refs)]

pub mod ids;
pub mod output;
pub mod transport;

pub use ids::{RESET_MARKER, SONY_VENDOR_ID, flags, product_ids, report_ids};
pub use output::{OUTPUT_PAYLOAD_LEN, OUTPUT_REPORT_LEN, OutputPayload, OutputReport};
pub use transport::Transport;
