//! DualShock 4 output driver.
//!
//! Layering:
//! - `padlink-hid-dualshock-protocol` holds the pure wire format
//!   (payload layout, report framing, transport selection);
//! - `padlink-hid-common` holds the descriptor type and the blocking
//!   connection trait with hidapi and mock implementations;
//! - this crate ties them together into [`Dualshock4`], the device
//!   handle with the fluent state builder and reset-on-teardown.
//!
//! ```no_run
//! use padlink_dualshock::Dualshock4;
//! use padlink_hid_common::DeviceDescriptor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # #[cfg(feature = "hidapi")]
//! # {
//! let api = hidapi::HidApi::new()?;
//! let descriptor = DeviceDescriptor::new(0x054C, 0x09CC, "/dev/hidraw0").with_usage(0x05);
//! let mut pad = Dualshock4::open(&api, &descriptor)?;
//! pad.set_rumble(100, 200).enable_rumble().send()?;
//! pad.set_led_color(255, 0, 0).enable_led().send()?;
//! // dropping `pad` sends the reset report and releases the device
//! # }
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]

pub mod error;
pub mod handle;

pub use error::{OpenError, SendError};
pub use handle::Dualshock4;

pub use padlink_hid_dualshock_protocol as protocol;
