//! Transport detection and report-id selection.
//!
//! The DualShock 4 frames its output report differently per link: id
//! `0x05` over USB, id `0x11` over Bluetooth. Which link is in use is
//! derived from the HID usage value the descriptor reports at
//! enumeration time: the Bluetooth HID stack exposes no usage for the
//! vendor collection, so a missing usage means wireless. The decision
//! is made once per connection and never re-derived — re-deriving per
//! send could silently switch framing if connectivity changed
//! mid-session, which this layer does not attempt to detect.

use crate::ids::report_ids;

/// Physical link a controller connection runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Wired USB connection.
    #[default]
    Usb,
    /// Bluetooth / wireless connection.
    Bluetooth,
}

impl Transport {
    /// Derive the transport from the descriptor's usage indicator.
    ///
    /// `None` (no valid usage reported) selects Bluetooth; any present
    /// usage selects USB.
    pub fn from_usage(usage: Option<u16>) -> Self {
        match usage {
            Some(_) => Transport::Usb,
            None => Transport::Bluetooth,
        }
    }

    /// Leading report id byte for output reports on this transport.
    pub fn report_id(self) -> u8 {
        match self {
            Transport::Usb => report_ids::USB_OUTPUT,
            Transport::Bluetooth => report_ids::BT_OUTPUT,
        }
    }
}
