//! Device descriptor type for enumerated HID devices.

use serde::{Deserialize, Serialize};

/// Identity and addressing of an enumerated HID device, as reported by
/// the enumeration facility before any connection is opened.
///
/// `usage` carries the HID usage value of the interface the descriptor
/// belongs to; Bluetooth HID stacks report no usage for the DualShock
/// vendor collection, so `None` doubles as the wireless indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial_number: Option<String>,
    pub usage: Option<u16>,
    pub path: String,
}

impl DeviceDescriptor {
    pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
        Self {
            vendor_id,
            product_id,
            serial_number: None,
            usage: None,
            path: path.into(),
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_usage(mut self, usage: u16) -> Self {
        self.usage = Some(usage);
        self
    }

    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    pub fn display_name(&self) -> String {
        format!("{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            vendor_id: 0,
            product_id: 0,
            serial_number: None,
            usage: None,
            path: String::new(),
        }
    }
}
