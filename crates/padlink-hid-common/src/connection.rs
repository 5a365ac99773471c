//! Synchronous HID connection trait, hidapi adapter, and test mock.
//!
//! The driver layer is single-threaded and blocking, so the trait is
//! deliberately synchronous: one `write_report` per send, no internal
//! suspension points, no retry.

use crate::{DeviceDescriptor, HidCommonError, HidCommonResult};

/// A raw byte-oriented connection to an open HID device.
///
/// Implementations own the underlying OS handle; dropping the
/// connection releases it.
pub trait HidConnection {
    /// Perform one blocking write of a full report (report id first).
    ///
    /// Returns the number of bytes accepted by the transport. A short
    /// count is reported as-is; classifying it is the caller's job.
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;

    /// Best-effort connectivity indication.
    fn is_connected(&self) -> bool;
}

#[cfg(feature = "hidapi")]
mod hidapi_impl {
    use super::*;

    /// [`HidConnection`] backed by a `hidapi::HidDevice`.
    pub struct HidapiConnection {
        device: hidapi::HidDevice,
        descriptor: DeviceDescriptor,
    }

    impl HidapiConnection {
        /// Open the device a descriptor points at, by serial number when
        /// one is present, otherwise by VID/PID.
        pub fn open(api: &hidapi::HidApi, descriptor: &DeviceDescriptor) -> HidCommonResult<Self> {
            let opened = match descriptor.serial_number.as_deref() {
                Some(serial) => {
                    api.open_serial(descriptor.vendor_id, descriptor.product_id, serial)
                }
                None => api.open(descriptor.vendor_id, descriptor.product_id),
            };
            let device = opened.map_err(|e| HidCommonError::OpenError(e.to_string()))?;
            tracing::debug!(
                device = %descriptor.display_name(),
                path = %descriptor.path,
                "opened HID connection"
            );
            Ok(Self {
                device,
                descriptor: descriptor.clone(),
            })
        }

        /// The descriptor this connection was opened from.
        pub fn descriptor(&self) -> &DeviceDescriptor {
            &self.descriptor
        }
    }

    impl HidConnection for HidapiConnection {
        fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            self.device
                .write(data)
                .map_err(|e| HidCommonError::WriteError(e.to_string()))
        }

        fn is_connected(&self) -> bool {
            // hidapi offers no liveness probe; disconnection surfaces as
            // a write error on the next report.
            true
        }
    }
}

#[cfg(feature = "hidapi")]
pub use hidapi_impl::HidapiConnection;

pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory [`HidConnection`] recording every written report.
    ///
    /// Clones share the same history and connectivity state, so a test
    /// can hand one clone to a device handle and keep another to
    /// inspect writes after the handle is dropped.
    #[derive(Clone)]
    pub struct MockHidConnection {
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
    }

    impl MockHidConnection {
        pub fn new() -> Self {
            Self {
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
            }
        }

        pub fn write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }
    }

    impl Default for MockHidConnection {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HidConnection for MockHidConnection {
        fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            if !self.is_connected() {
                return Err(HidCommonError::Disconnected);
            }
            let mut history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.push(data.to_vec());
            Ok(data.len())
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }
    }
}
