//! The DualShock 4 device handle.
//!
//! Owns the open connection and the staging output report, exposes the
//! fluent state builder, and guarantees a best-effort reset report
//! before the connection is released.

use padlink_hid_common::{DeviceDescriptor, HidConnection};
use padlink_hid_dualshock_protocol::{
    OUTPUT_REPORT_LEN, OutputPayload, OutputReport, SONY_VENDOR_ID, Transport, flags, product_ids,
};

use crate::error::{OpenError, SendError};

/// Handle to one open DualShock 4 connection.
///
/// Exactly one handle exists per physical connection; the handle owns
/// both the connection and the staging report exclusively. All
/// operations are blocking and the handle carries no internal locking;
/// callers needing cross-thread access must serialize a full
/// mutate-and-send sequence themselves.
///
/// Builder mutators only touch their own fields, so state persists
/// across sends: set rumble once, keep sending LED updates, and the
/// rumble bytes ride along unchanged.
///
/// Dropping the handle stages the canonical reset payload and attempts
/// exactly one final send before the connection is released. A failed
/// teardown write is logged and otherwise ignored; there is no further
/// corrective action available at that point.
pub struct Dualshock4<C: HidConnection> {
    connection: C,
    staging: OutputReport,
    transport: Transport,
    reset_sent: bool,
}

impl<C: HidConnection> Dualshock4<C> {
    /// Build a handle over an already-open connection.
    ///
    /// Validates the descriptor's identity (Sony VID, DualShock 4 v2
    /// PID) and fixes the transport framing from its usage indicator.
    /// The staging payload starts all-zero, so an immediate `send`
    /// would be a harmless no-change report.
    ///
    /// # Errors
    ///
    /// [`OpenError::IdentifierMismatch`] when the descriptor does not
    /// identify a supported controller.
    pub fn with_connection(
        descriptor: &DeviceDescriptor,
        connection: C,
    ) -> Result<Self, OpenError> {
        validate_identity(descriptor)?;
        let transport = Transport::from_usage(descriptor.usage);
        tracing::debug!(
            device = %descriptor.display_name(),
            ?transport,
            report_id = format_args!("{:#04x}", transport.report_id()),
            "DualShock 4 handle created"
        );
        Ok(Self {
            connection,
            staging: OutputReport::new(transport.report_id()),
            transport,
            reset_sent: false,
        })
    }

    /// Transport framing selected at construction time.
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Current staging payload (the next state to transmit).
    pub fn staged(&self) -> &OutputPayload {
        &self.staging.payload
    }

    // ── State builder ──────────────────────────────────────────────────

    /// Select the rumble subsystem in the next report.
    pub fn enable_rumble(&mut self) -> &mut Self {
        self.staging.payload.set_flag(flags::RUMBLE);
        self
    }

    /// Deselect the rumble subsystem; magnitudes are left in place.
    pub fn disable_rumble(&mut self) -> &mut Self {
        self.staging.payload.clear_flag(flags::RUMBLE);
        self
    }

    /// Select the lightbar color subsystem in the next report.
    pub fn enable_led(&mut self) -> &mut Self {
        self.staging.payload.set_flag(flags::LED_COLOR);
        self
    }

    /// Deselect the lightbar color subsystem; channels are left in place.
    pub fn disable_led(&mut self) -> &mut Self {
        self.staging.payload.clear_flag(flags::LED_COLOR);
        self
    }

    /// Select the lightbar blink subsystem in the next report.
    pub fn enable_led_blink(&mut self) -> &mut Self {
        self.staging.payload.set_flag(flags::LED_BLINK);
        self
    }

    /// Deselect the lightbar blink subsystem; periods are left in place.
    pub fn disable_led_blink(&mut self) -> &mut Self {
        self.staging.payload.clear_flag(flags::LED_BLINK);
        self
    }

    /// Set both rumble magnitudes. Does not touch the rumble flag.
    pub fn set_rumble(&mut self, small: u8, large: u8) -> &mut Self {
        self.staging.payload.small_motor_power = small;
        self.staging.payload.large_motor_power = large;
        self
    }

    /// Set the lightbar color channels. Does not touch the LED flag.
    pub fn set_led_color(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
        self.staging.payload.red = red;
        self.staging.payload.green = green;
        self.staging.payload.blue = blue;
        self
    }

    /// Set both blink periods (coarse device units, ~10 ms each).
    /// 0/0 means solid. Does not touch the blink flag.
    pub fn set_led_flash(&mut self, on: u8, off: u8) -> &mut Self {
        self.staging.payload.led_flash_on = on;
        self.staging.payload.led_flash_off = off;
        self
    }

    /// Set only the blink on-period.
    pub fn set_led_on_period(&mut self, period: u8) -> &mut Self {
        self.staging.payload.led_flash_on = period;
        self
    }

    /// Set only the blink off-period.
    pub fn set_led_off_period(&mut self, period: u8) -> &mut Self {
        self.staging.payload.led_flash_off = period;
        self
    }

    // ── Transmitter ────────────────────────────────────────────────────

    /// Serialize the staging report and perform one blocking write.
    ///
    /// No internal retry: a failed write may mean physical
    /// disconnection, and retry policy belongs to the caller. The
    /// handle stays open either way.
    ///
    /// # Errors
    ///
    /// [`SendError::Write`] on a transport error,
    /// [`SendError::ShortWrite`] when the transport accepted fewer than
    /// the full 32 bytes.
    pub fn send(&mut self) -> Result<(), SendError> {
        let wire = self.staging.encode();
        let written = self.connection.write_report(&wire)?;
        if written != OUTPUT_REPORT_LEN {
            return Err(SendError::ShortWrite {
                expected: OUTPUT_REPORT_LEN,
                written,
            });
        }
        tracing::trace!(
            report_id = format_args!("{:#04x}", self.staging.report_id),
            "output report sent"
        );
        Ok(())
    }

    /// Send the reset report now and consume the handle, surfacing the
    /// outcome the Drop path can only log.
    ///
    /// # Errors
    ///
    /// The same errors as [`send`](Self::send); the connection is
    /// released regardless.
    pub fn shutdown(mut self) -> Result<(), SendError> {
        self.reset_sent = true;
        self.send_reset()
    }

    fn send_reset(&mut self) -> Result<(), SendError> {
        self.staging.payload = OutputPayload::reset();
        self.send()
    }
}

impl<C: HidConnection> Drop for Dualshock4<C> {
    fn drop(&mut self) {
        if self.reset_sent {
            return;
        }
        self.reset_sent = true;
        if let Err(e) = self.send_reset() {
            tracing::warn!(error = %e, "teardown reset report failed");
        }
    }
}

fn validate_identity(descriptor: &DeviceDescriptor) -> Result<(), OpenError> {
    if !descriptor.matches(SONY_VENDOR_ID, product_ids::DUALSHOCK_4_V2) {
        return Err(OpenError::IdentifierMismatch {
            vendor_id: descriptor.vendor_id,
            product_id: descriptor.product_id,
        });
    }
    Ok(())
}

#[cfg(feature = "hidapi")]
impl Dualshock4<padlink_hid_common::HidapiConnection> {
    /// Validate the descriptor and open the physical device via hidapi.
    ///
    /// Identity is checked before any connection is attempted.
    ///
    /// # Errors
    ///
    /// [`OpenError::IdentifierMismatch`] on an unsupported descriptor,
    /// [`OpenError::TransportOpenFailed`] when hidapi yields no usable
    /// connection.
    pub fn open(api: &hidapi::HidApi, descriptor: &DeviceDescriptor) -> Result<Self, OpenError> {
        validate_identity(descriptor)?;
        let connection = padlink_hid_common::HidapiConnection::open(api, descriptor)?;
        Self::with_connection(descriptor, connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padlink_hid_common::mock::MockHidConnection;
    use padlink_hid_dualshock_protocol::report_ids;

    fn ds4_descriptor() -> DeviceDescriptor {
        DeviceDescriptor::new(SONY_VENDOR_ID, product_ids::DUALSHOCK_4_V2, "/dev/hidraw0")
    }

    fn open_usb(conn: MockHidConnection) -> Dualshock4<MockHidConnection> {
        Dualshock4::with_connection(&ds4_descriptor().with_usage(0x05), conn)
            .expect("open should succeed")
    }

    #[test]
    fn test_wrong_product_id_rejected() {
        let desc = DeviceDescriptor::new(SONY_VENDOR_ID, 0x05C4, "/dev/hidraw0");
        let result = Dualshock4::with_connection(&desc, MockHidConnection::new());
        assert!(matches!(
            result,
            Err(OpenError::IdentifierMismatch {
                vendor_id: 0x054C,
                product_id: 0x05C4
            })
        ));
    }

    #[test]
    fn test_wrong_vendor_id_rejected() {
        let desc = DeviceDescriptor::new(0x045E, product_ids::DUALSHOCK_4_V2, "/dev/hidraw0");
        let result = Dualshock4::with_connection(&desc, MockHidConnection::new());
        assert!(matches!(result, Err(OpenError::IdentifierMismatch { .. })));
    }

    #[test]
    fn test_usage_selects_transport() {
        let conn = MockHidConnection::new();
        let usb = open_usb(conn.clone());
        assert_eq!(usb.transport(), Transport::Usb);
        drop(usb);

        let bt = Dualshock4::with_connection(&ds4_descriptor(), conn).expect("open");
        assert_eq!(bt.transport(), Transport::Bluetooth);
    }

    #[test]
    fn test_bluetooth_report_id_on_wire() {
        let conn = MockHidConnection::new();
        let mut handle = Dualshock4::with_connection(&ds4_descriptor(), conn.clone()).expect("open");
        handle.send().expect("send");
        assert_eq!(conn.write_history()[0][0], report_ids::BT_OUTPUT);
    }

    #[test]
    fn test_set_rumble_without_flag_leaves_flag_clear() {
        let conn = MockHidConnection::new();
        let mut handle = open_usb(conn.clone());
        handle.set_rumble(100, 200).send().expect("send");
        let wire = &conn.write_history()[0];
        assert_eq!(wire[1] & flags::RUMBLE, 0, "rumble flag must stay clear");
        assert_eq!(wire[4], 100);
        assert_eq!(wire[5], 200);
    }

    #[test]
    fn test_enable_rumble_without_magnitudes_sends_zero() {
        let conn = MockHidConnection::new();
        let mut handle = open_usb(conn.clone());
        handle.enable_rumble().send().expect("send");
        let wire = &conn.write_history()[0];
        assert_eq!(wire[1] & flags::RUMBLE, flags::RUMBLE);
        assert_eq!(wire[4], 0);
        assert_eq!(wire[5], 0);
    }

    #[test]
    fn test_send_failure_keeps_handle_usable() {
        let conn = MockHidConnection::new();
        let mut handle = open_usb(conn.clone());
        conn.disconnect();
        assert!(handle.send().is_err());
        conn.reconnect();
        handle.send().expect("send after reconnect");
        // one successful send plus the drop-time reset
        drop(handle);
        assert_eq!(conn.write_history().len(), 2);
    }

    #[test]
    fn test_drop_without_send_issues_one_reset() {
        let conn = MockHidConnection::new();
        let handle = open_usb(conn.clone());
        drop(handle);
        let history = conn.write_history();
        assert_eq!(history.len(), 1, "exactly one teardown report");
        let wire = &history[0];
        assert_eq!(wire.len(), OUTPUT_REPORT_LEN);
        assert_eq!(wire[0], report_ids::USB_OUTPUT);
        assert_eq!(wire[1], 0x00, "no subsystem selected");
        assert_eq!(wire[2], 0x01, "reset marker set");
        assert_eq!(&wire[3..], &[0u8; 29][..]);
    }

    #[test]
    fn test_drop_tolerates_teardown_write_failure() {
        let conn = MockHidConnection::new();
        let handle = open_usb(conn.clone());
        conn.disconnect();
        drop(handle); // must not panic
        assert!(conn.write_history().is_empty());
    }

    #[test]
    fn test_shutdown_suppresses_drop_reset() {
        let conn = MockHidConnection::new();
        let handle = open_usb(conn.clone());
        handle.shutdown().expect("shutdown");
        let history = conn.write_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0][2], 0x01, "reset marker set");
    }

    #[test]
    fn test_shutdown_surfaces_write_failure() {
        let conn = MockHidConnection::new();
        let handle = open_usb(conn.clone());
        conn.disconnect();
        assert!(handle.shutdown().is_err());
    }
}
