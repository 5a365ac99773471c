//! End-to-end driver scenario over the mock connection: state persists
//! across sends and the teardown reset is the last report on the wire.

use padlink_dualshock::Dualshock4;
use padlink_hid_common::DeviceDescriptor;
use padlink_hid_common::mock::MockHidConnection;
use padlink_hid_dualshock_protocol::{
    OUTPUT_PAYLOAD_LEN, OUTPUT_REPORT_LEN, OutputPayload, SONY_VENDOR_ID, flags, product_ids,
    report_ids,
};

fn payload_of(wire: &[u8]) -> OutputPayload {
    assert_eq!(wire.len(), OUTPUT_REPORT_LEN);
    let mut raw = [0u8; OUTPUT_PAYLOAD_LEN];
    raw.copy_from_slice(&wire[1..]);
    OutputPayload::decode(&raw)
}

#[test]
fn rumble_then_led_then_teardown() {
    let conn = MockHidConnection::new();
    let descriptor = DeviceDescriptor::new(SONY_VENDOR_ID, product_ids::DUALSHOCK_4_V2, "hidraw0")
        .with_usage(0x05);

    {
        let mut pad =
            Dualshock4::with_connection(&descriptor, conn.clone()).expect("open should succeed");

        pad.set_rumble(100, 200).enable_rumble().send().expect("first send");
        pad.set_led_color(255, 0, 0).enable_led().send().expect("second send");
    } // drop sends the reset report

    let history = conn.write_history();
    assert_eq!(history.len(), 3);
    for wire in &history {
        assert_eq!(wire.len(), OUTPUT_REPORT_LEN);
        assert_eq!(wire[0], report_ids::USB_OUTPUT);
    }

    let first = payload_of(&history[0]);
    assert_eq!(first.flags, flags::RUMBLE);
    assert_eq!(first.small_motor_power, 100);
    assert_eq!(first.large_motor_power, 200);
    assert_eq!((first.red, first.green, first.blue), (0, 0, 0));
    assert_eq!((first.led_flash_on, first.led_flash_off), (0, 0));

    // LED state added, rumble state carried over unchanged
    let second = payload_of(&history[1]);
    assert_eq!(second.flags, flags::RUMBLE | flags::LED_COLOR);
    assert_eq!(second.small_motor_power, 100);
    assert_eq!(second.large_motor_power, 200);
    assert_eq!((second.red, second.green, second.blue), (255, 0, 0));

    let last = payload_of(&history[2]);
    assert!(last.is_reset(), "final report must be the canonical reset");
}

#[test]
fn blink_periods_ride_with_the_blink_flag() {
    let conn = MockHidConnection::new();
    let descriptor =
        DeviceDescriptor::new(SONY_VENDOR_ID, product_ids::DUALSHOCK_4_V2, "bt").with_serial("s1");

    let mut pad =
        Dualshock4::with_connection(&descriptor, conn.clone()).expect("open should succeed");
    pad.set_led_color(0, 0, 255)
        .set_led_on_period(20)
        .set_led_off_period(20)
        .enable_led()
        .enable_led_blink()
        .send()
        .expect("send");

    let history = conn.write_history();
    let wire = &history[0];
    assert_eq!(wire[0], report_ids::BT_OUTPUT, "no usage means Bluetooth framing");
    let payload = payload_of(wire);
    assert_eq!(payload.flags, flags::LED_COLOR | flags::LED_BLINK);
    assert_eq!(payload.led_flash_on, 20);
    assert_eq!(payload.led_flash_off, 20);
}
