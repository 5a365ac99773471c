//! Driver error types.
//!
//! Two tiers, deliberately distinct: construction-time errors
//! ([`OpenError`]) mean the caller handed this layer a device it
//! cannot drive; send-time errors ([`SendError`]) are transient I/O
//! failures after which the handle remains usable.

use padlink_hid_common::HidCommonError;

/// Errors constructing a device handle. No handle exists after any of
/// these, so no teardown report is attempted.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// The descriptor does not identify a supported controller.
    #[error(
        "controller identity mismatch: got {vendor_id:#06x}:{product_id:#06x}, \
         expected a DualShock 4"
    )]
    IdentifierMismatch {
        /// Vendor id the descriptor reported.
        vendor_id: u16,
        /// Product id the descriptor reported.
        product_id: u16,
    },

    /// The underlying transport yielded no usable connection.
    #[error("failed to open transport: {0}")]
    TransportOpenFailed(#[from] HidCommonError),
}

/// Errors transmitting one output report. The handle stays open; the
/// caller may retry or rebuild state.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The transport accepted fewer bytes than the report size.
    #[error("short write: wrote {written} of {expected} bytes")]
    ShortWrite {
        /// Full report size.
        expected: usize,
        /// Bytes the transport accepted.
        written: usize,
    },

    /// The write itself failed (transport error or disconnection).
    #[error("write failed: {0}")]
    Write(#[from] HidCommonError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display_carries_ids() {
        let err = OpenError::IdentifierMismatch {
            vendor_id: 0x054C,
            product_id: 0x05C4,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x054c"));
        assert!(msg.contains("0x05c4"));
    }

    #[test]
    fn test_send_error_from_hid_error() {
        let err = SendError::from(HidCommonError::Disconnected);
        assert!(matches!(err, SendError::Write(HidCommonError::Disconnected)));
    }

    #[test]
    fn test_short_write_display() {
        let err = SendError::ShortWrite {
            expected: 32,
            written: 12,
        };
        assert_eq!(err.to_string(), "short write: wrote 12 of 32 bytes");
    }
}
