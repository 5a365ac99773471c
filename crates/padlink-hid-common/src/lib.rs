//! Common HID utilities for PadLink device drivers.
//!
//! This crate provides the device descriptor type, the synchronous
//! connection trait (with a hidapi-backed implementation and an
//! in-memory mock), and the shared error type used by the protocol and
//! driver crates.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod connection;
pub mod device_info;

pub use connection::*;
pub use device_info::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
