//! The decoded inertial sample.

use crate::{
    decode::{binary::BINARY_LENGTH, text::ASCII_FIELD_COUNT},
    header::CommonHeader,
};

/// A three-axis quantity.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A single `RAWIMUS` inertial sample.
///
/// Units depend on the wire format the sample was decoded from. Binary logs
/// yield m/s² and rad/s; ASCII logs yield the receiver's raw counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImuMeasurement {
    /// The common log header, with its message name set to
    /// [`Self::MESSAGE_NAME`].
    pub header: CommonHeader,
    /// GPS week number.
    pub gps_week_number: u32,
    /// Seconds into the GPS week.
    pub gps_seconds: f64,
    pub linear_acceleration: Vector3,
    pub angular_velocity: Vector3,
}

impl RawImuMeasurement {
    /// Receiver message identifier of the log.
    pub const MESSAGE_ID: u32 = 325;
    /// Name written into the header of every decoded sample.
    pub const MESSAGE_NAME: &'static str = "RAWIMUS";
    /// Size of a binary log body in bytes.
    pub const BINARY_LENGTH: usize = BINARY_LENGTH;
    /// Number of tokens in an ASCII log body.
    pub const ASCII_FIELD_COUNT: usize = ASCII_FIELD_COUNT;
}
