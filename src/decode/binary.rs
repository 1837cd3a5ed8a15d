//! Binary log decoder.
//!
//! The body is a fixed 40-byte little-endian layout. Accelerometer and
//! gyroscope words are converted to m/s² and rad/s with a [`ScaleTable`].

use core::mem::offset_of;

use zerocopy::FromBytes;

use crate::{HeaderAdapter, RawImuMeasurement, ScaleTable, Vector3};

use super::DecodeError;

/// Size of a binary log body in bytes.
pub const BINARY_LENGTH: usize = 40;

/// GPS week number, `u32`.
pub const WEEK_OFFSET: usize = 0;
/// Seconds into the week, `f64`.
pub const SECONDS_OFFSET: usize = 4;
/// IMU status word, `u32`. Not decoded.
pub const IMU_STATUS_OFFSET: usize = 12;
/// Accelerometer and gyroscope words, `i32` each, in Z, Y, X order.
pub const ACCEL_Z_OFFSET: usize = 16;
pub const ACCEL_Y_OFFSET: usize = 20;
pub const ACCEL_X_OFFSET: usize = 24;
pub const GYRO_Z_OFFSET: usize = 28;
pub const GYRO_Y_OFFSET: usize = 32;
pub const GYRO_X_OFFSET: usize = 36;

#[repr(C, packed)]
#[derive(FromBytes)]
struct RawImuBody {
    week: [u8; 4],
    seconds: [u8; 8],
    _imu_status: [u8; 4],
    accel_z: [u8; 4],
    accel_y: [u8; 4],
    accel_x: [u8; 4],
    gyro_z: [u8; 4],
    gyro_y: [u8; 4],
    gyro_x: [u8; 4],
}

const _: () = {
    assert!(size_of::<RawImuBody>() == BINARY_LENGTH);
    assert!(offset_of!(RawImuBody, week) == WEEK_OFFSET);
    assert!(offset_of!(RawImuBody, seconds) == SECONDS_OFFSET);
    assert!(offset_of!(RawImuBody, _imu_status) == IMU_STATUS_OFFSET);
    assert!(offset_of!(RawImuBody, accel_z) == ACCEL_Z_OFFSET);
    assert!(offset_of!(RawImuBody, accel_y) == ACCEL_Y_OFFSET);
    assert!(offset_of!(RawImuBody, accel_x) == ACCEL_X_OFFSET);
    assert!(offset_of!(RawImuBody, gyro_z) == GYRO_Z_OFFSET);
    assert!(offset_of!(RawImuBody, gyro_y) == GYRO_Y_OFFSET);
    assert!(offset_of!(RawImuBody, gyro_x) == GYRO_X_OFFSET);
};

/// Decode a binary log body using the G320N scale table.
///
/// This method is also re-exported as `rawimu::decode_binary`.
pub fn decode<A: HeaderAdapter>(
    data: &[u8],
    adapter: &A,
) -> Result<RawImuMeasurement, DecodeError<A::Error>> {
    decode_with(data, adapter, &ScaleTable::G320N)
}

/// Decode a binary log body, converting sensor words with `scale`.
///
/// The scale table's data rate must equal the receiver's configured output
/// rate, or every converted value is off by their ratio.
///
/// This method is also re-exported as `rawimu::decode_binary_with`.
pub fn decode_with<A: HeaderAdapter>(
    data: &[u8],
    adapter: &A,
    scale: &ScaleTable,
) -> Result<RawImuMeasurement, DecodeError<A::Error>> {
    let bytes: [u8; BINARY_LENGTH] = data.try_into().map_err(|_| DecodeError::UnexpectedLength {
        actual: data.len(),
        expected: BINARY_LENGTH,
    })?;

    let mut header = adapter.decode_binary(data).map_err(DecodeError::Header)?;
    header.message_name = RawImuMeasurement::MESSAGE_NAME.into();

    let RawImuBody {
        week,
        seconds,
        accel_z,
        accel_y,
        accel_x,
        gyro_z,
        gyro_y,
        gyro_x,
        ..
    } = zerocopy::transmute!(bytes);

    let accel = |r| scale.acceleration(i32::from_le_bytes(r));
    let gyro = |r| scale.angular_velocity(i32::from_le_bytes(r));

    Ok(RawImuMeasurement {
        header,
        gps_week_number: u32::from_le_bytes(week),
        gps_seconds: f64::from_le_bytes(seconds),
        linear_acceleration: Vector3 {
            x: accel(accel_x),
            y: accel(accel_y),
            z: accel(accel_z),
        },
        angular_velocity: Vector3 {
            x: gyro(gyro_x),
            y: gyro(gyro_y),
            z: gyro(gyro_z),
        },
    })
}
