//! ASCII log decoder.
//!
//! **Values decoded from ASCII logs are the receiver's raw counts, not
//! accelerations or angular velocities.** No scale factors are applied. The
//! ASCII log is unsuitable for high-rate use; prefer [`super::binary`].
//!
//! The body arrives already split into fields. Fields are positional, and
//! field 2 (the IMU status word) is skipped.

use core::{fmt, str::FromStr};

use crate::{HeaderAdapter, RawImuMeasurement, Vector3};

use super::DecodeError;

/// Number of fields in an ASCII log body.
pub const ASCII_FIELD_COUNT: usize = 9;

pub const WEEK_FIELD: usize = 0;
pub const SECONDS_FIELD: usize = 1;
/// IMU status word. Not decoded.
pub const IMU_STATUS_FIELD: usize = 2;
pub const ACCEL_Z_FIELD: usize = 3;
pub const ACCEL_Y_FIELD: usize = 4;
pub const ACCEL_X_FIELD: usize = 5;
pub const GYRO_Z_FIELD: usize = 6;
pub const GYRO_Y_FIELD: usize = 7;
pub const GYRO_X_FIELD: usize = 8;

/// Derive [`FromFields`] for a struct decoded from positional text fields.
///
/// # Example
///
/// Add the `field(N)` attribute to each struct field decoded from token `N`.
/// `N` may be an integer literal below 32 or a named constant. The field's
/// type must implement [`FromStr`]. Fields without an attribute are set to
/// their [`Default`].
///
/// ```
/// #[derive(Debug, FromFields)]
/// struct Position {
///     #[field(0)]
///     latitude: f64,
///     #[field(1)]
///     longitude: f64,
///     #[field(3)]
///     satellites: u8,
/// }
/// ```
pub use rawimu_derive::FromFields;

/// Decode a value from a sequence of text fields.
///
/// Every field is attempted, even after one fails, so that the returned
/// [`FieldMask`] names all of the fields that could not be parsed. A value is
/// only produced when every field succeeds.
///
/// See the [`FromFields`](macro@FromFields) derive macro for an automatic
/// implementation of this trait.
pub trait FromFields: Sized {
    /// Decode from `fields`, or report the indices of fields that failed.
    fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, FieldMask>;

    /// Parse field `index`, recording it in `failed` if it is missing or
    /// invalid.
    #[doc(hidden)]
    fn parse_field<T: FromStr, S: AsRef<str>>(
        fields: &[S],
        index: usize,
        failed: &mut FieldMask,
    ) -> Option<T> {
        let value = fields.get(index).and_then(|f| f.as_ref().parse().ok());

        if value.is_none() {
            failed.insert(index);
        }

        value
    }
}

/// A set of field indices.
///
/// Holds indices below [`FieldMask::CAPACITY`]. Larger indices are not
/// recorded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldMask(u32);

impl FieldMask {
    pub const CAPACITY: usize = u32::BITS as usize;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, index: usize) {
        if index < Self::CAPACITY {
            self.0 |= 1 << index;
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The lowest index in the set.
    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.0.trailing_zeros() as usize)
    }

    /// Iterate over the indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + use<> {
        let bits = self.0;
        (0..Self::CAPACITY).filter(move |&i| bits & (1 << i) != 0)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, index) in self.iter().enumerate() {
            if n != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

#[derive(FromFields)]
struct RawImuFields {
    #[field(WEEK_FIELD)]
    week: u32,
    #[field(SECONDS_FIELD)]
    seconds: f64,
    #[field(ACCEL_Z_FIELD)]
    accel_z: f64,
    #[field(ACCEL_Y_FIELD)]
    accel_y: f64,
    #[field(ACCEL_X_FIELD)]
    accel_x: f64,
    #[field(GYRO_Z_FIELD)]
    gyro_z: f64,
    #[field(GYRO_Y_FIELD)]
    gyro_y: f64,
    #[field(GYRO_X_FIELD)]
    gyro_x: f64,
}

/// Decode a tokenized ASCII log body.
///
/// Sensor values are raw counts. See the [module documentation](self).
///
/// This method is also re-exported as `rawimu::decode_text`.
pub fn decode<A: HeaderAdapter, S: AsRef<str>>(
    fields: &[S],
    adapter: &A,
) -> Result<RawImuMeasurement, DecodeError<A::Error>> {
    if fields.len() != ASCII_FIELD_COUNT {
        Err(DecodeError::UnexpectedFieldCount {
            actual: fields.len(),
            expected: ASCII_FIELD_COUNT,
        })?;
    }

    let mut header = adapter.decode_text(fields).map_err(DecodeError::Header)?;
    header.message_name = RawImuMeasurement::MESSAGE_NAME.into();

    let RawImuFields {
        week,
        seconds,
        accel_z,
        accel_y,
        accel_x,
        gyro_z,
        gyro_y,
        gyro_x,
    } = RawImuFields::from_fields(fields).map_err(DecodeError::FieldParseFailure)?;

    Ok(RawImuMeasurement {
        header,
        gps_week_number: week,
        gps_seconds: seconds,
        linear_acceleration: Vector3 {
            x: accel_x,
            y: accel_y,
            z: accel_z,
        },
        angular_velocity: Vector3 {
            x: gyro_x,
            y: gyro_y,
            z: gyro_z,
        },
    })
}
