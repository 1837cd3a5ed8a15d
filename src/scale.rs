//! Sensor scale factors for converting raw IMU counts to SI units.
//!
//! A table describes one IMU model. The receiver reports each sample as an
//! integrated increment over one output period, so the per-LSB factors are
//! divided by the data rate and the conversions multiply it back in. The
//! data rate must match the receiver's full configured output rate.

/// Standard gravity in m/s².
pub const ONE_G: f64 = 9.80665;

/// Pi, used for the degree to radian conversion.
pub const PI: f64 = core::f64::consts::PI;

/// Scale factors for a specific IMU model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTable {
    /// Accelerometer resolution in milli-g per LSB, before the output
    /// word scaling.
    pub accel_lsb: f64,
    /// Gyroscope resolution in deg/s per LSB, before the output word
    /// scaling.
    pub gyro_lsb: f64,
    /// Scaling of the 32-bit output words relative to the sensor LSB.
    pub lsb_divisor: f64,
    /// Output rate in Hz.
    pub data_rate: f64,
}

impl ScaleTable {
    /// Epson G320N, output at 125 Hz.
    pub const G320N: Self = Self {
        accel_lsb: 0.200,
        gyro_lsb: 0.008,
        lsb_divisor: 65536.0,
        data_rate: 125.0,
    };

    /// Velocity increment per LSB, in m/s.
    pub fn accel_scale(&self) -> f64 {
        (self.accel_lsb / self.lsb_divisor) * (ONE_G / 1000.0) / self.data_rate
    }

    /// Angle increment per LSB, in degrees.
    pub fn gyro_scale(&self) -> f64 {
        (self.gyro_lsb / self.lsb_divisor) / self.data_rate
    }

    /// Convert a raw accelerometer word to m/s².
    pub fn acceleration(&self, raw: i32) -> f64 {
        self.accel_scale() * self.data_rate * f64::from(raw)
    }

    /// Convert a raw gyroscope word to rad/s.
    pub fn angular_velocity(&self, raw: i32) -> f64 {
        self.gyro_scale() * self.data_rate * f64::from(raw) * PI / 180.0
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self::G320N
    }
}
