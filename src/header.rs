//! The common log header and the adapter that produces it.
//!
//! Header layouts belong to the framing layer. Decoders in this crate never
//! read header bytes themselves: they hand the same input to a
//! [`HeaderAdapter`] and embed its result.

use alloc::string::String;
use core::str::FromStr;

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::TryFromBytes;

/// Decodes the common log header from either wire format.
///
/// Implementations are supplied by the framing layer. Errors are returned to
/// the caller unchanged, wrapped in [`crate::DecodeError::Header`].
pub trait HeaderAdapter {
    /// The error produced when a header cannot be decoded.
    type Error;

    /// Decode the header accompanying a binary log body.
    fn decode_binary(&self, data: &[u8]) -> Result<CommonHeader, Self::Error>;

    /// Decode the header accompanying a tokenized ASCII log body.
    fn decode_text<S: AsRef<str>>(&self, fields: &[S]) -> Result<CommonHeader, Self::Error>;
}

/// Header fields shared by all receiver logs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommonHeader {
    pub message_name: String,
    /// Receiver port the log was emitted on.
    pub port: String,
    pub sequence: u32,
    /// Percentage of time the receiver processor was idle.
    pub idle_time: f32,
    pub time_status: TimeStatus,
    pub gps_week_number: u32,
    pub gps_seconds: f64,
    /// Raw receiver status word. See [`Self::receiver_status`].
    pub receiver_status: u32,
    pub software_version: u32,
}

impl CommonHeader {
    /// Interpret the receiver status word.
    pub fn receiver_status(&self) -> ReceiverStatus {
        ReceiverStatus(self.receiver_status)
    }
}

/// Quality of the receiver's GPS reference time.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFromBytes)]
pub enum TimeStatus {
    #[default]
    Unknown = 20,
    Approximate = 60,
    CoarseAdjusting = 80,
    Coarse = 100,
    CoarseSteering = 120,
    FreeWheeling = 130,
    FineAdjusting = 140,
    Fine = 160,
    FineBackupSteering = 170,
    FineSteering = 180,
    SatTime = 200,
}

/// An unrecognised time status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeStatusError {
    #[error("Unknown time status value ({0}).")]
    Value(u8),
    #[error("Unknown time status name.")]
    Name,
}

impl TryFrom<u8> for TimeStatus {
    type Error = TimeStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        zerocopy::try_transmute!(value).map_err(|_| TimeStatusError::Value(value))
    }
}

impl FromStr for TimeStatus {
    type Err = TimeStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "UNKNOWN" => Self::Unknown,
            "APPROXIMATE" => Self::Approximate,
            "COARSEADJUSTING" => Self::CoarseAdjusting,
            "COARSE" => Self::Coarse,
            "COARSESTEERING" => Self::CoarseSteering,
            "FREEWHEELING" => Self::FreeWheeling,
            "FINEADJUSTING" => Self::FineAdjusting,
            "FINE" => Self::Fine,
            "FINEBACKUPSTEERING" => Self::FineBackupSteering,
            "FINESTEERING" => Self::FineSteering,
            "SATTIME" => Self::SatTime,
            _ => Err(TimeStatusError::Name)?,
        })
    }
}

bitfield! {
    /// Flags of the 32-bit receiver status word.
    pub struct ReceiverStatus(u32) {
        [0] pub error,
        [1] pub temperature_warning,
        [2] pub voltage_warning,
        [3] pub antenna_not_powered,
        [4] pub lna_failure,
        [5] pub antenna_open,
        [6] pub antenna_shorted,
        [7] pub cpu_overload,
        [8] pub com1_buffer_overrun,
        [9] pub com2_buffer_overrun,
        [10] pub com3_buffer_overrun,
        [11] pub link_overrun,
        [15] pub aux_transmit_overrun,
        [16] pub agc_out_of_range,
        [18] pub ins_reset,
        [20] pub almanac_invalid,
        [21] pub position_solution_invalid,
        [22] pub position_fixed,
        [23] pub clock_steering_disabled,
        [24] pub clock_model_invalid,
        [25] pub external_oscillator_locked,
        [26] pub software_resource_warning,
        [29] pub aux3_status,
        [30] pub aux2_status,
        [31] pub aux1_status,
    }
}
