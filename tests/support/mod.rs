#![allow(dead_code)]

use std::convert::Infallible;

use rawimu::{CommonHeader, HeaderAdapter, header::TimeStatus};
use thiserror::Error;

/// Returns a fixed header, as a framing layer would after decoding one.
pub struct FixedHeader;

impl FixedHeader {
    pub fn header() -> CommonHeader {
        CommonHeader {
            message_name: "RAWIMUSA".into(),
            port: "COM1".into(),
            sequence: 7,
            idle_time: 88.5,
            time_status: TimeStatus::FineSteering,
            gps_week_number: 2214,
            gps_seconds: 318046.0,
            receiver_status: 0x0200_0020,
            software_version: 16248,
        }
    }
}

impl HeaderAdapter for FixedHeader {
    type Error = Infallible;

    fn decode_binary(&self, _: &[u8]) -> Result<CommonHeader, Self::Error> {
        Ok(Self::header())
    }

    fn decode_text<S: AsRef<str>>(&self, _: &[S]) -> Result<CommonHeader, Self::Error> {
        Ok(Self::header())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Malformed header.")]
pub struct MalformedHeader;

/// Rejects every header.
pub struct RejectingHeader;

impl HeaderAdapter for RejectingHeader {
    type Error = MalformedHeader;

    fn decode_binary(&self, _: &[u8]) -> Result<CommonHeader, Self::Error> {
        Err(MalformedHeader)
    }

    fn decode_text<S: AsRef<str>>(&self, _: &[S]) -> Result<CommonHeader, Self::Error> {
        Err(MalformedHeader)
    }
}

/// Build a binary body. `words` are in wire order: accel Z, Y, X then gyro
/// Z, Y, X.
pub fn binary_body(week: u32, seconds: f64, words: [i32; 6]) -> Vec<u8> {
    let mut data = Vec::with_capacity(40);
    data.extend_from_slice(&week.to_le_bytes());
    data.extend_from_slice(&seconds.to_le_bytes());
    data.extend_from_slice(&0x77u32.to_le_bytes());
    for word in words {
        data.extend_from_slice(&word.to_le_bytes());
    }
    data
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * b.abs().max(1.0)
}
