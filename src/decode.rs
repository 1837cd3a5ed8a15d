//! Decoders for the two wire formats of the `RAWIMUS` log.
//!
//! The two pipelines share an output type and a header adapter, and nothing
//! else. Both check the size of their input before anything is read, and
//! neither returns a partially decoded measurement.

pub mod binary;
pub mod text;

use either::Either::{self, Left, Right};
use thiserror::Error;

use crate::{HeaderAdapter, RawImuMeasurement};

use self::text::FieldMask;

/// An error decoding a `RAWIMUS` log.
///
/// `H` is the error type of the [`HeaderAdapter`] in use.
#[derive(Debug, Error)]
pub enum DecodeError<H> {
    /// The binary body is not the expected size.
    #[error("Unexpected RAWIMUS message length ({actual}, expected {expected}).")]
    UnexpectedLength { actual: usize, expected: usize },
    /// The ASCII body has the wrong number of fields.
    #[error("Unexpected number of fields in RAWIMUS log ({actual}, expected {expected}).")]
    UnexpectedFieldCount { actual: usize, expected: usize },
    /// One or more ASCII fields are not valid numbers.
    #[error("Failed to parse RAWIMUS field(s) {0}.")]
    FieldParseFailure(FieldMask),
    /// The header adapter failed.
    #[error(transparent)]
    Header(H),
}

/// Decode a log in whichever wire format it arrived in.
///
/// `Left` holds a binary body and `Right` a tokenized ASCII body. See
/// [`binary::decode`] and [`text::decode`] for the (different) units of
/// each.
pub fn decode<A: HeaderAdapter, S: AsRef<str>>(
    message: Either<&[u8], &[S]>,
    adapter: &A,
) -> Result<RawImuMeasurement, DecodeError<A::Error>> {
    match message {
        Left(data) => binary::decode(data, adapter),
        Right(fields) => text::decode(fields, adapter),
    }
}
