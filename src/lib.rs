#![no_std]

//! A decoder for the `RAWIMUS` log of NovAtel-family GNSS receivers.
//!
//! The log carries one inertial sample: a time of week, three accelerometer
//! words and three gyroscope words. It arrives in two wire formats, and the
//! two decoders here deliberately treat them differently:
//!
//! - [`decode_binary`] reads the packed little-endian body and converts the
//!   raw counts to SI units (m/s² and rad/s) using a [`ScaleTable`].
//! - [`decode_text`] reads the tokenized ASCII body and passes the raw counts
//!   through **unconverted**. The ASCII log is not suitable for high-rate
//!   navigation use, and its values must not be read as SI quantities.
//!
//! Both decoders delegate the common log header to a caller-supplied
//! [`HeaderAdapter`], so framing, checksums and header layouts stay with the
//! caller. Decoding is pure: nothing is logged, retained or shared between
//! calls, and a measurement is only returned once every field has decoded.
//!
//! Axis order on the wire is Z, Y, X for both sensor triples.

extern crate alloc;

// Lets derived implementations inside this crate name it by path.
extern crate self as rawimu;

pub mod decode;
pub mod header;
pub mod measurement;
pub mod scale;

pub use decode::{
    DecodeError, decode,
    binary::{decode as decode_binary, decode_with as decode_binary_with},
    text::decode as decode_text,
};
pub use header::{CommonHeader, HeaderAdapter};
pub use measurement::{RawImuMeasurement, Vector3};
pub use scale::ScaleTable;
