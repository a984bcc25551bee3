//! Byte-level codecs for the metastock binary format.
//!
//! This crate provides the decoding primitives every reader builds on:
//!
//! - [`mbf_to_f32`] - Microsoft Binary Format float conversion
//! - [`float_to_date`], [`int_to_date`], [`float_to_time`] - Packed date/time fields
//! - [`padded_string`] / [`TextEncoding`] - Fixed-width text fields
//! - [`ColumnKind`] / [`decode_row`] - Typed column registry
//! - [`ByteCursor`] - Bounds-checked little-endian reads over a buffer

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/metastock/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod column;
mod cursor;
mod mbf;
mod temporal;
mod text;

pub use column::{COLUMN_SIZE, ColumnKind, ColumnValue, decode_column, decode_row};
pub use cursor::ByteCursor;
pub use mbf::{MBF_SIZE, mbf_to_f32};
pub use temporal::{float_to_date, float_to_time, int_to_date};
pub use text::{TextEncoding, decode_frequency, padded_string};

pub use metastock_types::DecodeError;

#[cfg(test)]
pub(crate) mod test_support {
    use byteorder::{ByteOrder, LittleEndian};

    /// Encodes an IEEE float as MBF. Exact for normal values.
    pub(crate) fn f32_to_mbf(value: f32) -> [u8; 4] {
        if value == 0.0 {
            return [0; 4];
        }
        let mut ieee = [0u8; 4];
        LittleEndian::write_f32(&mut ieee, value);
        let sign = ieee[3] & 0x80;
        let exponent = ((ieee[3] & 0x7f) << 1) | (ieee[2] >> 7);
        [ieee[0], ieee[1], (ieee[2] & 0x7f) | sign, exponent + 2]
    }
}
