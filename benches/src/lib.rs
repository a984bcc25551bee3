//! Synthetic metastock files for benchmarks.
//!
//! The builders write valid price-series and catalog images in memory so
//! benchmarks measure decoding only, without touching disk.

#![forbid(unsafe_code)]

use byteorder::{ByteOrder, LittleEndian};
use metastock_types::FieldCount;

/// Size of an `emaster` record.
pub const EMASTER_STRIDE: usize = 192;

/// Encodes an IEEE float as a 4-byte MBF value.
#[must_use]
pub fn f32_to_mbf(value: f32) -> [u8; 4] {
    if value == 0.0 {
        return [0; 4];
    }
    let mut ieee = [0u8; 4];
    LittleEndian::write_f32(&mut ieee, value);
    let sign = ieee[3] & 0x80;
    let exponent = ((ieee[3] & 0x7f) << 1) | (ieee[2] >> 7);
    [ieee[0], ieee[1], (ieee[2] & 0x7f) | sign, exponent.wrapping_add(2)]
}

/// Packs a calendar date as the `YYYMMDD` float used on disk.
#[must_use]
pub fn packed_date(year: u32, month: u32, day: u32) -> f32 {
    ((year - 1900) * 10_000 + month * 100 + day) as f32
}

/// Builds a price-series image holding `bars` records.
///
/// Bars walk forward through 1990-1999 with a gently oscillating price;
/// intraday layouts get a time stepping through the trading session.
#[must_use]
pub fn series_file(count: FieldCount, bars: usize) -> Vec<u8> {
    let fields = usize::from(count.get());
    let record = fields * 4;
    let total = bars.min(usize::from(u16::MAX) - 1);
    let mut buf = vec![0u8; record * (total + 1)];
    LittleEndian::write_u16(&mut buf[2..4], (total + 1) as u16);

    for i in 0..total {
        let year = 1990 + (i / 336) as u32 % 10;
        let month = 1 + (i / 28) as u32 % 12;
        let day = 1 + i as u32 % 28;
        let price = 100.0 + (i % 50) as f32 * 0.25;

        let mut values = vec![packed_date(year, month, day)];
        if count.has_time() {
            let minutes = 9 * 60 + 30 + (i % 390) as u32;
            values.push(((minutes / 60) * 10_000 + (minutes % 60) * 100) as f32);
        }
        values.extend([
            price,
            price + 1.5,
            price - 1.25,
            price + 0.5,
            (1_000 + i % 5_000) as f32,
            (i % 300) as f32,
        ]);

        let base = record * (i + 1);
        for (j, value) in values.iter().enumerate() {
            buf[base + 4 * j..base + 4 * j + 4].copy_from_slice(&f32_to_mbf(*value));
        }
    }
    buf
}

/// Builds an `emaster` image with `entries` records numbered from 1.
#[must_use]
pub fn emaster_file(entries: usize) -> Vec<u8> {
    let total = entries.min(255);
    let mut buf = vec![0u8; EMASTER_STRIDE * (total + 1)];
    LittleEndian::write_u16(&mut buf[0..2], total as u16);

    for i in 0..total {
        let base = EMASTER_STRIDE * (i + 1);
        let symbol = format!("SYM{:03}", i + 1);
        let name = format!("SECURITY {:03}", i + 1);
        buf[base + 2] = (i + 1) as u8;
        buf[base + 6] = 7;
        buf[base + 11..base + 11 + symbol.len()].copy_from_slice(symbol.as_bytes());
        buf[base + 32..base + 32 + name.len()].copy_from_slice(name.as_bytes());
        buf[base + 60] = b'D';
        buf[base + 64..base + 68].copy_from_slice(&f32_to_mbf(packed_date(1990, 1, 2)));
        buf[base + 72..base + 76].copy_from_slice(&f32_to_mbf(packed_date(1999, 12, 31)));
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use metastock_codec::TextEncoding;
    use metastock_reader::{EMASTER_LAYOUT, decode_catalog, decode_series};

    #[test]
    fn test_series_file_decodes() {
        let data = series_file(FieldCount::Eight, 500);
        let records = decode_series(&data, FieldCount::Eight).unwrap();
        assert_eq!(records.len(), 500);
        assert!(records.iter().all(|r| r.time.is_some() && r.high > r.low));
    }

    #[test]
    fn test_emaster_file_decodes() {
        let entries =
            decode_catalog(&emaster_file(300), &EMASTER_LAYOUT, TextEncoding::Ascii).unwrap();
        assert_eq!(entries.len(), 255);
        assert_eq!(entries[0].symbol, "SYM001");
    }
}
