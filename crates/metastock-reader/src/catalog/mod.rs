//! Catalog (`master`, `emaster`, `xmaster`) readers.

mod layout;

pub use layout::{CatalogLayout, EMASTER_LAYOUT, MASTER_LAYOUT, XMASTER_LAYOUT};

use chrono::NaiveDate;
use layout::{DateEncoding, Field, Step};
use metastock_codec::{
    ByteCursor, TextEncoding, decode_frequency, float_to_date, int_to_date, mbf_to_f32,
    padded_string,
};
use metastock_types::{CatalogEntry, CatalogKind, DecodeError, Frequency, MetastockError, Result};
use std::path::Path;
use tracing::{debug, trace};

use crate::read_file;

/// Reads one catalog file of the given variant.
///
/// Entries are returned in on-disk order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or ends before its
/// declared record count, or a decode error for invalid text or dates.
pub fn read_catalog_file(
    path: &Path,
    kind: CatalogKind,
    encoding: TextEncoding,
) -> Result<Vec<CatalogEntry>> {
    let data = read_file(path)?;
    let entries = decode_catalog(&data, CatalogLayout::for_kind(kind), encoding)
        .map_err(|e| MetastockError::decode(path, e))?;
    debug!(
        path = %path.display(),
        %kind,
        entries = entries.len(),
        "decoded catalog"
    );
    Ok(entries)
}

/// Decodes an in-memory catalog file using `layout`.
///
/// Reads the record count at `layout.count_offset`, then one entry at each
/// multiple of the stride starting from the second record slot.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if a record lies past the end of the
/// buffer, or a text/date error from the field decoders.
pub fn decode_catalog(
    data: &[u8],
    layout: &CatalogLayout,
    encoding: TextEncoding,
) -> std::result::Result<Vec<CatalogEntry>, DecodeError> {
    let mut cursor = ByteCursor::new(data);
    cursor.seek(layout.count_offset);
    let records = usize::from(cursor.read_u16()?);

    let mut entries = Vec::with_capacity(records);
    for i in 1..=records {
        cursor.seek(i * layout.stride);
        let entry = decode_record(&mut cursor, layout, encoding)?;
        trace!(
            file_number = entry.file_number,
            symbol = %entry.symbol,
            "catalog record"
        );
        entries.push(entry);
    }
    Ok(entries)
}

/// Field values collected while walking one record.
#[derive(Debug, Default)]
struct EntryFields {
    file_number: u16,
    symbol: String,
    name: String,
    first_date: NaiveDate,
    last_date: NaiveDate,
    frequency: Option<char>,
    field_count: Option<u8>,
    record_length: Option<u8>,
}

impl EntryFields {
    fn into_entry(self, kind: CatalogKind) -> CatalogEntry {
        CatalogEntry {
            kind,
            file_number: self.file_number,
            symbol: self.symbol,
            name: self.name,
            first_date: self.first_date,
            last_date: self.last_date,
            frequency: self
                .frequency
                .map_or(Frequency::Other(' '), Frequency::from_code),
            field_count: self.field_count,
            record_length: self.record_length,
        }
    }
}

fn decode_record(
    cursor: &mut ByteCursor<'_>,
    layout: &CatalogLayout,
    encoding: TextEncoding,
) -> std::result::Result<CatalogEntry, DecodeError> {
    let mut fields = EntryFields::default();
    for step in layout.steps {
        let field = match step {
            Step::Skip(n) => {
                cursor.skip(*n);
                continue;
            }
            Step::Read(field) => field,
        };
        match field {
            Field::FileNumberU8 => fields.file_number = u16::from(cursor.read_u8()?),
            Field::FileNumberU16 => fields.file_number = cursor.read_u16()?,
            Field::RecordLength => fields.record_length = Some(cursor.read_u8()?),
            Field::FieldCount => fields.field_count = Some(cursor.read_u8()?),
            Field::Symbol(width) => {
                fields.symbol = padded_string(cursor.take(*width)?, encoding)?;
            }
            Field::Name(width) => fields.name = padded_string(cursor.take(*width)?, encoding)?,
            Field::Frequency => {
                fields.frequency = Some(decode_frequency(cursor.read_u8()?)?);
            }
            Field::FirstDate(enc) => fields.first_date = read_date(cursor, *enc)?,
            Field::LastDate(enc) => fields.last_date = read_date(cursor, *enc)?,
        }
    }
    Ok(fields.into_entry(layout.kind))
}

fn read_date(
    cursor: &mut ByteCursor<'_>,
    encoding: DateEncoding,
) -> std::result::Result<NaiveDate, DecodeError> {
    match encoding {
        DateEncoding::Float => float_to_date(mbf_to_f32(cursor.read_mbf_bytes()?)),
        DateEncoding::Int => int_to_date(cursor.read_u32()?),
    }
}
