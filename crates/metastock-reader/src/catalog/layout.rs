//! Static record layouts of the three catalog variants.
//!
//! Each layout is a list of steps walked from the start of a record: skip
//! some bytes, or read one field. Offsets in the comments are relative to
//! the record start.

use metastock_types::CatalogKind;

/// How a catalog date is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateEncoding {
    /// MBF float holding `YYYMMDD` relative to 1900.
    Float,
    /// Little-endian `u32` holding `YYYYMMDD`.
    Int,
}

/// A catalog field and its on-disk width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// One-byte file number.
    FileNumberU8,
    /// Two-byte file number.
    FileNumberU16,
    /// One-byte record length.
    RecordLength,
    /// One-byte field count.
    FieldCount,
    /// Padded text symbol of the given width.
    Symbol(usize),
    /// Padded text name of the given width.
    Name(usize),
    /// One-byte frequency code.
    Frequency,
    /// First date of the series.
    FirstDate(DateEncoding),
    /// Last date of the series.
    LastDate(DateEncoding),
}

impl Field {
    /// Bytes consumed by the field.
    pub(crate) const fn width(&self) -> usize {
        match self {
            Self::FileNumberU8 | Self::RecordLength | Self::FieldCount | Self::Frequency => 1,
            Self::FileNumberU16 => 2,
            Self::Symbol(w) | Self::Name(w) => *w,
            Self::FirstDate(_) | Self::LastDate(_) => 4,
        }
    }
}

/// One step of a record walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Advance without decoding.
    Skip(usize),
    /// Decode a field.
    Read(Field),
}

/// Fixed-stride layout of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLayout {
    /// Catalog variant.
    pub kind: CatalogKind,
    /// Offset of the little-endian `u16` record count.
    pub count_offset: usize,
    /// Distance between records; record `i` starts at `i * stride`.
    pub stride: usize,
    pub(crate) steps: &'static [Step],
}

impl CatalogLayout {
    /// Returns the layout for a catalog variant.
    #[must_use]
    pub fn for_kind(kind: CatalogKind) -> &'static Self {
        match kind {
            CatalogKind::Master => &MASTER_LAYOUT,
            CatalogKind::EMaster => &EMASTER_LAYOUT,
            CatalogKind::XMaster => &XMASTER_LAYOUT,
        }
    }

    /// Bytes of a record covered by the layout's steps.
    #[must_use]
    pub fn span(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Skip(n) => *n,
                Step::Read(field) => field.width(),
            })
            .sum()
    }
}

/// Legacy `master`: 53-byte records, 255 files at most.
pub static MASTER_LAYOUT: CatalogLayout = CatalogLayout {
    kind: CatalogKind::Master,
    count_offset: 0,
    stride: 53,
    steps: &[
        Step::Read(Field::FileNumberU8), // 0
        Step::Skip(2),
        Step::Read(Field::RecordLength), // 3
        Step::Read(Field::FieldCount),   // 4
        Step::Skip(2),
        Step::Read(Field::Name(16)), // 7
        Step::Skip(2),
        Step::Read(Field::FirstDate(DateEncoding::Float)), // 25
        Step::Read(Field::LastDate(DateEncoding::Float)),  // 29
        Step::Read(Field::Frequency),                      // 33
        Step::Skip(2),
        Step::Read(Field::Symbol(14)), // 36
    ],
};

/// Extended `emaster`: 192-byte records.
pub static EMASTER_LAYOUT: CatalogLayout = CatalogLayout {
    kind: CatalogKind::EMaster,
    count_offset: 0,
    stride: 192,
    steps: &[
        Step::Skip(2),
        Step::Read(Field::FileNumberU8), // 2
        Step::Skip(3),
        Step::Read(Field::FieldCount), // 6
        Step::Skip(4),
        Step::Read(Field::Symbol(14)), // 11
        Step::Skip(7),
        Step::Read(Field::Name(16)), // 32
        Step::Skip(12),
        Step::Read(Field::Frequency), // 60
        Step::Skip(3),
        Step::Read(Field::FirstDate(DateEncoding::Float)), // 64
        Step::Skip(4),
        Step::Read(Field::LastDate(DateEncoding::Float)), // 72
    ],
};

/// Cross-reference `xmaster`: 150-byte records, file numbers above 255.
pub static XMASTER_LAYOUT: CatalogLayout = CatalogLayout {
    kind: CatalogKind::XMaster,
    count_offset: 10,
    stride: 150,
    steps: &[
        Step::Skip(1),
        Step::Read(Field::Symbol(14)), // 1
        Step::Skip(1),
        Step::Read(Field::Name(45)), // 16
        Step::Skip(1),
        Step::Read(Field::Frequency), // 62
        Step::Skip(2),                // intraday interval
        Step::Read(Field::FileNumberU16), // 65
        Step::Skip(3),
        Step::Skip(1), // flags
        Step::Skip(33),
        Step::Skip(4),                                   // collection date
        Step::Read(Field::FirstDate(DateEncoding::Int)), // 108
        Step::Skip(4),                                   // first time
        Step::Read(Field::LastDate(DateEncoding::Int)),  // 116
        Step::Skip(4),                                   // last time
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Absolute offset of every field read by a layout.
    fn offsets(layout: &CatalogLayout) -> Vec<(Field, usize)> {
        let mut pos = 0;
        let mut out = Vec::new();
        for step in layout.steps {
            match step {
                Step::Skip(n) => pos += n,
                Step::Read(field) => {
                    out.push((*field, pos));
                    pos += field.width();
                }
            }
        }
        out
    }

    fn all_layouts() -> [&'static CatalogLayout; 3] {
        [&MASTER_LAYOUT, &EMASTER_LAYOUT, &XMASTER_LAYOUT]
    }

    #[test]
    fn test_master_offsets() {
        use DateEncoding::Float;
        assert_eq!(
            offsets(&MASTER_LAYOUT),
            vec![
                (Field::FileNumberU8, 0),
                (Field::RecordLength, 3),
                (Field::FieldCount, 4),
                (Field::Name(16), 7),
                (Field::FirstDate(Float), 25),
                (Field::LastDate(Float), 29),
                (Field::Frequency, 33),
                (Field::Symbol(14), 36),
            ]
        );
    }

    #[test]
    fn test_emaster_offsets() {
        use DateEncoding::Float;
        assert_eq!(
            offsets(&EMASTER_LAYOUT),
            vec![
                (Field::FileNumberU8, 2),
                (Field::FieldCount, 6),
                (Field::Symbol(14), 11),
                (Field::Name(16), 32),
                (Field::Frequency, 60),
                (Field::FirstDate(Float), 64),
                (Field::LastDate(Float), 72),
            ]
        );
    }

    #[test]
    fn test_xmaster_offsets() {
        use DateEncoding::Int;
        assert_eq!(
            offsets(&XMASTER_LAYOUT),
            vec![
                (Field::Symbol(14), 1),
                (Field::Name(45), 16),
                (Field::Frequency, 62),
                (Field::FileNumberU16, 65),
                (Field::FirstDate(Int), 108),
                (Field::LastDate(Int), 116),
            ]
        );
        assert_eq!(XMASTER_LAYOUT.span(), 124);
    }

    #[test]
    fn test_layouts_fit_stride() {
        for layout in all_layouts() {
            assert!(layout.span() <= layout.stride, "{}", layout.kind);
        }
    }

    #[test]
    fn test_layouts_read_required_fields() {
        for layout in all_layouts() {
            let fields: Vec<_> = offsets(layout).into_iter().map(|(f, _)| f).collect();
            let has = |pred: fn(&Field) -> bool| fields.iter().filter(|f| pred(f)).count();
            assert_eq!(
                has(|f| matches!(f, Field::FileNumberU8 | Field::FileNumberU16)),
                1
            );
            assert_eq!(has(|f| matches!(f, Field::Symbol(_))), 1);
            assert_eq!(has(|f| matches!(f, Field::Name(_))), 1);
            assert_eq!(has(|f| matches!(f, Field::Frequency)), 1);
            assert_eq!(has(|f| matches!(f, Field::FirstDate(_))), 1);
            assert_eq!(has(|f| matches!(f, Field::LastDate(_))), 1);
        }
    }

    #[test]
    fn test_for_kind() {
        assert_eq!(CatalogLayout::for_kind(CatalogKind::Master).stride, 53);
        assert_eq!(CatalogLayout::for_kind(CatalogKind::EMaster).stride, 192);
        assert_eq!(CatalogLayout::for_kind(CatalogKind::XMaster).stride, 150);
    }
}
