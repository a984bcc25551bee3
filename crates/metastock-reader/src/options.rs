//! Reader configuration.

use metastock_codec::TextEncoding;
use metastock_types::FieldCount;

/// Options shared by the catalog and price-series readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Encoding of symbol and name fields.
    pub encoding: TextEncoding,
    /// Field count assumed for catalog entries that do not store one
    /// (cross-reference entries).
    pub default_field_count: FieldCount,
}

impl ReadOptions {
    /// Creates options with ASCII text and a 7-field default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            encoding: TextEncoding::Ascii,
            default_field_count: FieldCount::Seven,
        }
    }

    /// Sets the text encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the fallback field count.
    #[must_use]
    pub const fn with_default_field_count(mut self, count: FieldCount) -> Self {
        self.default_field_count = count;
        self
    }
}
