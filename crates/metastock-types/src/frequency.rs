//! Sampling frequency codes stored in catalog records.

use serde::{Deserialize, Serialize};

/// Sampling frequency of a price series, stored as a single ASCII character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", from = "char")]
pub enum Frequency {
    /// Intraday bars (`I`).
    Intraday,
    /// Daily bars (`D`).
    Daily,
    /// Weekly bars (`W`).
    Weekly,
    /// Monthly bars (`M`).
    Monthly,
    /// Quarterly bars (`Q`).
    Quarterly,
    /// Yearly bars (`Y`).
    Yearly,
    /// Any other code found on disk, kept verbatim.
    Other(char),
}

impl Frequency {
    /// Maps an on-disk code to a frequency. Codes are case-insensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'I' => Self::Intraday,
            'D' => Self::Daily,
            'W' => Self::Weekly,
            'M' => Self::Monthly,
            'Q' => Self::Quarterly,
            'Y' => Self::Yearly,
            _ => Self::Other(code),
        }
    }

    /// Returns the single-character code.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Intraday => 'I',
            Self::Daily => 'D',
            Self::Weekly => 'W',
            Self::Monthly => 'M',
            Self::Quarterly => 'Q',
            Self::Yearly => 'Y',
            Self::Other(c) => *c,
        }
    }

    /// Returns true for intraday series, which normally use the 8-field layout.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::Intraday)
    }
}

impl From<char> for Frequency {
    fn from(code: char) -> Self {
        Self::from_code(code)
    }
}

impl From<Frequency> for char {
    fn from(freq: Frequency) -> Self {
        freq.code()
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
