//! Fixed-width text fields.

use encoding_rs::Encoding;
use metastock_types::DecodeError;

/// Character encoding used for symbol and name fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Strict 7-bit ASCII; any byte above `0x7f` is a decode error.
    #[default]
    Ascii,
    /// Any encoding known to `encoding_rs`, decoded without replacement.
    Other(&'static Encoding),
}

impl TextEncoding {
    /// Resolves an encoding label such as `ascii`, `utf-8`, `latin1` or
    /// `windows-1252`.
    ///
    /// `ascii` and `us-ascii` map to strict ASCII rather than the WHATWG
    /// alias for windows-1252.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownEncoding`] for unrecognised labels.
    pub fn for_label(label: &str) -> Result<Self, DecodeError> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("ascii") || trimmed.eq_ignore_ascii_case("us-ascii") {
            return Ok(Self::Ascii);
        }
        Encoding::for_label(trimmed.as_bytes())
            .map(Self::Other)
            .ok_or_else(|| DecodeError::UnknownEncoding(label.to_string()))
    }

    /// Canonical name of the encoding.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Other(encoding) => encoding.name(),
        }
    }

    /// Decodes `bytes`, failing on any malformed sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Text`] carrying the raw bytes and encoding name.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let decoded = match self {
            Self::Ascii => bytes
                .is_ascii()
                .then(|| String::from_utf8_lossy(bytes).into_owned()),
            Self::Other(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        };
        decoded.ok_or_else(|| DecodeError::Text {
            bytes: bytes.to_vec(),
            encoding: self.name().to_string(),
        })
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes a null- or space-padded fixed-width field.
///
/// The field is cut at the first NUL byte, decoded, and trailing spaces
/// are stripped.
///
/// # Errors
///
/// Returns [`DecodeError::Text`] if the bytes are invalid in `encoding`.
pub fn padded_string(bytes: &[u8], encoding: TextEncoding) -> Result<String, DecodeError> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let mut text = encoding.decode(&bytes[..end])?;
    text.truncate(text.trim_end_matches(' ').len());
    Ok(text)
}

/// Decodes a single-byte ASCII frequency code.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFrequency`] for non-ASCII bytes.
pub fn decode_frequency(byte: u8) -> Result<char, DecodeError> {
    if byte.is_ascii() {
        Ok(char::from(byte))
    } else {
        Err(DecodeError::InvalidFrequency(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_padded() {
        let mut field = [0u8; 16];
        field[..4].copy_from_slice(b"GOLD");
        assert_eq!(padded_string(&field, TextEncoding::Ascii).unwrap(), "GOLD");
    }

    #[test]
    fn test_space_padded() {
        let field = b"GOLD          ";
        assert_eq!(padded_string(field, TextEncoding::Ascii).unwrap(), "GOLD");
    }

    #[test]
    fn test_null_then_garbage() {
        let field = b"TU2__1990U\0\xff\xffjunk";
        assert_eq!(
            padded_string(field, TextEncoding::Ascii).unwrap(),
            "TU2__1990U"
        );
    }

    #[test]
    fn test_inner_spaces_kept() {
        let field = b"2-YEAR NOTE C   ";
        assert_eq!(
            padded_string(field, TextEncoding::Ascii).unwrap(),
            "2-YEAR NOTE C"
        );
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        let field = b"CAF\xc9";
        let err = padded_string(field, TextEncoding::Ascii).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Text {
                bytes: field.to_vec(),
                encoding: "ascii".to_string(),
            }
        );
    }

    #[test]
    fn test_latin1_label() {
        let encoding = TextEncoding::for_label("latin1").unwrap();
        assert_eq!(padded_string(b"CAF\xc9  ", encoding).unwrap(), "CAF\u{c9}");
    }

    #[test]
    fn test_utf8_rejects_invalid() {
        let encoding: TextEncoding = "utf-8".parse().unwrap();
        assert_eq!(encoding.name(), "UTF-8");
        assert!(matches!(
            padded_string(b"\xc3\x28", encoding),
            Err(DecodeError::Text { .. })
        ));
    }

    #[test]
    fn test_ascii_labels() {
        assert_eq!(TextEncoding::for_label("ASCII").unwrap(), TextEncoding::Ascii);
        assert_eq!(
            TextEncoding::for_label("us-ascii").unwrap(),
            TextEncoding::Ascii
        );
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            TextEncoding::for_label("klingon"),
            Err(DecodeError::UnknownEncoding("klingon".to_string()))
        );
    }

    #[test]
    fn test_frequency_byte() {
        assert_eq!(decode_frequency(b'D').unwrap(), 'D');
        assert_eq!(decode_frequency(0x80), Err(DecodeError::InvalidFrequency(0x80)));
    }
}
