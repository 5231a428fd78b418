//! Text encoding sniffing and decoding for raw JSON bytes.
//!
//! The preview core never parses bytes itself: input is sniffed here
//! (BOM first, then statistical detection) and decoded to a string before
//! it reaches the JSON parser. Undetectable input defaults to UTF-8.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use crate::preview::PreviewError;

/// Guess the text encoding of raw bytes.
pub fn sniff(bytes: &[u8]) -> &'static Encoding {
    if bytes.is_empty() {
        return UTF_8;
    }
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode bytes with the given encoding, stripping any BOM.
///
/// Malformed sequences are an error (the caller degrades to the raw
/// fallback rendering) rather than being silently replaced.
pub fn decode<'a>(
    bytes: &'a [u8],
    encoding: &'static Encoding,
) -> Result<Cow<'a, str>, PreviewError> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(PreviewError::UnsupportedEncoding(encoding.name()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_16LE, WINDOWS_1252};

    #[test]
    fn test_sniff_plain_ascii_is_utf8_compatible() {
        let encoding = sniff(br#"{"key": "value"}"#);
        let decoded = decode(br#"{"key": "value"}"#, encoding).unwrap();
        assert_eq!(decoded, r#"{"key": "value"}"#);
    }

    #[test]
    fn test_sniff_honors_utf16_bom() {
        // "{}" as UTF-16LE with BOM.
        let bytes = [0xFF, 0xFE, b'{', 0x00, b'}', 0x00];
        assert_eq!(sniff(&bytes), UTF_16LE);
        assert_eq!(decode(&bytes, UTF_16LE).unwrap(), "{}");
    }

    #[test]
    fn test_sniff_empty_defaults_to_utf8() {
        assert_eq!(sniff(b""), UTF_8);
    }

    #[test]
    fn test_decode_reports_malformed_input() {
        let err = decode(&[0xC3, 0x28], UTF_8).unwrap_err();
        assert!(matches!(err, PreviewError::UnsupportedEncoding("UTF-8")));
    }

    #[test]
    fn test_decode_legacy_single_byte() {
        // 0xE9 is "é" in windows-1252.
        let decoded = decode(&[b'"', 0xE9, b'"'], WINDOWS_1252).unwrap();
        assert_eq!(decoded, "\"é\"");
    }
}
