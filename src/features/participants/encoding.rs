//! Text decoding for uploaded participant sheets
//!
//! Uploads are expected in UTF-8, but spreadsheet tools on Windows still
//! export "CSV" in the system code page. Fall back to Windows-1252 when the
//! bytes are not valid UTF-8.

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Decode upload bytes to text, stripping a leading BOM
pub fn decode_upload(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text.into_owned();
    }

    // Every byte maps to a character in Windows-1252, so this cannot fail
    let (decoded, _, _) = WINDOWS_1252.decode(bytes);
    tracing::info!("Upload decoded as Windows-1252");
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let input = "name,email,mobile\nRénuka,r@x.in,1\n";
        assert_eq!(decode_upload(input.as_bytes()), input);
    }

    #[test]
    fn test_bom_removed() {
        assert_eq!(decode_upload(b"\xEF\xBB\xBFname"), "name");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "José" with 0xE9 for é
        let bytes: &[u8] = &[0x4A, 0x6F, 0x73, 0xE9];
        assert_eq!(decode_upload(bytes), "José");
    }

    #[test]
    fn test_any_bytes_decode_without_replacement() {
        // Invalid UTF-8 including the C1 range still maps to real characters
        let bytes: &[u8] = &[0x80, 0x81, 0x9F, 0xFF];
        let text = decode_upload(bytes);
        assert_eq!(text.chars().count(), 4);
        assert_eq!(text.chars().next(), Some('€'));
        assert!(!text.contains('\u{FFFD}'));
    }
}
