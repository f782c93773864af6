use serde::Serialize;
use std::fmt;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Latin1 => "ISO-8859-1",
        };
        f.write_str(name)
    }
}

/// Decodes raw CUE sheet bytes into text.
///
/// Byte order marks select UTF-8 or UTF-16. Without one the bytes are read as
/// UTF-8, and if that fails each byte is taken as a Latin-1 code point, which
/// is what most older ripping tools wrote.
pub fn decode(bytes: &[u8]) -> (String, TextEncoding) {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return (String::from_utf8_lossy(rest).into_owned(), TextEncoding::Utf8);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return (decode_utf16(rest, u16::from_le_bytes), TextEncoding::Utf16Le);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return (decode_utf16(rest, u16::from_be_bytes), TextEncoding::Utf16Be);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), TextEncoding::Utf8),
        Err(_) => (
            bytes.iter().map(|&b| b as char).collect(),
            TextEncoding::Latin1,
        ),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8() {
        let (text, encoding) = decode("TITLE \"Björk\"".as_bytes());
        assert_eq!(text, "TITLE \"Björk\"");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"FILE \"a.wav\" WAVE");
        let (text, encoding) = decode(&bytes);
        assert_eq!(text, "FILE \"a.wav\" WAVE");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn utf16_little_and_big_endian() {
        let mut le = UTF16_LE_BOM.to_vec();
        let mut be = UTF16_BE_BOM.to_vec();
        for unit in "TITLE é".encode_utf16() {
            le.extend_from_slice(&unit.to_le_bytes());
            be.extend_from_slice(&unit.to_be_bytes());
        }

        assert_eq!(decode(&le), ("TITLE é".to_string(), TextEncoding::Utf16Le));
        assert_eq!(decode(&be), ("TITLE é".to_string(), TextEncoding::Utf16Be));
    }

    #[test]
    fn invalid_utf8_falls_back_to_latin1() {
        // "Café" in ISO-8859-1
        let (text, encoding) = decode(&[0x43, 0x61, 0x66, 0xE9]);
        assert_eq!(text, "Café");
        assert_eq!(encoding, TextEncoding::Latin1);
    }
}
