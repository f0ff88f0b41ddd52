//! ANSI code page decoding for LocalBasePath strings
//!
//! Shell links store LocalBasePath in the system default ANSI code page.
//! On Windows the active code page is used; elsewhere Windows-1252 is
//! assumed.

/// Windows-1252 mappings for 0x80-0x9F; unassigned slots map to the C1 control
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Decode bytes as Windows-1252
pub fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
            _ => b as char,
        })
        .collect()
}

/// Decode bytes using the platform's default ANSI code page
pub fn decode_ansi(bytes: &[u8]) -> String {
    if bytes.is_ascii() {
        return bytes.iter().map(|&b| b as char).collect();
    }

    #[cfg(windows)]
    {
        if let Some(s) = crate::platform::win32::codepage::decode_active_code_page(bytes) {
            return s;
        }
    }

    decode_windows_1252(bytes)
}
