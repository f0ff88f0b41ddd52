//! Windows Shell Link (.lnk) binary parser
//!
//! Decodes just enough of the MS-SHLLINK layout to launch the target:
//! the header flags, the hotkey, and LinkInfo's LocalBasePath. The
//! LinkTargetIDList is skipped and StringData / ExtraData are ignored.
//!
//! All integers are little-endian. Header offsets are absolute; LinkInfo
//! offsets are relative to the start of the LinkInfo structure.

use std::path::Path;

use super::codepage::decode_ansi;
use crate::domain::entities::ShortcutRecord;
use crate::domain::errors::{ParseError, ShortcutError};
use crate::domain::value_objects::Hotkey;

/// Size of the fixed ShellLinkHeader
pub const HEADER_SIZE: usize = 76;

const LINK_FLAGS_OFFSET: usize = 20;
/// Distance from the end of FileAttributes (28) to HotKey (64)
const HOTKEY_SKIP: usize = 36;
/// LinkInfoSize + LinkInfoHeaderSize
const LINK_INFO_PREFIX: usize = 8;
/// VolumeIDOffset, read past to reach LocalBasePathOffset
const VOLUME_ID_OFFSET_SIZE: usize = 4;

/// LinkFlags bits
pub mod link_flags {
    pub const HAS_LINK_TARGET_ID_LIST: u32 = 0x0000_0001;
    pub const HAS_LINK_INFO: u32 = 0x0000_0002;
}

/// LinkInfoFlags bits
pub mod link_info_flags {
    pub const VOLUME_ID_AND_LOCAL_BASE_PATH: u32 = 0x0000_0001;
    pub const COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX: u32 = 0x0000_0002;
}

/// `FILE_ATTRIBUTE_DIRECTORY`
pub const FILE_ATTRIBUTE_DIRECTORY: u32 = 0x0000_0010;

/// Fields decoded from the fixed header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LinkHeader {
    link_flags: u32,
    file_attribute_flags: u32,
    hot_key_low: u8,
    hot_key_high: u8,
}

impl LinkHeader {
    fn has(&self, flag: u32) -> bool {
        self.link_flags & flag == flag
    }
}

/// Forward-only cursor over the shortcut bytes
struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    /// Move to a position taken from the data; the end of the buffer is a
    /// valid target, anything beyond it is malformed
    fn seek(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos > self.buf.len() {
            return Err(ParseError::Malformed(format!(
                "seek to {} past end of {}-byte buffer",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }

    /// Skip a fixed-size field; running off the end is truncation
    fn skip(&mut self, count: usize) -> Result<(), ParseError> {
        self.take(count).map(|_| ())
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], ParseError> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.buf.len())
            .ok_or(ParseError::Truncated {
                offset: self.pos,
                needed: count,
                len: self.buf.len(),
            })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, ParseError> {
        Ok(self.take(1)?[0])
    }

    fn read_i16(&mut self) -> Result<i16, ParseError> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, ParseError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn read_i32(&mut self) -> Result<i32, ParseError> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Bytes up to (not including) the next zero byte, or to end of buffer
    fn read_null_terminated(&mut self) -> &'a [u8] {
        let rest = &self.buf[self.pos..];
        let len = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        // Consume the terminator too when there is one
        self.pos += (len + 1).min(rest.len());
        &rest[..len]
    }
}

/// Parse a .lnk byte buffer
///
/// # Returns
/// * `Ok(ShortcutRecord)` - `target_path` is empty when the link has no
///   LinkInfo or no LocalBasePath; that is not an error
/// * `Err(ParseError::Truncated)` - a fixed field lies past the end of the buffer
/// * `Err(ParseError::Malformed)` - an offset or size points outside the buffer
pub fn parse_shortcut(bytes: &[u8]) -> Result<ShortcutRecord, ParseError> {
    if bytes.len() < HEADER_SIZE {
        return Err(ParseError::Truncated {
            offset: 0,
            needed: HEADER_SIZE,
            len: bytes.len(),
        });
    }

    let mut reader = ByteReader::new(bytes);
    let header = parse_header(&mut reader)?;
    // Optional sections start right after the fixed header
    reader.seek(HEADER_SIZE)?;

    let mut record = ShortcutRecord {
        target_path: String::new(),
        is_directory: header.file_attribute_flags & FILE_ATTRIBUTE_DIRECTORY
            == FILE_ATTRIBUTE_DIRECTORY,
        hot_key: Hotkey::from_bytes(header.hot_key_low, header.hot_key_high).to_string(),
    };

    if header.has(link_flags::HAS_LINK_TARGET_ID_LIST) {
        skip_target_id_list(&mut reader)?;
    }

    if header.has(link_flags::HAS_LINK_INFO) {
        if let Some(path) = parse_link_info(&mut reader)? {
            record.target_path = path;
        }
    }

    Ok(record)
}

/// Read a .lnk file from disk and parse it
pub fn parse_shortcut_file(path: &Path) -> Result<ShortcutRecord, ShortcutError> {
    let bytes = std::fs::read(path).map_err(|source| ShortcutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_shortcut(&bytes).map_err(|source| ShortcutError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_header(reader: &mut ByteReader<'_>) -> Result<LinkHeader, ParseError> {
    reader.seek(LINK_FLAGS_OFFSET)?;
    let link_flags = reader.read_u32()?;
    let file_attribute_flags = reader.read_u32()?;

    reader.skip(HOTKEY_SKIP)?;
    let hot_key_low = reader.read_u8()?;
    let hot_key_high = reader.read_u8()?;

    Ok(LinkHeader {
        link_flags,
        file_attribute_flags,
        hot_key_low,
        hot_key_high,
    })
}

/// The ID list is opaque shell-namespace data; only its size matters here
fn skip_target_id_list(reader: &mut ByteReader<'_>) -> Result<(), ParseError> {
    reader.seek(HEADER_SIZE)?;
    let size = reader.read_i16()?;
    if size < 0 {
        return Err(ParseError::Malformed(format!(
            "negative LinkTargetIDList size {}",
            size
        )));
    }
    let end = reader.position() + size as usize;
    reader.seek(end)
}

/// Extract LocalBasePath from the LinkInfo structure at the current position
fn parse_link_info(reader: &mut ByteReader<'_>) -> Result<Option<String>, ParseError> {
    let start = reader.position();
    reader.skip(LINK_INFO_PREFIX)?;
    let flags = reader.read_u32()?;

    if flags & link_info_flags::VOLUME_ID_AND_LOCAL_BASE_PATH == 0 {
        return Ok(None);
    }

    reader.skip(VOLUME_ID_OFFSET_SIZE)?;
    let offset = reader.read_i32()?;
    if offset < 0 {
        return Err(ParseError::Malformed(format!(
            "negative LocalBasePathOffset {}",
            offset
        )));
    }
    let base_path_pos = start.checked_add(offset as usize).ok_or_else(|| {
        ParseError::Malformed(format!("LocalBasePathOffset {} overflows", offset))
    })?;
    reader.seek(base_path_pos)?;

    let raw = reader.read_null_terminated();
    Ok(Some(decode_ansi(raw)))
}

/// Builds synthetic shell links for tests
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct LinkBuilder {
        pub extra_link_flags: u32,
        pub file_attributes: u32,
        pub hot_key: (u8, u8),
        pub id_list: Option<Vec<u8>>,
        /// `Some(None)` writes a LinkInfo without the local base path flag
        pub link_info: Option<Option<Vec<u8>>>,
    }

    impl LinkBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn local_base_path(mut self, path: &[u8]) -> Self {
            self.link_info = Some(Some(path.to_vec()));
            self
        }

        pub fn link_info_without_local_path(mut self) -> Self {
            self.link_info = Some(None);
            self
        }

        pub fn id_list(mut self, data: &[u8]) -> Self {
            self.id_list = Some(data.to_vec());
            self
        }

        pub fn attributes(mut self, attrs: u32) -> Self {
            self.file_attributes = attrs;
            self
        }

        pub fn hot_key(mut self, low: u8, high: u8) -> Self {
            self.hot_key = (low, high);
            self
        }

        pub fn build(&self) -> Vec<u8> {
            let mut flags = self.extra_link_flags;
            if self.id_list.is_some() {
                flags |= link_flags::HAS_LINK_TARGET_ID_LIST;
            }
            if self.link_info.is_some() {
                flags |= link_flags::HAS_LINK_INFO;
            }

            let mut out = vec![0u8; HEADER_SIZE];
            out[0..4].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
            // CLSID 00021401-0000-0000-C000-000000000046
            out[4..20].copy_from_slice(&[
                0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x46,
            ]);
            out[20..24].copy_from_slice(&flags.to_le_bytes());
            out[24..28].copy_from_slice(&self.file_attributes.to_le_bytes());
            out[64] = self.hot_key.0;
            out[65] = self.hot_key.1;

            if let Some(ref id_list) = self.id_list {
                out.extend_from_slice(&(id_list.len() as u16).to_le_bytes());
                out.extend_from_slice(id_list);
            }

            if let Some(ref info) = self.link_info {
                out.extend_from_slice(&build_link_info(info.as_deref()));
            }

            out
        }
    }

    fn build_link_info(local_base_path: Option<&[u8]>) -> Vec<u8> {
        const HEADER: u32 = 0x1C;
        let volume_id: [u8; 16] = [
            0x10, 0, 0, 0, // VolumeIDSize
            0x03, 0, 0, 0, // DRIVE_FIXED
            0x78, 0x56, 0x34, 0x12, // serial
            0x10, 0, 0, 0, // VolumeLabelOffset -> empty label
        ];

        let mut body = Vec::new();
        let (flags, volume_offset, path_offset) = match local_base_path {
            Some(path) => {
                let volume_offset = HEADER;
                let path_offset = HEADER + volume_id.len() as u32 + 1;
                body.extend_from_slice(&volume_id);
                body.push(0); // empty volume label
                body.extend_from_slice(path);
                body.push(0);
                (
                    link_info_flags::VOLUME_ID_AND_LOCAL_BASE_PATH,
                    volume_offset,
                    path_offset,
                )
            }
            None => (0, 0, 0),
        };
        let suffix_offset = HEADER + body.len() as u32;
        body.push(0); // empty CommonPathSuffix

        let size = HEADER + body.len() as u32;
        let mut out = Vec::new();
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&HEADER.to_le_bytes());
        out.extend_from_slice(&flags.to_le_bytes());
        out.extend_from_slice(&volume_offset.to_le_bytes());
        out.extend_from_slice(&path_offset.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // CommonNetworkRelativeLinkOffset
        out.extend_from_slice(&suffix_offset.to_le_bytes());
        out.extend_from_slice(&body);
        out
    }
}
