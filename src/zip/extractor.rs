//! Archive handle and entry extraction.
//!
//! [`ZipArchive`] is the user-facing side of the ZIP layer: it owns the
//! byte source, looks entries up through the directory parser, and runs
//! the store/deflate data path followed by length and CRC-32 verification.

use crate::crc32::crc32;
use crate::decode::inflate_into;
use crate::decode::window::OutputWindow;
use crate::error::{Error, Result};
use crate::source::ReadSource;
use crate::zip::parser::{find_central_dir, locate_entry, EntrySelector};
use crate::zip::structures::{
    CompressionMethod, FileInfo, DATA_DESCRIPTOR_SIGNATURE,
};

/// A ZIP archive opened over a byte source.
///
/// Entries are located by name or index and extracted into caller-provided
/// buffers sized from [`FileInfo::uncompressed_size`].
pub struct ZipArchive<S: ReadSource> {
    source: S,
    central_dir_offset: u32,
}

impl<S: ReadSource> ZipArchive<S> {
    /// Open an archive: locate the end-of-central-directory record and
    /// remember where the central directory starts.
    pub fn open(mut source: S) -> Result<Self> {
        let central_dir_offset = find_central_dir(&mut source)?;
        Ok(Self {
            source,
            central_dir_offset,
        })
    }

    /// Look up an entry by exact name.
    ///
    /// The comparison is byte-for-byte against the central directory: no
    /// case folding, no path normalization, no encoding translation.
    pub fn entry_by_name(&mut self, name: &str) -> Result<FileInfo> {
        locate_entry(
            &mut self.source,
            self.central_dir_offset,
            EntrySelector::Name(name.as_bytes()),
        )
    }

    /// Look up an entry by its position in the central directory.
    pub fn entry_at(&mut self, index: u32) -> Result<FileInfo> {
        locate_entry(
            &mut self.source,
            self.central_dir_offset,
            EntrySelector::Index(index),
        )
    }

    /// Extract an entry into `output` and verify its length and CRC-32.
    ///
    /// `output` must hold at least `info.uncompressed_size` bytes. Returns
    /// the number of bytes written. On error the buffer may have been
    /// partially written and its contents must be discarded.
    pub fn read(&mut self, info: &FileInfo, output: &mut [u8]) -> Result<usize> {
        extract(&mut self.source, info, output)
    }

    /// Release the archive and hand back its source.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Run the data path for `info` and verify the result.
pub(crate) fn extract<S: ReadSource>(
    source: &mut S,
    info: &FileInfo,
    output: &mut [u8],
) -> Result<usize> {
    let mut window = OutputWindow::new(output);
    let stream_end = match info.method {
        CompressionMethod::Stored => {
            let end = info
                .data_offset
                .checked_add(info.uncompressed_size)
                .ok_or(Error::UnexpectedEof)?;
            for offset in info.data_offset..end {
                let byte = source.read_at(offset).ok_or(Error::UnexpectedEof)?;
                window.push(byte)?;
            }
            end
        }
        CompressionMethod::Deflate => inflate_into(source, info.data_offset, &mut window)?,
        CompressionMethod::Unknown(method) => return Err(Error::UnsupportedMethod(method)),
    };

    let written = window.filled() as u32;
    if written != info.uncompressed_size {
        return Err(Error::LengthMismatch {
            expected: info.uncompressed_size,
            actual: written,
        });
    }

    let expected = expected_crc(source, info, stream_end)?;
    let actual = crc32(window.as_slice());
    if actual != expected {
        return Err(Error::CrcMismatch { expected, actual });
    }
    Ok(window.filled())
}

/// Determine the CRC the decoded data must match.
///
/// With general-purpose flag bit 3 the local header CRC field may be zero
/// and the real value trails the data, optionally preceded by the
/// descriptor signature. The descriptor's size fields are not consulted.
fn expected_crc<S: ReadSource>(source: &mut S, info: &FileInfo, stream_end: u32) -> Result<u32> {
    if !info.has_data_descriptor {
        return Ok(info.crc32);
    }
    if source.read_u32(stream_end)? == DATA_DESCRIPTOR_SIGNATURE {
        source.read_u32(stream_end.checked_add(4).ok_or(Error::UnexpectedEof)?)
    } else {
        source.read_u32(stream_end)
    }
}
