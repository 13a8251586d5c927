//! Low-level ZIP directory parsing.
//!
//! ZIP archives are read from the end: the end-of-central-directory record
//! is found by a backward scan, then central directory entries are walked
//! forward until a match. There is no fully reliable EOCD marker -- an
//! archive comment can contain bytes that mimic one -- so a candidate is
//! accepted only when its comment length field places the record exactly at
//! the end of the archive.

use crate::error::{Error, Result};
use crate::source::ReadSource;
use crate::zip::structures::*;

/// Selects a directory entry by position or by exact name.
#[derive(Clone, Copy)]
pub(crate) enum EntrySelector<'a> {
    /// The n-th entry in central directory order.
    Index(u32),
    /// Exact byte-for-byte name match; no case folding, no encoding
    /// translation.
    Name(&'a [u8]),
}

/// Locate the end-of-central-directory record and return the central
/// directory offset stored in it.
pub(crate) fn find_central_dir<S: ReadSource>(source: &mut S) -> Result<u32> {
    let size = source.size();
    if size < EOCD_MIN_SIZE {
        return Err(Error::Format("end of central directory not found"));
    }
    let lowest = size.saturating_sub(EOCD_MAX_SIZE);
    for offset in (lowest..=size - EOCD_MIN_SIZE).rev() {
        if source.read_u32(offset)? != EOCD_SIGNATURE {
            continue;
        }
        let comment_len = u32::from(source.read_u16(offset + 20)?);
        if offset + EOCD_MIN_SIZE + comment_len != size {
            continue;
        }
        // Disk number fields are ignored; multi-disk archives are
        // unsupported and not detected.
        return source.read_u32(offset + 16);
    }
    Err(Error::Format("end of central directory not found"))
}

/// Walk the central directory from `central_dir_offset` and resolve the
/// selected entry through its local file header.
pub(crate) fn locate_entry<S: ReadSource>(
    source: &mut S,
    central_dir_offset: u32,
    selector: EntrySelector<'_>,
) -> Result<FileInfo> {
    let mut remaining = match selector {
        EntrySelector::Index(index) => index,
        EntrySelector::Name(_) => 0,
    };
    let mut offset = central_dir_offset;
    loop {
        if source.read_u32(offset)? != CDFH_SIGNATURE {
            // A different record type always follows the entries (at worst
            // the end-of-central-directory header), so a signature mismatch
            // is the natural end of the directory.
            return Err(Error::EntryNotFound);
        }
        let name_len = u32::from(source.read_u16(offset + 28)?);

        let matched = match selector {
            EntrySelector::Name(name) => name_matches(source, offset, name_len, name)?,
            EntrySelector::Index(_) => {
                if remaining == 0 {
                    true
                } else {
                    remaining -= 1;
                    false
                }
            }
        };
        if matched {
            return resolve_local_header(source, offset, name_len);
        }

        let extra_len = u32::from(source.read_u16(offset + 30)?);
        let comment_len = u32::from(source.read_u16(offset + 32)?);
        offset = offset
            .checked_add(CDFH_MIN_SIZE + name_len + extra_len + comment_len)
            .ok_or(Error::UnexpectedEof)?;
    }
}

/// Compare a directory entry's name bytes against `name`.
fn name_matches<S: ReadSource>(
    source: &mut S,
    entry_offset: u32,
    name_len: u32,
    name: &[u8],
) -> Result<bool> {
    if name.len() != name_len as usize {
        return Ok(false);
    }
    for (i, &expected) in name.iter().enumerate() {
        let at = entry_offset + CDFH_MIN_SIZE + i as u32;
        let got = source.read_at(at).ok_or(Error::UnexpectedEof)?;
        if got != expected {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Build a [`FileInfo`] for the directory entry at `entry_offset`.
///
/// The local file header duplicates most central directory fields; like the
/// sizes and CRC, the data offset can only be computed from the local
/// header because its name/extra fields may differ in length.
fn resolve_local_header<S: ReadSource>(
    source: &mut S,
    entry_offset: u32,
    name_len: u32,
) -> Result<FileInfo> {
    let lfh_offset = source.read_u32(entry_offset + 42)?;
    if source.read_u32(lfh_offset)? != LFH_SIGNATURE {
        return Err(Error::Format("local file header signature mismatch"));
    }
    let flags = source.read_u16(lfh_offset + 6)?;
    let method = source.read_u16(lfh_offset + 8)?;
    let crc32 = source.read_u32(lfh_offset + 14)?;
    let compressed_size = source.read_u32(lfh_offset + 18)?;
    let uncompressed_size = source.read_u32(lfh_offset + 22)?;
    let lfh_name_len = u32::from(source.read_u16(lfh_offset + 26)?);
    let lfh_extra_len = u32::from(source.read_u16(lfh_offset + 28)?);
    let data_offset = lfh_offset
        .checked_add(LFH_SIZE + lfh_name_len + lfh_extra_len)
        .ok_or(Error::UnexpectedEof)?;

    let kept = name_len.min(MAX_FILENAME);
    let mut name_bytes = Vec::with_capacity(kept as usize);
    for i in 0..kept {
        let byte = source
            .read_at(entry_offset + CDFH_MIN_SIZE + i)
            .ok_or(Error::UnexpectedEof)?;
        name_bytes.push(byte);
    }

    Ok(FileInfo {
        name: String::from_utf8_lossy(&name_bytes).into_owned(),
        method: CompressionMethod::from_u16(method),
        crc32,
        compressed_size,
        uncompressed_size,
        data_offset,
        has_data_descriptor: flags & 0x08 != 0,
    })
}
