//! In-memory ZIP archive construction for tests.
//!
//! Builds just enough of the container format to exercise the decoder:
//! local file headers, entry payloads, optional trailing data descriptors,
//! the central directory, and the end-of-central-directory record with an
//! optional archive comment.

#![allow(dead_code)]


use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

/// Where an entry's CRC is recorded.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DataDescriptor {
    /// CRC in the local file header (the common case).
    None,
    /// CRC trails the data without the optional signature.
    Plain,
    /// CRC trails the data behind a "PK\x07\x08" signature.
    Signed,
}

/// One entry to be placed in a built archive.
pub struct EntrySpec {
    pub name: Vec<u8>,
    pub data: Vec<u8>,
    pub method: u16,
    pub descriptor: DataDescriptor,
}

impl EntrySpec {
    pub fn stored(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.as_bytes().to_vec(),
            data: data.to_vec(),
            method: 0,
            descriptor: DataDescriptor::None,
        }
    }

    pub fn deflated(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.as_bytes().to_vec(),
            data: data.to_vec(),
            method: 8,
            descriptor: DataDescriptor::None,
        }
    }

    pub fn with_descriptor(mut self, descriptor: DataDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }
}

/// Compress `data` as a raw DEFLATE stream.
pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// CRC-32 as written into archive headers (computed by flate2, so the
/// fixture does not depend on the code under test).
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(data);
    crc.sum()
}

/// Build a complete single-disk archive from `entries` with an archive
/// comment (empty slice for none).
pub fn build_zip(entries: &[EntrySpec], comment: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut records = Vec::new();

    for entry in entries {
        let lfh_offset = out.len() as u32;
        let payload = match entry.method {
            8 => deflate(&entry.data),
            _ => entry.data.clone(),
        };
        let crc = crc32(&entry.data);
        let flags: u16 = if entry.descriptor == DataDescriptor::None {
            0
        } else {
            1 << 3
        };
        // With flag bit 3 the CRC moves to the trailing descriptor; the
        // sizes stay real (the CRC-only streaming convention).
        let header_crc = if flags & (1 << 3) != 0 { 0 } else { crc };

        out.extend_from_slice(&0x04034B50u32.to_le_bytes());
        out.extend_from_slice(&20u16.to_le_bytes()); // version needed
        out.extend_from_slice(&flags.to_le_bytes());
        out.extend_from_slice(&entry.method.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // mod time
        out.extend_from_slice(&0u16.to_le_bytes()); // mod date
        out.extend_from_slice(&header_crc.to_le_bytes());
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
        out.extend_from_slice(&(entry.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // extra length
        out.extend_from_slice(&entry.name);
        out.extend_from_slice(&payload);

        match entry.descriptor {
            DataDescriptor::None => {}
            DataDescriptor::Plain | DataDescriptor::Signed => {
                if entry.descriptor == DataDescriptor::Signed {
                    out.extend_from_slice(&0x08074B50u32.to_le_bytes());
                }
                out.extend_from_slice(&crc.to_le_bytes());
                out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
                out.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
            }
        }

        records.push((entry, payload.len() as u32, crc, flags, lfh_offset));
    }

    let cd_offset = out.len() as u32;
    for (entry, payload_len, crc, flags, lfh_offset) in &records {
        out.extend_from_slice(&0x02014B50u32.to_le_bytes());
        out.extend_from_slice(&20u16.to_le_bytes()); // version made by
        out.extend_from_slice(&20u16.to_le_bytes()); // version needed
        out.extend_from_slice(&flags.to_le_bytes());
        out.extend_from_slice(&entry.method.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // mod time
        out.extend_from_slice(&0u16.to_le_bytes()); // mod date
        out.extend_from_slice(&crc.to_le_bytes());
        out.extend_from_slice(&payload_len.to_le_bytes());
        out.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
        out.extend_from_slice(&(entry.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // extra length
        out.extend_from_slice(&0u16.to_le_bytes()); // comment length
        out.extend_from_slice(&0u16.to_le_bytes()); // disk number start
        out.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
        out.extend_from_slice(&0u32.to_le_bytes()); // external attributes
        out.extend_from_slice(&lfh_offset.to_le_bytes());
        out.extend_from_slice(&entry.name);
    }
    let cd_size = out.len() as u32 - cd_offset;

    out.extend_from_slice(&0x06054B50u32.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // this disk
    out.extend_from_slice(&0u16.to_le_bytes()); // directory disk
    out.extend_from_slice(&(records.len() as u16).to_le_bytes());
    out.extend_from_slice(&(records.len() as u16).to_le_bytes());
    out.extend_from_slice(&cd_size.to_le_bytes());
    out.extend_from_slice(&cd_offset.to_le_bytes());
    out.extend_from_slice(&(comment.len() as u16).to_le_bytes());
    out.extend_from_slice(comment);
    out
}
