//! # picozip
//!
//! A footprint-minimized ZIP and raw-DEFLATE decoder.
//!
//! Archive bytes are read through a caller-supplied [`ReadSource`] and
//! decoded data lands in caller-provided buffers; the decode path performs
//! no heap allocation. Intended for resource-constrained targets (embedded,
//! script engines, firmware update paths) where a full-featured ZIP stack
//! is too heavy.
//!
//! ## Supported
//!
//! - Central directory lookup by entry name or index
//! - STORE (method 0) and DEFLATE (method 8) entries
//! - Length and CRC-32 verification, including the trailing data
//!   descriptor CRC case (general-purpose flag bit 3)
//! - Raw DEFLATE streams without ZIP framing via [`inflate_raw`]
//!
//! ## Not supported
//!
//! ZIP64, encryption, spanned archives, and any encoding path.
//!
//! ## Example
//!
//! ```no_run
//! use picozip::ZipArchive;
//!
//! fn main() -> picozip::Result<()> {
//!     let bytes = std::fs::read("firmware.zip").expect("read archive");
//!     let mut archive = ZipArchive::open(&bytes[..])?;
//!
//!     let entry = archive.entry_by_name("app.bin")?;
//!     let mut data = vec![0u8; entry.uncompressed_size as usize];
//!     archive.read(&entry, &mut data)?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod crc32;
pub mod decode;
pub mod error;
pub mod source;
pub mod zip;

pub use decode::inflate_raw;
pub use error::{Error, Result};
pub use source::{CallbackSource, ReadSource};
pub use zip::{CompressionMethod, FileInfo, ZipArchive};
