//! ZIP archive reading.
//!
//! ZIP files are indexed from the end: [`ZipArchive::open`] locates the
//! end-of-central-directory record, lookups walk the central directory,
//! and extraction resolves each entry's local file header before running
//! the store or DEFLATE data path.

pub mod extractor;
mod parser;
pub mod structures;

pub use extractor::ZipArchive;
pub use structures::{CompressionMethod, FileInfo};
