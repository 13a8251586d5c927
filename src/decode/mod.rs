//! DEFLATE stream decoding.
//!
//! Layered the way the format is layered: [`bit_reader`] extracts LSB-first
//! bits from a byte source, an output window manages the caller's buffer
//! (including self-referencing back-reference copies), and the inflate core
//! builds Huffman tables and decodes blocks.

pub mod bit_reader;
mod inflate;
pub(crate) mod window;

pub(crate) use inflate::inflate_into;
pub use inflate::inflate_raw;
