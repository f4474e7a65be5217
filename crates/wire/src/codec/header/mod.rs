//! HTTP header section encoding and decoding
//!
//! # Components
//!
//! - [`decode_header`]: reads header lines from a [`LineReader`](crate::codec::LineReader)
//!   until the blank line closing the section
//! - [`encode_header`]: writes a [`Header`](crate::protocol::Header) back to wire form

mod header_decoder;
mod header_encoder;

pub use header_decoder::decode_header;
pub use header_encoder::encode_header;

pub(crate) use header_encoder::CRLF;
