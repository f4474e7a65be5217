//! HTTP/1.x wire codec
//!
//! This module turns bytes into message heads and back. The blocking path works directly on
//! [`std::io::Read`] and [`std::io::Write`] streams, one line at a time, so that the bytes after
//! a head are never consumed by the parser. The framed path runs the same line and header codec
//! over a [`bytes::BytesMut`] buffer for use with `tokio_util`'s `FramedRead` and `FramedWrite`.
//!
//! # Components
//!
//! - [`LineReader`]: `\n` / `\r\n` terminated line reads with pass-through [`std::io::Read`]
//! - [`header`]: header section decoding and encoding
//! - [`line`]: request-line and status-line decoding and encoding
//! - [`RequestHeadDecoder`] / [`ResponseHeadDecoder`]: framed head decoding
//! - [`HeadEncoder`]: framed head encoding
//!
//! # Example
//!
//! ```
//! use micro_wire::codec::LineReader;
//! use micro_wire::protocol::{Header, RequestLine};
//!
//! let mut reader = LineReader::new(&b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n"[..]);
//! let line = RequestLine::parse(&mut reader).unwrap();
//! let header = Header::parse(&mut reader).unwrap();
//!
//! assert_eq!(line.uri.path(), "/index.html");
//! assert_eq!(header.get("host"), "example.com");
//! ```

pub mod header;
pub mod line;

mod head_decoder;
mod head_encoder;
mod line_reader;

pub use head_decoder::{DEFAULT_MAX_HEAD_BYTES, RequestHeadDecoder, ResponseHeadDecoder};
pub use head_encoder::HeadEncoder;
pub use line_reader::{DEFAULT_LINE_CAPACITY, LineReader};
