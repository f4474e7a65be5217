//! A blocking HTTP/1.x wire codec
//!
//! This crate reads HTTP/1.x message heads off a byte stream into structured request and
//! response data, and writes them back. It does the tokenizing only: methods, status codes and
//! URIs are the [`http`] crate's types, and sockets, TLS, timeouts and connection reuse are left
//! to the caller.
//!
//! # Features
//!
//! - Request-line and status-line parsing and formatting
//! - Case-insensitive, multi-valued header collection with wire (de)serialization
//! - Bodies that are length-delimited or run to the end of the stream
//! - A response writer that sends the head at most once
//! - `tokio_util` codec adapters for buffered, framed transports
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use http::{Method, StatusCode};
//! use micro_wire::connection::ResponseWriter;
//! use micro_wire::protocol::Request;
//! use std::io::Write;
//!
//! let input = b"POST /echo HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
//! let mut request = Request::parse(&input[..]).unwrap();
//! assert_eq!(request.method, Method::POST);
//! assert_eq!(request.host, "localhost");
//!
//! let mut body = Vec::new();
//! request.body.take().unwrap().read_to_end(&mut body).unwrap();
//!
//! let mut writer = ResponseWriter::new(Vec::new());
//! writer.header_mut().set("Content-Length", [body.len().to_string()]);
//! writer.write_header(StatusCode::OK).unwrap();
//! writer.write_all(&body).unwrap();
//!
//! assert_eq!(writer.into_inner(), b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello");
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: line reading, header and first-line codecs, framed adapters
//! - [`protocol`]: message types and errors
//! - [`connection`]: the [`connection::ResponseWriter`] state machine
//!
//! # Wire format
//!
//! ```text
//! <METHOD> <target> <proto>/<major>.<minor>\r\n
//! <proto>/<major>.<minor> <code> <reason>\r\n
//! <Header-Name>: <v1>,<v2>,...\r\n
//! \r\n
//! <body bytes>
//! ```
//!
//! Lines ending in either `\r\n` or `\n` are accepted on read, `\r\n` is always written.
//!
//! # Limitations
//!
//! - HTTP/1.x only
//! - No chunked transfer encoding
//! - Header values are only trimmed and split on commas, never validated
//! - Repeated header lines with the same raw name keep only the last line
//! - Methods must be valid [`http::Method`] tokens and status codes must lie in `100..=999`
//! - Non-UTF-8 bytes in header names and values are replaced with U+FFFD when parsed

pub mod codec;
pub mod connection;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
