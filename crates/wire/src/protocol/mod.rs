//! Core HTTP/1.x message types.
//!
//! This module holds the structured side of the codec: what a message head looks like once it
//! has been read off the wire, and what gets written back.
//!
//! - **Header collection** ([`header`]): [`Header`], case-insensitive and multi-valued
//! - **Protocol token** (`version`): [`ProtoVersion`], `NAME/MAJOR.MINOR` with an unknown
//!   sentinel
//! - **First lines** (`line`): [`RequestLine`] and [`StatusLine`]
//! - **Messages** (`request`, `response`): [`Request`] and [`Response`], head plus body stream
//! - **Errors** (`error`): [`ParseError`] for reading, [`SendError`] for writing
//!
//! Method, status code and URI types come from the [`http`] crate.

mod error;
pub use error::ParseError;
pub use error::SendError;

pub mod header;
pub use header::Header;

mod version;
pub use version::ProtoVersion;

mod line;
pub use line::RequestLine;
pub use line::StatusLine;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

pub(crate) const HOST: &str = "Host";
pub(crate) const CONTENT_LENGTH: &str = "Content-Length";
