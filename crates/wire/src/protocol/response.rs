//! HTTP response assembly.
//!
//! [`Response::parse`] is the client side counterpart of [`Request::parse`](crate::protocol::Request::parse):
//! the status-line and header section are read eagerly and the rest of the stream is the body.

use std::io::{self, Read, Write};

use http::StatusCode;
use tracing::trace;

use crate::codec::LineReader;
use crate::codec::line::encode_status_line;
use crate::protocol::{Header, ParseError, ProtoVersion, SendError, StatusLine};

/// An HTTP/1.x response with a body of type `B`.
#[derive(Debug)]
pub struct Response<B = io::Empty> {
    pub proto: ProtoVersion,
    pub status: StatusCode,
    pub header: Header,
    pub body: Option<B>,
}

impl Response {
    pub fn new(status: StatusCode, header: Header) -> Self {
        Self { proto: ProtoVersion::default(), status, header, body: None }
    }
}

impl<R: Read> Response<R> {
    /// Reads the status-line and header section; the remaining stream becomes the body.
    pub fn parse(reader: R) -> Result<Self, ParseError> {
        let mut reader = LineReader::new(reader);
        let StatusLine { proto, status } = StatusLine::parse(&mut reader)?;
        let header = Header::parse(&mut reader)?;

        Ok(Self { proto, status, header, body: Some(reader.into_inner()) })
    }
}

impl<B> Response<B> {
    pub fn with_body<T>(self, body: T) -> Response<T> {
        Response { proto: self.proto, status: self.status, header: self.header, body: Some(body) }
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine { proto: self.proto.clone(), status: self.status }
    }
}

impl<B: Read> Response<B> {
    /// Writes the status-line, the header section and the whole body, then closes the body.
    ///
    /// No framing header is added; callers set `Content-Length` themselves when needed.
    pub fn write_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<(), SendError> {
        encode_status_line(&self.proto, self.status, writer)?;
        self.header.write_to(writer)?;

        if let Some(mut body) = self.body.take() {
            let written = io::copy(&mut body, writer)?;
            trace!(written, status = self.status.as_u16(), "wrote response body");
        }
        Ok(())
    }
}
