//! The first line of a message: request-line or status-line.

use std::io::{self, Read, Write};

use http::{Method, StatusCode, Uri};

use crate::codec::LineReader;
use crate::codec::line::{decode_request_line, decode_status_line, encode_request_line, encode_status_line};
use crate::protocol::{ParseError, ProtoVersion};

/// `<METHOD> <target> <proto>`
///
/// For `CONNECT` the target is in authority form and `uri` carries only the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub uri: Uri,
    pub proto: ProtoVersion,
}

impl RequestLine {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self { method, uri, proto: ProtoVersion::default() }
    }

    pub fn parse<R: Read>(reader: &mut LineReader<R>) -> Result<Self, ParseError> {
        decode_request_line(reader)
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        encode_request_line(&self.method, &self.uri, &self.proto, writer)
    }
}

/// `<proto> <code> <reason>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub proto: ProtoVersion,
    pub status: StatusCode,
}

impl StatusLine {
    pub fn new(status: StatusCode) -> Self {
        Self { proto: ProtoVersion::default(), status }
    }

    pub fn parse<R: Read>(reader: &mut LineReader<R>) -> Result<Self, ParseError> {
        decode_status_line(reader)
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        encode_status_line(&self.proto, self.status, writer)
    }
}
