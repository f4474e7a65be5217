//! Request-line decoding and encoding.
//!
//! The line is split at its first two spaces into method, target and protocol token. A missing
//! space is a [`ParseError::WrongFormat`]. The method is uppercased before it is interpreted. A
//! `CONNECT` target is an authority (`host:port`) and is kept as a [`Uri`] with nothing but that
//! authority; every other target is parsed as a request-URI.

use std::io;
use std::io::{Read, Write};

use bytes::Bytes;
use http::uri::Authority;
use http::{Method, Uri};
use tracing::trace;

use crate::codec::LineReader;
use crate::codec::header::CRLF;
use crate::protocol::{ParseError, ProtoVersion, RequestLine};

pub fn decode_request_line<R: Read>(reader: &mut LineReader<R>) -> Result<RequestLine, ParseError> {
    let line = reader.read_line()?;

    let first = line.iter().position(|b| *b == b' ').ok_or(ParseError::WrongFormat)?;
    let method = Method::from_bytes(&line[..first].to_ascii_uppercase())?;

    let rest = line.slice(first + 1..);
    let second = rest.iter().position(|b| *b == b' ').ok_or(ParseError::WrongFormat)?;
    let target = rest.slice(..second);

    let uri = if method == Method::CONNECT { parse_authority(target)? } else { Uri::from_maybe_shared(target)? };
    let proto = ProtoVersion::parse(&String::from_utf8_lossy(&rest[second + 1..]));

    trace!(method = %method, uri = %uri, proto = %proto, "parsed request line");
    Ok(RequestLine { method, uri, proto })
}

fn parse_authority(target: Bytes) -> Result<Uri, ParseError> {
    Ok(Uri::from(Authority::from_maybe_shared(target)?))
}

/// Writes `<METHOD> <escaped-path> <proto>\r\n`, or the authority in place of the path for
/// `CONNECT`.
pub fn encode_request_line<W: Write + ?Sized>(
    method: &Method,
    uri: &Uri,
    proto: &ProtoVersion,
    writer: &mut W,
) -> io::Result<()> {
    let target = if method == Method::CONNECT { uri.authority().map_or("", Authority::as_str) } else { uri.path() };

    write!(writer, "{method} {target} {proto}")?;
    writer.write_all(CRLF)
}
