//! Status-line decoding and encoding.
//!
//! Unlike the protocol token, which degrades to an unknown version, the status code must be an
//! integer naming a valid [`StatusCode`] or the whole line is rejected.

use std::io;
use std::io::{Read, Write};

use http::StatusCode;
use tracing::trace;

use crate::codec::LineReader;
use crate::codec::header::CRLF;
use crate::protocol::{ParseError, ProtoVersion, StatusLine};

pub fn decode_status_line<R: Read>(reader: &mut LineReader<R>) -> Result<StatusLine, ParseError> {
    let line = reader.read_line()?;

    let first = line.iter().position(|b| *b == b' ').ok_or(ParseError::WrongFormat)?;
    let proto = ProtoVersion::parse(&String::from_utf8_lossy(&line[..first]));

    let rest = &line[first + 1..];
    let code = rest.iter().position(|b| *b == b' ').map_or(rest, |end| &rest[..end]);
    let code = String::from_utf8_lossy(code).parse::<u16>().map_err(ParseError::invalid_status_code)?;
    let status = StatusCode::from_u16(code).map_err(ParseError::invalid_status_code)?;

    trace!(proto = %proto, status = status.as_u16(), "parsed status line");
    Ok(StatusLine { proto, status })
}

/// Writes `<proto> <code> <reason>\r\n`; the reason is empty for codes without a canonical one.
pub fn encode_status_line<W: Write + ?Sized>(proto: &ProtoVersion, status: StatusCode, writer: &mut W) -> io::Result<()> {
    write!(writer, "{} {} {}", proto, status.as_str(), status.canonical_reason().unwrap_or(""))?;
    writer.write_all(CRLF)
}
