//! Header section encoding.
//!
//! Each entry holding at least one value is written as `Name: v1,v2\r\n`. Values are joined with
//! a bare comma and are not escaped. The section always ends with one blank `\r\n` line.

use std::io;
use std::io::Write;

use crate::protocol::Header;

pub(crate) const CRLF: &[u8] = b"\r\n";
const COLON_SPACE: &[u8] = b": ";
const COMMA: &[u8] = b",";

/// Writes `header` and the terminating blank line to `writer`.
pub fn encode_header<W: Write + ?Sized>(header: &Header, writer: &mut W) -> io::Result<()> {
    for (name, values) in header {
        if values.is_empty() {
            continue;
        }

        writer.write_all(name.as_bytes())?;
        writer.write_all(COLON_SPACE)?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                writer.write_all(COMMA)?;
            }
            writer.write_all(value.as_bytes())?;
        }
        writer.write_all(CRLF)?;
    }
    writer.write_all(CRLF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::LineReader;
    use crate::codec::header::decode_header;

    #[test]
    fn single_entry() {
        let mut header = Header::new();
        header.set("Accept", ["text/html", "*/*"]);

        let mut buf = Vec::new();
        encode_header(&header, &mut buf).unwrap();

        assert_eq!(buf, b"Accept: text/html,*/*\r\n\r\n");
    }

    #[test]
    fn empty_header_is_blank_line() {
        let mut buf = Vec::new();
        encode_header(&Header::new(), &mut buf).unwrap();

        assert_eq!(buf, b"\r\n");
    }

    #[test]
    fn skips_entries_without_values() {
        let mut header = Header::new();
        header.insert_raw("X-Nothing".into(), vec![]);
        header.set("Host", ["h"]);

        let mut buf = Vec::new();
        encode_header(&header, &mut buf).unwrap();

        assert_eq!(buf, b"Host: h\r\n\r\n");
    }

    #[test]
    fn round_trip() {
        let mut header = Header::new();
        header.set("Host", ["example.com"]);
        header.set("Accept-Encoding", ["gzip", "br"]);
        header.set("Content-Length", ["42"]);
        header.add("X-Forwarded-For", ["10.0.0.1", "10.0.0.2"]);

        let mut buf = Vec::new();
        encode_header(&header, &mut buf).unwrap();

        let parsed = decode_header(&mut LineReader::new(&buf[..])).unwrap();
        assert_eq!(parsed, header);
    }
}
