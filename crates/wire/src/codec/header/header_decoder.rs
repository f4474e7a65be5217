//! Header section decoding from a [`LineReader`].
//!
//! Every line up to the first empty one is split at its first colon. The name is trimmed, the
//! value is split on commas and each token trimmed. Lines are recorded with
//! [`Header::insert_raw`], so a repeated raw name keeps only its last line; a line without a
//! colon becomes an entry with an empty name and no values. Invalid UTF-8 is decoded lossily.

use std::io::Read;

use tracing::{trace, warn};

use crate::codec::LineReader;
use crate::protocol::{Header, ParseError};

/// Reads header lines until the blank line ending the section.
pub fn decode_header<R: Read>(reader: &mut LineReader<R>) -> Result<Header, ParseError> {
    let mut header = Header::new();

    loop {
        let line = reader.read_line()?;
        if line.is_empty() {
            break;
        }

        let (key, values) = parse_header_line(&line);
        header.insert_raw(key, values);
    }

    trace!(header_count = header.len(), "parsed header section");
    Ok(header)
}

/// Splits one header line into its name and comma separated values.
fn parse_header_line(line: &[u8]) -> (String, Vec<String>) {
    let Some(colon) = line.iter().position(|b| *b == b':') else {
        warn!(line = %String::from_utf8_lossy(line), "header line without colon");
        return (String::new(), Vec::new());
    };

    let key = String::from_utf8_lossy(line[..colon].trim_ascii()).into_owned();
    let values = line[colon + 1..]
        .split(|b| *b == b',')
        .map(|value| String::from_utf8_lossy(value.trim_ascii()).into_owned())
        .collect();

    (key, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn decode(input: &str) -> Header {
        decode_header(&mut LineReader::new(input.as_bytes())).unwrap()
    }

    #[test]
    fn from_curl() {
        let str = indoc! {r##"
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        "##};

        let header = decode(str);

        assert_eq!(header.len(), 3);
        assert_eq!(header.get("host"), "127.0.0.1:8080");
        assert_eq!(header.get("user-agent"), "curl/7.79.1");
        assert_eq!(header.get("ACCEPT"), "*/*");
    }

    #[test]
    fn splits_and_trims_values() {
        let header = decode("Accept-Encoding:  gzip , deflate,br \r\n\r\n");

        assert_eq!(header.values("accept-encoding").unwrap(), ["gzip", "deflate", "br"]);
    }

    #[test]
    fn only_first_colon_splits() {
        let header = decode("Host: example.com:8080\r\n\r\n");

        assert_eq!(header.get("Host"), "example.com:8080");
    }

    #[test]
    fn same_raw_name_keeps_last_line() {
        let str = indoc! {r##"
        Set-Cookie: a=1
        Set-Cookie: b=2, c=3

        "##};

        let header = decode(str);

        assert_eq!(header.len(), 1);
        assert_eq!(header.values("set-cookie").unwrap(), ["b=2", "c=3"]);
    }

    #[test]
    fn colon_less_line_becomes_empty_entry() {
        let header = decode("garbage line\r\nHost: h\r\n\r\n");

        assert_eq!(header.len(), 2);
        assert_eq!(header.values(""), Some(&[] as &[String]));
        assert_eq!(header.get("host"), "h");
    }

    #[test]
    fn empty_value_is_kept() {
        let header = decode("X-Empty:\r\n\r\n");

        assert_eq!(header.values("x-empty").unwrap(), [""]);
    }

    #[test]
    fn eof_before_blank_line() {
        let result = decode_header(&mut LineReader::new(&b"Host: h\r\n"[..]));

        assert!(matches!(result, Err(ParseError::Io { .. })));
    }

    #[test]
    fn leaves_body_in_reader() {
        let mut reader = LineReader::new(&b"Host: h\r\n\r\nbody"[..]);
        decode_header(&mut reader).unwrap();

        let mut body = String::new();
        reader.read_to_string(&mut body).unwrap();
        assert_eq!(body, "body");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let header = decode_header(&mut LineReader::new(&b"X-Raw: a\xffb\r\n\r\n"[..])).unwrap();
        assert_eq!(header.get("x-raw"), "a\u{fffd}b");

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf, "X-Raw: a\u{fffd}b\r\n\r\n".as_bytes());
    }
}
