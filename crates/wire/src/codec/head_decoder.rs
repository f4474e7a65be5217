//! Buffer oriented head decoders for [`tokio_util::codec::FramedRead`].
//!
//! The decoders wait until the blank line closing the header section is buffered, split the head
//! off the buffer and run the same line and header codec the blocking path uses. Bytes after the
//! head stay in the buffer for whatever body handling the caller does. Unlike the blocking path,
//! the buffered head size is capped.

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{error, trace};

use crate::codec::LineReader;
use crate::ensure;
use crate::protocol::{Header, ParseError, RequestLine, StatusLine};

/// Maximum size in bytes of a buffered message head, first line included
pub const DEFAULT_MAX_HEAD_BYTES: usize = 8 * 1024;

/// Decodes `(RequestLine, Header)` items.
#[derive(Debug, Clone)]
pub struct RequestHeadDecoder {
    max_head_size: usize,
}

/// Decodes `(StatusLine, Header)` items.
#[derive(Debug, Clone)]
pub struct ResponseHeadDecoder {
    max_head_size: usize,
}

impl RequestHeadDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_head_size(max_head_size: usize) -> Self {
        Self { max_head_size }
    }
}

impl Default for RequestHeadDecoder {
    fn default() -> Self {
        Self::with_max_head_size(DEFAULT_MAX_HEAD_BYTES)
    }
}

impl ResponseHeadDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_head_size(max_head_size: usize) -> Self {
        Self { max_head_size }
    }
}

impl Default for ResponseHeadDecoder {
    fn default() -> Self {
        Self::with_max_head_size(DEFAULT_MAX_HEAD_BYTES)
    }
}

impl Decoder for RequestHeadDecoder {
    type Item = (RequestLine, Header);
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        decode_head(src, self.max_head_size, |reader| Ok((RequestLine::parse(reader)?, Header::parse(reader)?)))
    }
}

impl Decoder for ResponseHeadDecoder {
    type Item = (StatusLine, Header);
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        decode_head(src, self.max_head_size, |reader| Ok((StatusLine::parse(reader)?, Header::parse(reader)?)))
    }
}

fn decode_head<T, F>(src: &mut BytesMut, max_head_size: usize, parse: F) -> Result<Option<T>, ParseError>
where
    F: FnOnce(&mut LineReader<&[u8]>) -> Result<T, ParseError>,
{
    let Some(head_size) = head_size(src) else {
        if src.len() > max_head_size {
            error!(current_size = src.len(), max_size = max_head_size, "incomplete head exceeds the limit");
            return Err(ParseError::too_large_header(src.len(), max_head_size));
        }
        return Ok(None);
    };

    ensure!(head_size <= max_head_size, ParseError::too_large_header(head_size, max_head_size));
    trace!(head_size, "buffered complete head");

    let head = src.split_to(head_size);
    parse(&mut LineReader::new(&head[..])).map(Some)
}

/// Length of the head up to and including the first empty line after the first line.
fn head_size(src: &[u8]) -> Option<usize> {
    let mut start = 0;
    let mut first_line = true;

    while let Some(pos) = src[start..].iter().position(|b| *b == b'\n') {
        let end = start + pos;
        let line = &src[start..end];
        if !first_line && (line.is_empty() || line == b"\r") {
            return Some(end + 1);
        }
        first_line = false;
        start = end + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use http::{Method, StatusCode};
    use indoc::indoc;
    use tokio_util::codec::FramedRead;

    #[test]
    fn from_curl() {
        let str = indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        123"##};

        let mut buf = BytesMut::from(str);

        let (line, header) = RequestHeadDecoder::new().decode(&mut buf).unwrap().unwrap();

        assert_eq!(line.method, Method::GET);
        assert_eq!(line.uri.path(), "/index.html");
        assert_eq!(header.len(), 3);
        assert_eq!(header.get("host"), "127.0.0.1:8080");
        assert_eq!(&buf[..], b"123");
    }

    #[test]
    fn partial_head() {
        let mut decoder = RequestHeadDecoder::new();
        let mut buf = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: h\r\n"[..]);

        assert!(decoder.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 25);

        buf.extend_from_slice(b"\r\n");
        let (line, header) = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(line.uri.path(), "/");
        assert_eq!(header.get("Host"), "h");
        assert!(buf.is_empty());
    }

    #[test]
    fn head_without_headers() {
        let mut buf = BytesMut::from(&b"GET / HTTP/1.1\n\n"[..]);

        let (_, header) = RequestHeadDecoder::new().decode(&mut buf).unwrap().unwrap();
        assert!(header.is_empty());
    }

    #[test]
    fn too_large_incomplete_head() {
        let mut decoder = RequestHeadDecoder::with_max_head_size(16);
        let mut buf = BytesMut::from(&b"GET /a/very/long/path HTTP/1.1\r\n"[..]);

        let result = decoder.decode(&mut buf);
        assert!(matches!(result, Err(ParseError::TooLargeHeader { max_size: 16, .. })));
    }

    #[test]
    fn too_large_complete_head() {
        let mut decoder = RequestHeadDecoder::with_max_head_size(16);
        let mut buf = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: h\r\n\r\n"[..]);

        let result = decoder.decode(&mut buf);
        assert!(matches!(result, Err(ParseError::TooLargeHeader { current_size: 27, max_size: 16 })));
    }

    #[test]
    fn wrong_format() {
        let mut buf = BytesMut::from(&b"GET\r\n\r\n"[..]);
        assert!(matches!(RequestHeadDecoder::new().decode(&mut buf), Err(ParseError::WrongFormat)));
    }

    #[test]
    fn response_head() {
        let mut buf = BytesMut::from(&b"HTTP/1.1 301 Moved Permanently\r\nLocation: /new\r\n\r\n"[..]);

        let (line, header) = ResponseHeadDecoder::new().decode(&mut buf).unwrap().unwrap();
        assert_eq!(line.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(header.get("location"), "/new");
    }

    #[tokio::test]
    async fn framed_pipelined_requests() {
        let input = b"GET /first HTTP/1.1\r\nHost: h\r\n\r\nHEAD /second HTTP/1.0\r\n\r\n";
        let mut framed = FramedRead::new(&input[..], RequestHeadDecoder::new());

        let (first, _) = framed.next().await.unwrap().unwrap();
        assert_eq!(first.uri.path(), "/first");

        let (second, header) = framed.next().await.unwrap().unwrap();
        assert_eq!(second.method, Method::HEAD);
        assert_eq!(second.uri.path(), "/second");
        assert!(header.is_empty());

        assert!(framed.next().await.is_none());
    }
}
