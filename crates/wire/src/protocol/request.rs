//! HTTP request assembly.
//!
//! A [`Request`] is either built with [`Request::new`] for sending, or read off a stream with
//! [`Request::parse`]. In both cases the body is owned by the request until one of the write
//! methods consumes it; consuming drops the body, which closes it.

use std::io::{self, Read, Write};
use std::net::SocketAddr;

use http::{Method, Uri};
use tracing::trace;

use crate::codec::LineReader;
use crate::codec::line::encode_request_line;
use crate::protocol::{CONTENT_LENGTH, Header, HOST, ParseError, ProtoVersion, RequestLine, SendError};

/// An HTTP/1.x request with a body of type `B`.
///
/// `content_length` is `-1` when the length is unknown, in which case the body runs until its
/// stream ends and is sent with [`Request::write_body`] instead of [`Request::write_to`].
#[derive(Debug)]
pub struct Request<B = io::Empty> {
    pub method: Method,
    pub uri: Uri,
    pub proto: ProtoVersion,
    pub header: Header,
    pub host: String,
    pub content_length: i64,
    pub body: Option<B>,
    pub local_addr: Option<SocketAddr>,
    pub remote_addr: Option<SocketAddr>,
    pub keep_alive: bool,
}

impl Request {
    /// Creates an outbound `HTTP/1.1` request without a body.
    pub fn new(method: Method, uri: Uri, header: Header) -> Self {
        let host = header.get(HOST).to_owned();
        Self {
            method,
            uri,
            proto: ProtoVersion::default(),
            header,
            host,
            content_length: -1,
            body: None,
            local_addr: None,
            remote_addr: None,
            keep_alive: false,
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new(Method::default(), Uri::default(), Header::new())
    }
}

impl<R: Read> Request<R> {
    /// Reads the request-line and header section from `reader`.
    ///
    /// The reader is left positioned at the first body byte and becomes the body. Passing a
    /// `&mut` reference keeps the stream with the caller, dropping the body then closes nothing.
    pub fn parse(reader: R) -> Result<Self, ParseError> {
        let mut reader = LineReader::new(reader);
        let RequestLine { method, uri, proto } = RequestLine::parse(&mut reader)?;
        let header = Header::parse(&mut reader)?;

        let host = match header.get(HOST) {
            "" => uri.authority().map(|a| a.as_str().to_owned()).unwrap_or_default(),
            host => host.to_owned(),
        };
        let content_length = header.get(CONTENT_LENGTH).parse::<i64>().ok().filter(|n| *n >= 0).unwrap_or(-1);

        trace!(host = %host, content_length, "parsed request head");
        Ok(Self {
            method,
            uri,
            proto,
            header,
            host,
            content_length,
            body: Some(reader.into_inner()),
            local_addr: None,
            remote_addr: None,
            keep_alive: false,
        })
    }
}

impl<B> Request<B> {
    /// Replaces the body, keeping everything else.
    pub fn with_body<T>(self, body: T) -> Request<T> {
        Request {
            method: self.method,
            uri: self.uri,
            proto: self.proto,
            header: self.header,
            host: self.host,
            content_length: self.content_length,
            body: Some(body),
            local_addr: self.local_addr,
            remote_addr: self.remote_addr,
            keep_alive: self.keep_alive,
        }
    }

    pub fn with_addrs(mut self, local_addr: SocketAddr, remote_addr: SocketAddr) -> Self {
        self.local_addr = Some(local_addr);
        self.remote_addr = Some(remote_addr);
        self
    }

    pub fn request_line(&self) -> RequestLine {
        RequestLine { method: self.method.clone(), uri: self.uri.clone(), proto: self.proto.clone() }
    }

    /// Drops the body without sending it.
    pub fn close_body(&mut self) {
        self.body.take();
    }
}

impl<B: Read> Request<B> {
    /// Writes the request-line and header section, then the body if its length is known.
    ///
    /// A known `content_length` overrides the `Content-Length` header. Otherwise a non-empty
    /// `Content-Length` header is parsed into `content_length`. With a known length at most that
    /// many body bytes are copied and the body is closed; with an unknown length the body is left
    /// for [`Request::write_body`].
    pub fn write_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<(), SendError> {
        encode_request_line(&self.method, &self.uri, &self.proto, writer)?;

        if self.content_length >= 0 {
            self.header.set(CONTENT_LENGTH, [self.content_length.to_string()]);
        } else {
            let value = self.header.get(CONTENT_LENGTH);
            if !value.is_empty() {
                self.content_length = value.parse::<i64>()?;
            }
        }

        self.header.write_to(writer)?;

        if let Ok(length) = u64::try_from(self.content_length) {
            if let Some(body) = self.body.take() {
                let written = io::copy(&mut body.take(length), writer)?;
                trace!(written, content_length = length, "wrote request body");
            }
        }
        Ok(())
    }

    /// Copies the whole body to `writer` and closes it, only when the length is unknown.
    pub fn write_body<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<(), SendError> {
        if self.content_length < 0 {
            if let Some(mut body) = self.body.take() {
                let written = io::copy(&mut body, writer)?;
                trace!(written, "wrote request body until end of stream");
            }
        }
        Ok(())
    }
}
