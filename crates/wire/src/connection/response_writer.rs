use std::io;
use std::io::Write;

use http::StatusCode;
use tracing::{error, trace};

use crate::codec::line::encode_status_line;
use crate::protocol::{Header, ProtoVersion, SendError};

/// Where a [`ResponseWriter`] stands with respect to the response head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    HeaderPending,
    HeaderSent(StatusCode),
}

/// Writes a response head at most once, then passes body bytes through.
///
/// [`ResponseWriter::write_header`] emits the status-line and the header section. Body writes via
/// [`Write`] go straight to the sink in any state and never emit the head implicitly, so the
/// caller decides when the head goes out.
#[derive(Debug)]
pub struct ResponseWriter<W> {
    writer: W,
    proto: ProtoVersion,
    header: Header,
    state: WriterState,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_proto(writer, ProtoVersion::default())
    }

    pub fn with_proto(writer: W, proto: ProtoVersion) -> Self {
        Self { writer, proto, header: Header::new(), state: WriterState::HeaderPending }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Headers to send; changes after [`ResponseWriter::write_header`] have no effect on the wire.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    /// The status sent with the head, if it has been written.
    pub fn status(&self) -> Option<StatusCode> {
        match self.state {
            WriterState::HeaderPending => None,
            WriterState::HeaderSent(status) => Some(status),
        }
    }

    /// Writes the status-line and the header section.
    ///
    /// # Errors
    ///
    /// [`SendError::HeaderAlreadyWritten`] without touching the sink if the head was already
    /// written, or the I/O error of the sink.
    pub fn write_header(&mut self, status: StatusCode) -> Result<(), SendError> {
        if let WriterState::HeaderSent(sent) = self.state {
            error!(sent = sent.as_u16(), status = status.as_u16(), "response header already written");
            return Err(SendError::HeaderAlreadyWritten);
        }
        self.state = WriterState::HeaderSent(status);

        encode_status_line(&self.proto, status, &mut self.writer)?;
        self.header.write_to(&mut self.writer)?;
        trace!(status = status.as_u16(), header_count = self.header.len(), "wrote response header");
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for ResponseWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_then_body() {
        let mut writer = ResponseWriter::new(Vec::new());
        writer.header_mut().set("Content-Length", ["5"]);

        writer.write_header(StatusCode::OK).unwrap();
        writer.write_all(b"hello").unwrap();

        assert_eq!(writer.status(), Some(StatusCode::OK));
        assert_eq!(writer.into_inner(), b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello");
    }

    #[test]
    fn second_write_header_fails_without_io() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut writer = ResponseWriter::new(Vec::new());
        writer.write_header(StatusCode::NOT_FOUND).unwrap();
        let written = writer.get_ref().len();

        let result = writer.write_header(StatusCode::OK);

        assert!(matches!(result, Err(SendError::HeaderAlreadyWritten)));
        assert_eq!(writer.get_ref().len(), written);
        assert_eq!(writer.state(), WriterState::HeaderSent(StatusCode::NOT_FOUND));
    }

    #[test]
    fn body_write_does_not_send_head() {
        let mut writer = ResponseWriter::new(Vec::new());
        writer.write_all(b"raw").unwrap();

        assert_eq!(writer.state(), WriterState::HeaderPending);
        assert_eq!(writer.status(), None);
        assert_eq!(writer.get_ref(), b"raw");
    }

    #[test]
    fn custom_proto() {
        let mut writer = ResponseWriter::with_proto(Vec::new(), ProtoVersion::new("HTTP", 1, 0));
        writer.write_header(StatusCode::NO_CONTENT).unwrap();

        assert_eq!(writer.into_inner(), b"HTTP/1.0 204 No Content\r\n\r\n");
    }
}
