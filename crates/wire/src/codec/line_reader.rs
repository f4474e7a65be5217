//! Line oriented reader over a blocking byte stream.
//!
//! The reader looks ahead exactly one byte at a time, so once the head of a message has been
//! consumed the wrapped stream is positioned at the first body byte. Nothing is buffered past a
//! line terminator, which is what allows [`LineReader::into_inner`] to hand the stream over as the
//! message body.

use std::io;
use std::io::{ErrorKind, Read};

use bytes::{BufMut, Bytes, BytesMut};

/// Initial capacity of the line buffer, it grows as needed for longer lines
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// A [`Read`] wrapper exposing [`read_line`](LineReader::read_line) next to plain reads.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line: BytesMut,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_LINE_CAPACITY)
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self { reader, line: BytesMut::with_capacity(capacity) }
    }

    /// Reads one line and returns it without its `\n` or `\r\n` terminator.
    ///
    /// No other whitespace is trimmed. If the stream fails or ends before a `\n` is seen the
    /// bytes collected so far are dropped and the error is returned; end of stream is reported as
    /// [`ErrorKind::UnexpectedEof`].
    pub fn read_line(&mut self) -> io::Result<Bytes> {
        self.line.clear();
        let mut byte = [0u8; 1];

        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.line.clear();
                    return Err(ErrorKind::UnexpectedEof.into());
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.line.clear();
                    return Err(e);
                }
            }

            if byte[0] == b'\n' {
                if self.line.last() == Some(&b'\r') {
                    self.line.truncate(self.line.len() - 1);
                }
                return Ok(self.line.split().freeze());
            }

            self.line.put_u8(byte[0]);
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Returns the wrapped stream, positioned right after the last line read.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Read for LineReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}
