//! Head encoder for [`tokio_util::codec::FramedWrite`].
//!
//! Serializes a first line plus header section into the write buffer, byte for byte what the
//! blocking writers produce. Bodies are written by the caller.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

use crate::protocol::{Header, RequestLine, SendError, StatusLine};

/// Initial buffer size reserved for a head
const INIT_HEAD_SIZE: usize = 4 * 1024;

/// Encodes `(StatusLine, Header)` and `(RequestLine, Header)` items.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadEncoder;

impl Encoder<(StatusLine, Header)> for HeadEncoder {
    type Error = SendError;

    fn encode(&mut self, item: (StatusLine, Header), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (line, header) = item;

        dst.reserve(INIT_HEAD_SIZE);
        let mut writer = dst.writer();
        line.write_to(&mut writer)?;
        header.write_to(&mut writer)?;
        Ok(())
    }
}

impl Encoder<(RequestLine, Header)> for HeadEncoder {
    type Error = SendError;

    fn encode(&mut self, item: (RequestLine, Header), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (line, header) = item;

        dst.reserve(INIT_HEAD_SIZE);
        let mut writer = dst.writer();
        line.write_to(&mut writer)?;
        header.write_to(&mut writer)?;
        Ok(())
    }
}
