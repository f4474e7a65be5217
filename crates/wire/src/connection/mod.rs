//! Server side response writing
//!
//! # Components
//!
//! - [`ResponseWriter`]: wraps the outgoing stream and enforces that the response head is written
//!   before the body and at most once
//!   - [`WriterState::HeaderPending`] until [`ResponseWriter::write_header`] succeeds
//!   - [`WriterState::HeaderSent`] afterwards, further head writes fail with
//!     [`SendError::HeaderAlreadyWritten`](crate::protocol::SendError::HeaderAlreadyWritten)

mod response_writer;

pub use response_writer::ResponseWriter;
pub use response_writer::WriterState;
