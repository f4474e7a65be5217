//! Request-line and status-line codec
//!
//! - [`decode_request_line`] / [`encode_request_line`]: `<METHOD> <target> <proto>`
//! - [`decode_status_line`] / [`encode_status_line`]: `<proto> <code> <reason>`

mod request_line;
mod status_line;

pub use request_line::{decode_request_line, encode_request_line};
pub use status_line::{decode_status_line, encode_status_line};
