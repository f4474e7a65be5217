use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading a message head off the wire.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A request-line or status-line is missing a required space delimiter.
    #[error("wrong http header format")]
    WrongFormat,

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("invalid http method: {source}")]
    InvalidMethod {
        #[from]
        source: http::method::InvalidMethod,
    },

    #[error("invalid http uri: {source}")]
    InvalidUri {
        #[from]
        source: http::uri::InvalidUri,
    },

    #[error("invalid status code: {reason}")]
    InvalidStatusCode { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn invalid_status_code<S: ToString>(str: S) -> Self {
        Self::InvalidStatusCode { reason: str.to_string() }
    }
}

/// Errors raised while writing a message to the wire.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("http response header has been written")]
    HeaderAlreadyWritten,

    #[error("invalid content-length header: {source}")]
    InvalidContentLength {
        #[from]
        source: ParseIntError,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}
