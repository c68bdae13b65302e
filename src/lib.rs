#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod headers;
mod helpers;
mod host_port;
mod marshal;
mod parser;
mod scheme;
mod uri;
mod uri_base;

// Public API
pub use error::UriError;
pub use headers::HeaderMap;
pub use host_port::HostPort;
pub use marshal::{
    ServerParams, marshal_host_and_port, marshal_request_uri, marshal_uri_from_server,
};
pub use parser::parse_uri;
pub use scheme::Scheme;
pub use uri::Uri;
pub use uri_base::{UriBase, from_base};

pub type Result<T> = core::result::Result<T, UriError>;
