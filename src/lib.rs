#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod codec;
mod error;
mod helpers;
mod key_value;
mod query_string;
mod query_string_helper;
mod types;

// Public API
pub use codec::{QueryCodec, UriCodec};
pub use error::QueryError;
pub use key_value::{KeyValue, KeyValueIndex};
pub use query_string::QueryString;
pub use query_string_helper::QueryStringHelper;
pub use types::{MalformedSegments, ParseOptions};

pub type Result<T> = core::result::Result<T, QueryError>;
