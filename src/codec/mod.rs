mod percent_encode;

use percent_encode::{percent_decode_query_param, percent_encode_query_param};

use crate::compat::Cow;
use crate::error::Result;

/// Percent-encoding capability used to read and write query string components.
///
/// `decode` receives one raw key or value (never a whole `key=value` segment)
/// and `encode` receives the decoded text back when the query is reconstructed.
/// Implementations are expected to round-trip: `decode(encode(s)) == s`.
pub trait QueryCodec {
    /// Encode a decoded key or value for output
    fn encode<'a>(&self, input: &'a str) -> Cow<'a, str>;

    /// Decode a raw key or value taken from a query string
    fn decode<'a>(&self, input: &'a str) -> Result<Cow<'a, str>>;
}

impl<C: QueryCodec + ?Sized> QueryCodec for &C {
    fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (**self).encode(input)
    }

    fn decode<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
        (**self).decode(input)
    }
}

/// Default codec: RFC 3986 query parameter escaping, `%20` for spaces,
/// `+` accepted as a space on input. Decoding never fails: invalid UTF-8
/// is replaced with U+FFFD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriCodec;

impl QueryCodec for UriCodec {
    fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        percent_encode_query_param(input)
    }

    fn decode<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
        Ok(percent_decode_query_param(input))
    }
}
