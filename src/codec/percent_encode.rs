use crate::compat::Cow;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query parameter percent-encode set
/// Everything except ALPHA / DIGIT / pchar sub-delims, `/` and `?`.
/// `=`, `&`, `+` and `#` are always encoded.
/// Space is encoded as `%20`, never `+`.
pub const QUERY_PARAM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Percent-encode a key or value for a query string (zero-copy if no encoding needed)
pub fn percent_encode_query_param(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, QUERY_PARAM_SET).into()
}

/// Decode a percent-encoded key or value.
/// `+` is read as a space; `%2B` stays a literal plus.
/// Malformed escapes such as `%G1` are kept verbatim, and invalid UTF-8
/// sequences become U+FFFD.
pub fn percent_decode_query_param(input: &str) -> Cow<'_, str> {
    // Fast path: nothing to rewrite before unescaping
    if memchr::memchr(b'+', input.as_bytes()).is_none() {
        return percent_decode(input);
    }

    let spaced = input.replace('+', " ");
    Cow::Owned(percent_decode(&spaced).into_owned())
}

fn percent_decode(input: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(input).decode_utf8_lossy()
}
