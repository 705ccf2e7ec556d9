/// Split a raw query string into its `&`-separated segments, left to right.
/// Empty segments are kept so callers can account for their positions.
/// Optimization: Uses SIMD-accelerated memchr for fast '&' search
pub fn split_segments(input: &str) -> impl Iterator<Item = &str> {
    let mut start = 0;
    memchr::memchr_iter(b'&', input.as_bytes())
        .map(Some)
        .chain(core::iter::once(None))
        .map(move |end| {
            let end = end.unwrap_or(input.len());
            let segment = &input[start..end];
            start = end + 1;
            segment
        })
}

/// Split a segment at its first '='.
/// Returns (`raw_key`, `raw_value`); the value is empty when there is no '='.
pub fn split_key_value(segment: &str) -> (&str, &str) {
    memchr::memchr(b'=', segment.as_bytes()).map_or((segment, ""), |pos| {
        (&segment[..pos], &segment[pos + 1..])
    })
}
