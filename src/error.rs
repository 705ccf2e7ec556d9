/// Reasons a query string segment cannot become a key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Segment between two `&` separators is empty
    EmptySegment,
    /// The codec rejected a raw key or value
    InvalidPercentEncoding,
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptySegment => "Empty query segment",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {}

/// Result type for query string decoding
pub type Result<T> = core::result::Result<T, QueryError>;
