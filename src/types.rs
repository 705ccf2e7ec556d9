/// How a segment that cannot be parsed affects the global indexes of the segments after it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedSegments {
    /// The skipped segment still occupies its slot, so global indexes
    /// match the literal positions of the `&`-separated segments.
    #[default]
    ConsumeIndex,
    /// The skipped segment is dropped entirely; global indexes are dense
    /// over the well-formed pairs.
    SkipIndex,
}

/// Options controlling how a raw query string is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub malformed_segments: MalformedSegments,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for malformed segments
    #[must_use]
    pub fn malformed_segments(mut self, policy: MalformedSegments) -> Self {
        self.malformed_segments = policy;
        self
    }

    /// Whether a skipped segment occupies a global index slot
    pub(crate) fn consumes_index(self) -> bool {
        self.malformed_segments == MalformedSegments::ConsumeIndex
    }
}
