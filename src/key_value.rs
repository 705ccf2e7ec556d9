use crate::codec::QueryCodec;
use crate::compat::String;
use crate::error::{QueryError, Result};
use crate::helpers::split_key_value;

/// A single decoded `key=value` pair.
/// Immutable: changing the value produces a new pair via [`KeyValue::with_value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue {
    key: String,
    value: String,
}

impl KeyValue {
    /// Create a pair from already decoded text
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse one raw `key=value` or bare `key` segment.
    /// A bare key gets an empty value; only the first '=' separates key from value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySegment`] for an empty segment and
    /// whatever error the codec reports for either half. [`UriCodec`](crate::UriCodec)
    /// never fails to decode.
    pub fn try_from_segment<C: QueryCodec>(segment: &str, codec: &C) -> Result<Self> {
        if segment.is_empty() {
            return Err(QueryError::EmptySegment);
        }

        let (raw_key, raw_value) = split_key_value(segment);
        Ok(Self {
            key: codec.decode(raw_key)?.into_owned(),
            value: codec.decode(raw_value)?.into_owned(),
        })
    }

    /// Parse one raw segment, or `None` if it is malformed
    pub fn from_segment<C: QueryCodec>(segment: &str, codec: &C) -> Option<Self> {
        Self::try_from_segment(segment, codec).ok()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// A pair with the same key and a replaced value
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            key: self.key.clone(),
            value: value.into(),
        }
    }

    /// Attach a global index
    pub fn to_index(self, index: usize) -> KeyValueIndex {
        KeyValueIndex {
            key_value: self,
            index,
        }
    }

    /// Write `encode(key)=encode(value)` to buffer
    pub(crate) fn encode_into<C: QueryCodec>(&self, buffer: &mut String, codec: &C) {
        buffer.push_str(&codec.encode(&self.key));
        buffer.push('=');
        buffer.push_str(&codec.encode(&self.value));
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}

/// A [`KeyValue`] tagged with its global index: its position among all pairs of
/// the query string in parse order, continued by append order.
///
/// The relative index (position among pairs sharing the key) is not stored; it is
/// the position of this entry within its key's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValueIndex {
    key_value: KeyValue,
    index: usize,
}

impl KeyValueIndex {
    pub fn key_value(&self) -> &KeyValue {
        &self.key_value
    }

    pub fn key(&self) -> &str {
        self.key_value.key()
    }

    pub fn value(&self) -> &str {
        self.key_value.value()
    }

    /// Global index
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn replace_value(&mut self, value: String) {
        self.key_value = self.key_value.with_value(value);
    }
}
