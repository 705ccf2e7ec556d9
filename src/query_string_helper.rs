use crate::codec::{QueryCodec, UriCodec};
use crate::compat::{String, ToString};
use crate::query_string::QueryString;
use crate::types::ParseOptions;

/// Stateless query string operations for templates.
///
/// Every operation parses the raw query into a fresh [`QueryString`], applies its
/// removals or adjustments, appends new pairs and reconstructs the result. None of
/// them fail: absent queries, missing keys, out-of-bounds indexes and non-numeric
/// values are tolerated and simply have no effect.
///
/// # Examples
///
/// ```
/// use qsh::QueryStringHelper;
///
/// let qs = QueryStringHelper::new();
/// let query = "key4=ValueA&key2=ValueB&key3=ValueC&key4=ValueX&key4=ValueY";
///
/// assert_eq!(
///     qs.remove_all_and_add(Some(query), ["key4"], [("keyNew", "New Value")]),
///     "key2=ValueB&key3=ValueC&keyNew=New%20Value"
/// );
/// assert_eq!(qs.adjust_first_numeric_value_by(Some("key8=100"), "key8", 5), "key8=105");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStringHelper<C = UriCodec> {
    codec: C,
    options: ParseOptions,
}

impl QueryStringHelper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: QueryCodec> QueryStringHelper<C> {
    /// Use a custom percent-encoding capability
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            options: ParseOptions::default(),
        }
    }

    /// Replace the parse options used for every operation
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Remove every occurrence of each key in `remove_keys`, then append
    /// `add_pairs` in order after all surviving pairs.
    ///
    /// Missing and duplicate keys are harmless. Returns `""` when nothing remains.
    pub fn remove_all_and_add<R, K, V>(
        &self,
        query: Option<&str>,
        remove_keys: R,
        add_pairs: impl IntoIterator<Item = (K, V)>,
    ) -> String
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut qs = self.parse(query);
        for key in remove_keys {
            qs.remove_all(key.as_ref());
        }
        append_all(&mut qs, add_pairs);
        qs.reconstruct_query_string()
    }

    /// Remove specific occurrences of keys by relative index, then append
    /// `add_pairs` in order after all surviving pairs.
    ///
    /// `remove_instructions` maps a key to the relative indexes of the occurrences
    /// to remove. Indexes refer to the occurrences present in `query`, independent
    /// of their order in the list, even when a key is listed more than once;
    /// negative or out-of-bounds indexes are ignored.
    /// Returns `""` when nothing remains.
    pub fn remove_nth_and_add<R, RK, I, K, V>(
        &self,
        query: Option<&str>,
        remove_instructions: R,
        add_pairs: impl IntoIterator<Item = (K, V)>,
    ) -> String
    where
        R: IntoIterator<Item = (RK, I)>,
        RK: AsRef<str>,
        I: AsRef<[i64]>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut qs = self.parse(query);
        qs.remove_nth_many(remove_instructions);
        append_all(&mut qs, add_pairs);
        qs.reconstruct_query_string()
    }

    /// Add `delta` to the integer values of `key` at the given relative indexes.
    ///
    /// Returns `""` for an absent or empty query, and the query unchanged when the
    /// key is missing or `delta` is zero. Non-numeric values and out-of-bounds
    /// indexes are skipped.
    pub fn adjust_numeric_value_by(
        &self,
        query: Option<&str>,
        key: &str,
        relative_indexes: &[i64],
        delta: i64,
    ) -> String {
        let mut qs = self.parse(query);
        if qs.original_query_string().is_empty() {
            return String::new();
        }
        if delta == 0 || !qs.contains_key(key) {
            return qs.original_query_string().to_string();
        }

        qs.adjust_numeric(key, relative_indexes, delta);
        qs.reconstruct_query_string()
    }

    /// Add `delta` to the first occurrence of `key` only, under the same rules as
    /// [`QueryStringHelper::adjust_numeric_value_by`].
    pub fn adjust_first_numeric_value_by(&self, query: Option<&str>, key: &str, delta: i64) -> String {
        self.adjust_numeric_value_by(query, key, &[0], delta)
    }

    fn parse(&self, query: Option<&str>) -> QueryString<&C> {
        QueryString::with_options(query, &self.codec, self.options)
    }
}

fn append_all<C, K, V>(qs: &mut QueryString<C>, pairs: impl IntoIterator<Item = (K, V)>)
where
    C: QueryCodec,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in pairs {
        qs.append(key.as_ref(), value.as_ref());
    }
}
