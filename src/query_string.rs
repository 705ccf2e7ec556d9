use crate::checkers::parse_integer;
use crate::codec::{QueryCodec, UriCodec};
use crate::compat::{BTreeMap, String, ToString, Vec};
use crate::helpers::split_segments;
use crate::key_value::{KeyValue, KeyValueIndex};
use crate::types::ParseOptions;
use tracing::{debug, trace};

/// All entries sharing one key, ascending by global index
#[derive(Debug, Clone)]
struct KeyEntries {
    key: String,
    entries: Vec<KeyValueIndex>,
}

/// Resolve a caller-supplied relative index against a key with `len` entries
fn relative_position(relative_index: i64, len: usize) -> Option<usize> {
    usize::try_from(relative_index).ok().filter(|&i| i < len)
}

/// Ordered, indexed, multi-valued view of a query string.
///
/// Every pair carries a global index (its position among all pairs) and is filed
/// under its key; within a key, entries stay in ascending global-index order so the
/// `i`-th entry is the pair at relative index `i`. Removing pairs never renumbers the
/// survivors, and appended pairs continue from [`QueryString::next_overall_index`],
/// so reconstruction always emits surviving pairs in their original order followed
/// by appended pairs in append order.
///
/// Keys and values are held decoded and re-encoded by the codec on output.
#[derive(Debug, Clone)]
pub struct QueryString<C = UriCodec> {
    original: String,
    state: Vec<KeyEntries>,
    // key -> position in `state`
    lookup: BTreeMap<String, usize>,
    next_overall_index: usize,
    codec: C,
}

impl QueryString {
    /// Parse with the default [`UriCodec`]
    pub fn parse(raw: &str) -> Self {
        Self::of(Some(raw), UriCodec)
    }
}

impl<C: QueryCodec> QueryString<C> {
    /// Parse a raw query string (without leading `?`).
    /// `None` and `""` both produce an empty query string.
    pub fn of(raw: Option<&str>, codec: C) -> Self {
        Self::with_options(raw, codec, ParseOptions::default())
    }

    /// Parse a raw query string with explicit options.
    ///
    /// Segments that cannot be parsed (empty, or rejected by the codec) are skipped;
    /// `options` decides whether they still consume a global index.
    pub fn with_options(raw: Option<&str>, codec: C, options: ParseOptions) -> Self {
        let original = raw.unwrap_or_default();
        let mut query = Self {
            original: original.to_string(),
            state: Vec::new(),
            lookup: BTreeMap::new(),
            next_overall_index: 0,
            codec,
        };

        if original.is_empty() {
            return query;
        }

        for segment in split_segments(original) {
            match KeyValue::try_from_segment(segment, &query.codec) {
                Ok(key_value) => query.push(key_value),
                Err(error) => {
                    trace!(segment, %error, "skipping malformed query segment");
                    if options.consumes_index() {
                        query.next_overall_index += 1;
                    }
                }
            }
        }

        query
    }

    /// The raw input, with `None` normalized to `""`
    pub fn original_query_string(&self) -> &str {
        &self.original
    }

    /// One past the highest global index assigned so far
    pub fn next_overall_index(&self) -> usize {
        self.next_overall_index
    }

    /// Number of pairs currently held
    pub fn len(&self) -> usize {
        self.state.iter().map(|bucket| bucket.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Entries for a key in relative-index order
    pub fn get_indexed(&self, key: &str) -> Option<&[KeyValueIndex]> {
        self.position(key)
            .map(|position| self.state[position].entries.as_slice())
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_indexed(key)
            .and_then(|entries| entries.first())
            .map(KeyValueIndex::value)
    }

    /// Get all values for a key in relative-index order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.get_indexed(key)
            .map(|entries| entries.iter().map(KeyValueIndex::value).collect())
            .unwrap_or_default()
    }

    /// Keys in order of first appearance
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.iter().map(|bucket| bucket.key.as_str())
    }

    /// Key to entries mapping, keys in order of first appearance
    pub fn state(&self) -> impl Iterator<Item = (&str, &[KeyValueIndex])> {
        self.state
            .iter()
            .map(|bucket| (bucket.key.as_str(), bucket.entries.as_slice()))
    }

    /// All entries in global-index order
    pub fn iter(&self) -> impl Iterator<Item = &KeyValueIndex> {
        self.sorted_entries().into_iter()
    }

    /// Delete every entry for a key. Returns the number of entries removed.
    pub fn remove_all(&mut self, key: &str) -> usize {
        let Some(position) = self.position(key) else {
            trace!(key, "no entries to remove");
            return 0;
        };
        let removed = self.state.remove(position).entries.len();
        self.reindex();
        removed
    }

    /// Delete the entries of a key at the given relative indexes.
    ///
    /// Indexes refer to the key's entries as they are before this call, so
    /// `[0, 1]` and `[1, 0]` both remove the first two occurrences. Negative and
    /// out-of-bounds indexes are ignored. Returns the number of entries removed.
    pub fn remove_nth(&mut self, key: &str, relative_indexes: &[i64]) -> usize {
        let targets = self.resolve(key, relative_indexes);
        self.remove_global(targets)
    }

    /// Delete entries for several keys at once.
    ///
    /// Every relative index is resolved against the state before any entry is
    /// removed, so a key listed more than once still refers to its original
    /// occurrences. Returns the number of entries removed.
    pub fn remove_nth_many<I, K, R>(&mut self, instructions: I) -> usize
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: AsRef<[i64]>,
    {
        let mut targets = Vec::new();
        for (key, relative_indexes) in instructions {
            targets.extend(self.resolve(key.as_ref(), relative_indexes.as_ref()));
        }
        self.remove_global(targets)
    }

    /// Append a pair after every existing pair
    pub fn append(&mut self, key: &str, value: &str) {
        self.push(KeyValue::new(key, value));
    }

    /// Add `delta` to the integer values of a key at the given relative indexes.
    ///
    /// Values that are not base-10 integer literals, and sums that overflow, are
    /// left untouched. Out-of-bounds indexes are ignored. Returns the number of
    /// values changed.
    pub fn adjust_numeric(&mut self, key: &str, relative_indexes: &[i64], delta: i64) -> usize {
        let Some(position) = self.position(key) else {
            trace!(key, "no entries to adjust");
            return 0;
        };

        let entries = &mut self.state[position].entries;
        let mut adjusted = 0;
        for &relative_index in relative_indexes {
            let Some(i) = relative_position(relative_index, entries.len()) else {
                trace!(key, relative_index, "ignoring out of bounds relative index");
                continue;
            };

            let entry = &mut entries[i];
            let Some(current) = parse_integer(entry.value()) else {
                trace!(key, relative_index, value = entry.value(), "skipping non-numeric value");
                continue;
            };
            let Some(next) = current.checked_add(delta) else {
                debug!(key, relative_index, current, delta, "skipping overflowing adjustment");
                continue;
            };

            entry.replace_value(next.to_string());
            adjusted += 1;
        }
        adjusted
    }

    /// Serialize the current state as `key=value` pairs joined by `&`, in
    /// global-index order, with keys and values encoded by the codec.
    /// An empty state yields `""`.
    pub fn reconstruct_query_string(&self) -> String {
        let mut result = String::with_capacity(self.original.len());
        for (i, entry) in self.sorted_entries().into_iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            entry.key_value().encode_into(&mut result, &self.codec);
        }
        result
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.lookup.get(key).copied()
    }

    fn reindex(&mut self) {
        self.lookup = self
            .state
            .iter()
            .enumerate()
            .map(|(position, bucket)| (bucket.key.clone(), position))
            .collect();
    }

    /// Global indexes of a key's entries at the given relative indexes
    fn resolve(&self, key: &str, relative_indexes: &[i64]) -> Vec<usize> {
        let Some(entries) = self.get_indexed(key) else {
            trace!(key, "no entries to remove");
            return Vec::new();
        };

        relative_indexes
            .iter()
            .filter_map(|&relative_index| {
                let found = relative_position(relative_index, entries.len());
                if found.is_none() {
                    trace!(
                        key,
                        relative_index,
                        len = entries.len(),
                        "ignoring out of bounds relative index"
                    );
                }
                found
            })
            .map(|i| entries[i].index())
            .collect()
    }

    /// Drop every entry whose global index is in `targets`, then any emptied key
    fn remove_global(&mut self, mut targets: Vec<usize>) -> usize {
        if targets.is_empty() {
            return 0;
        }
        targets.sort_unstable();
        targets.dedup();

        let before = self.len();
        for bucket in &mut self.state {
            bucket
                .entries
                .retain(|entry| targets.binary_search(&entry.index()).is_err());
        }
        self.state.retain(|bucket| !bucket.entries.is_empty());
        self.reindex();
        before - self.len()
    }

    fn sorted_entries(&self) -> Vec<&KeyValueIndex> {
        let mut entries: Vec<&KeyValueIndex> = self
            .state
            .iter()
            .flat_map(|bucket| bucket.entries.iter())
            .collect();
        entries.sort_unstable_by_key(|entry| entry.index());
        entries
    }

    fn push(&mut self, key_value: KeyValue) {
        let entry = key_value.to_index(self.next_overall_index);
        self.next_overall_index += 1;

        match self.position(entry.key()) {
            Some(position) => self.state[position].entries.push(entry),
            None => {
                self.lookup.insert(entry.key().to_string(), self.state.len());
                self.state.push(KeyEntries {
                    key: entry.key().to_string(),
                    entries: Vec::from([entry]),
                });
            }
        }
    }
}

impl<C: QueryCodec> core::fmt::Display for QueryString<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.reconstruct_query_string())
    }
}

impl From<&str> for QueryString {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
