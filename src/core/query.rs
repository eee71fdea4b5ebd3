//! Request parameters and offset window utilities
//!
//! Pagination is advisory: malformed offsets are ignored rather than
//! rejected, and windows that select nothing produce an empty result.

use std::collections::HashMap;

/// Query parameter carrying the first position to include
pub const OFFSET_START: &str = "rexster.offset.start";

/// Query parameter carrying the first position to exclude
pub const OFFSET_END: &str = "rexster.offset.end";

/// Raw request parameters as delivered by the transport
///
/// Keys may repeat; only the first value of a key is honored.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_edges(
///     Query(pairs): Query<Vec<(String, String)>>,
/// ) -> ... {
///     let params = RequestParams::from_pairs(pairs);
///     let window = OffsetWindow::from_params(&params);
/// }
///
/// // Usage:
/// GET /graphs/g/edges?rexster.offset.start=10&rexster.offset.end=20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: HashMap<String, Vec<String>>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded key/value pairs, keeping value order per key
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.insert(key, value);
        }
        params
    }

    /// Append a value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// First value supplied for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Parse a non-negative offset, returning `None` for anything else
pub fn parse_offset(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Half-open `[start, end)` slice over a collection's iteration order
///
/// `end == None` means the window is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetWindow {
    pub start: usize,
    pub end: Option<usize>,
}

impl OffsetWindow {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Resolve the window requested by `params`, if any
    ///
    /// Returns `None` when neither bound parses, in which case the caller
    /// returns the whole collection. No check is made against the size of the
    /// collection.
    pub fn from_params(params: &RequestParams) -> Option<Self> {
        let start = Self::bound(params, OFFSET_START);
        let end = Self::bound(params, OFFSET_END);

        if start.is_none() && end.is_none() {
            return None;
        }

        Some(Self {
            start: start.unwrap_or(0),
            end,
        })
    }

    fn bound(params: &RequestParams, key: &str) -> Option<usize> {
        let raw = params.first(key)?;
        let parsed = parse_offset(raw);
        if parsed.is_none() {
            tracing::debug!(key, value = raw, "ignoring malformed offset");
        }
        parsed
    }

    /// Whether the window can never select an element
    pub fn is_empty(&self) -> bool {
        self.end.is_some_and(|end| end <= self.start)
    }

    /// Maximum number of elements the window can select
    pub fn limit(&self) -> Option<usize> {
        self.end.map(|end| end.saturating_sub(self.start))
    }

    /// Restrict `iter` to the window
    ///
    /// The underlying iterator is not advanced past `end`.
    pub fn apply<I>(self, iter: I) -> impl Iterator<Item = I::Item>
    where
        I: Iterator,
    {
        let limit = self.limit().unwrap_or(usize::MAX);
        iter.skip(self.start).take(limit)
    }
}
