//! Free-text search filter.
//!
//! The filter is always bound as a query parameter. LIKE wildcards in the
//! user's text are escaped so `50%` matches the literal characters.

/// Case-insensitive "contains" filter over the searchable columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// The text is kept verbatim; only an empty query matches every row.
    pub fn new(text: &str) -> Self {
        Self(text.to_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `%text%` with `\`, `%` and `_` escaped for `ILIKE` (default escape `\`).
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}
