//! Ordered, multi-valued link attributes.
//!
//! Link attributes keep call order and allow the same name more than once
//! (two `hreflang` entries, two `param1` entries), both of which are visible in
//! the rendered header. A map would lose either property, so this is a plain
//! sequence of pairs.

/// Registered attribute names (RFC 5988 section 5.3 - 5.4).
pub const TITLE: &str = "title";
pub const TITLE_STAR: &str = "title*";
pub const ANCHOR: &str = "anchor";
pub const TYPE: &str = "type";
pub const MEDIA: &str = "media";
pub const HREFLANG: &str = "hreflang";

/// Insertion-ordered list of `(name, value)` link attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkParams {
    entries: Vec<(String, String)>,
}

impl LinkParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. Existing entries with the same name are kept.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value recorded under `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value recorded under `name`, in call order.
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_call_order_and_repeats() {
        let mut params = LinkParams::new();
        params.push("param1", "foo");
        params.push("param2", "baz");
        params.push("param1", "bar");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("param1", "foo"), ("param2", "baz"), ("param1", "bar")]
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn first_and_all_lookups() {
        let mut params = LinkParams::new();
        params.push(HREFLANG, "en-us");
        params.push(TITLE, "t");
        params.push(HREFLANG, "de");

        assert_eq!(params.first(HREFLANG), Some("en-us"));
        assert_eq!(params.all(HREFLANG), vec!["en-us", "de"]);
        assert_eq!(params.first(ANCHOR), None);
        assert!(params.all(ANCHOR).is_empty());
    }

    #[test]
    fn empty_by_default() {
        let params = LinkParams::default();
        assert!(params.is_empty());
        assert_eq!(params.iter().count(), 0);
    }
}
