//! Resolved style output.

use std::fmt;

/// An ordered, de-duplicated set of presentation tokens (CSS classes).
///
/// Produced by the resolver and owned by whoever asked for it. The first
/// occurrence of a token fixes its position; later duplicates are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    tokens: Vec<String>,
}

impl StyleDescriptor {
    /// Build a descriptor from whitespace-separated class groups.
    pub fn from_groups<'a>(groups: impl IntoIterator<Item = &'a str>) -> Self {
        let mut descriptor = Self::default();
        for group in groups {
            descriptor.push_group(group);
        }
        descriptor
    }

    pub(crate) fn push_group(&mut self, group: &str) {
        for token in group.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    /// Return a new descriptor with caller-supplied classes appended.
    ///
    /// Conflicting utilities are not merged; both stay in the list.
    pub fn with_extra(mut self, extra: &str) -> Self {
        self.push_group(extra);
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-joined class attribute value.
    pub fn class(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_position() {
        let d = StyleDescriptor::from_groups(["a b c", "b d", "a"]);
        assert_eq!(d.class(), "a b c d");
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn with_extra_appends_without_merging() {
        let d = StyleDescriptor::from_groups(["h-10 px-4"]).with_extra("h-12  w-full");
        assert_eq!(d.to_string(), "h-10 px-4 h-12 w-full");
    }

    #[test]
    fn empty_groups_produce_empty_descriptor() {
        let d = StyleDescriptor::from_groups(["", "   "]);
        assert!(d.is_empty());
        assert_eq!(d.class(), "");
    }

    #[test]
    fn tokens_iterate_from_either_end() {
        let d = StyleDescriptor::from_groups(["a b", "c"]);
        let last: Vec<&str> = d.tokens().rev().take(2).collect();
        assert_eq!(last, vec!["c", "b"]);
    }
}
