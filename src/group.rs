use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};

/// An unordered set of key/value pairs, either the default group of a document or one of its
/// sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pairs: HashMap<String, String>,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    /// Insert the pair unless `key` is already present. Returns `false` when the existing value
    /// was kept.
    pub(crate) fn insert_if_absent(&mut self, key: String, value: String) -> bool {
        match self.pairs.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

/// Iterator over the pairs of a [`Group`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collecting keeps the first value seen for a key, the same as parsing does.
impl<K, V> FromIterator<(K, V)> for Group
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut group = Self::new();
        for (key, value) in iter {
            group.insert_if_absent(key.into(), value.into());
        }
        group
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Group
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_insert_wins() {
        let mut group = Group::new();

        assert!(group.insert_if_absent("a".to_owned(), "1".to_owned()));
        assert!(!group.insert_if_absent("a".to_owned(), "2".to_owned()));

        assert_eq!(group.get("a"), Some("1"));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn collect_matches_parse_policy() {
        let group: Group = [("k", "first"), ("k", "second"), ("j", "other")].into();

        assert_eq!(group.get("k"), Some("first"));
        assert_eq!(group.get("j"), Some("other"));
        assert!(!group.contains_key("missing"));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Group = [("x", "1"), ("y", "2")].into();
        let b: Group = [("y", "2"), ("x", "1")].into();

        assert_eq!(a, b);
    }

    #[test]
    fn iter_yields_every_pair() {
        let group: Group = [("x", "1"), ("y", "2")].into();
        let mut pairs = group.iter().collect::<Vec<_>>();
        pairs.sort_unstable();

        assert_eq!(pairs, vec![("x", "1"), ("y", "2")]);
        assert_eq!(group.keys().count(), 2);
    }
}
