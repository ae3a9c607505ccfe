// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-key property storage.

/// An ordered property map whose key set never changes.
///
/// A map is only ever built from a component kind's defaults table, so it
/// holds exactly the whitelisted names of that kind. Values move between set
/// (`Some`) and unset (`None`); keys are never inserted or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(&'static str, Option<String>)>,
}

impl PropertyMap {
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, Option<String>)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The value of `name`, or `None` if it is unset or not a key.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entry(name).and_then(|(_, v)| v.as_deref())
    }

    /// Whether `name` is a key holding a value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is a key of this map, set or not.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// All entries in serialization order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// Set entries only, in serialization order.
    pub fn iter_set(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
    }

    /// All keys in serialization order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assign `value` to an existing key. Returns `false`, leaving the map
    /// untouched, when `name` is not a key.
    pub(crate) fn assign(&mut self, name: &str, value: Option<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn entry(&self, name: &str) -> Option<&(&'static str, Option<String>)> {
        self.entries.iter().find(|(k, _)| *k == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyMap {
        PropertyMap::from_entries([("A", Some("1".to_owned())), ("B", None)])
    }

    #[test]
    fn property_map_get_and_is_set() {
        let map = sample();
        assert_eq!(map.get("A"), Some("1"));
        assert_eq!(map.get("B"), None);
        assert!(map.contains("B"));
        assert!(!map.is_set("B"));
        assert!(!map.contains("C"));
    }

    #[test]
    fn property_map_assign_never_adds_keys() {
        let mut map = sample();
        assert!(!map.assign("C", Some("3".to_owned())));
        assert_eq!(map.len(), 2);
        assert!(!map.contains("C"));

        assert!(map.assign("B", Some("2".to_owned())));
        assert_eq!(map.get("B"), Some("2"));

        assert!(map.assign("A", None));
        assert!(map.contains("A"));
        assert!(!map.is_set("A"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn property_map_iter_set_skips_unset() {
        let map = sample();
        let set: Vec<_> = map.iter_set().collect();
        assert_eq!(set, vec![("A", "1")]);
        let all: Vec<_> = map.iter().collect();
        assert_eq!(all, vec![("A", Some("1")), ("B", None)]);
    }
}
