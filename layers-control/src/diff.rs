//! Keyed-mapping diffing utility.
//!
//! [`KeyedDiffer`] remembers the last mapping it was shown and reports what
//! changed since then as a [`Changeset`]. It is a standalone primitive: no
//! global registry, no shared state, one differ per mapping. The directive
//! keeps one differ for base layers and one for overlays so that the two
//! change histories never mix.

use std::collections::HashMap;
use std::hash::Hash;

use crate::layer::LayerHandle;

/// A map keyed by display name, hashed with the crate-wide hasher.
pub type KeyedMap<K, V> = HashMap<K, V, ahash::RandomState>;

/// What happened to a single key between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The key is new in the current snapshot.
    Added,
    /// The key was present previously and is gone now.
    Removed,
    /// The key is present in both snapshots but maps to a different handle.
    Changed,
}

/// A single per-key change between two snapshots of a mapping.
#[derive(Debug, Clone)]
pub struct ChangeRecord<K, V> {
    /// The mapping key the change applies to.
    pub key: K,
    /// How the key changed.
    pub kind: ChangeKind,
    /// The value the key had in the previous snapshot, if any.
    pub previous: Option<V>,
    /// The value the key has in the current snapshot, if any.
    pub current: Option<V>,
}

/// The set of changes between two successive snapshots of a mapping.
///
/// Produced fresh by every [`KeyedDiffer::diff`] call and meant to be
/// consumed immediately. The order of records is implementation defined.
#[derive(Debug, Clone)]
pub struct Changeset<K, V> {
    records: Vec<ChangeRecord<K, V>>,
}

impl<K, V> Changeset<K, V> {
    /// True if nothing changed between the two snapshots.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of change records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates over the change records.
    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord<K, V>> {
        self.records.iter()
    }

    /// The change records as a slice.
    pub fn records(&self) -> &[ChangeRecord<K, V>] {
        &self.records
    }
}

impl<'a, K, V> IntoIterator for &'a Changeset<K, V> {
    type Item = &'a ChangeRecord<K, V>;
    type IntoIter = std::slice::Iter<'a, ChangeRecord<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<K, V> IntoIterator for Changeset<K, V> {
    type Item = ChangeRecord<K, V>;
    type IntoIter = std::vec::IntoIter<ChangeRecord<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// A stateful comparator for successive snapshots of a keyed mapping.
///
/// The first call to [`diff`](KeyedDiffer::diff) compares against an empty
/// snapshot, so every key of the first mapping comes back as
/// [`ChangeKind::Added`]. Diffing the same mapping twice in a row yields an
/// empty changeset.
pub struct KeyedDiffer<K, V> {
    previous: KeyedMap<K, V>,
}

impl<K, V> Default for KeyedDiffer<K, V> {
    fn default() -> Self {
        Self {
            previous: KeyedMap::default(),
        }
    }
}

impl<K, V> KeyedDiffer<K, V>
where
    K: Eq + Hash + Clone,
    V: LayerHandle,
{
    /// Creates a differ with an empty previous snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` against the previously seen snapshot and retains
    /// a copy of `current` for the next call.
    pub fn diff(&mut self, current: &KeyedMap<K, V>) -> Changeset<K, V> {
        let mut records = Vec::new();

        for (key, value) in current {
            match self.previous.get(key) {
                None => records.push(ChangeRecord {
                    key: key.clone(),
                    kind: ChangeKind::Added,
                    previous: None,
                    current: Some(value.clone()),
                }),
                Some(old) if !old.same_handle(value) => records.push(ChangeRecord {
                    key: key.clone(),
                    kind: ChangeKind::Changed,
                    previous: Some(old.clone()),
                    current: Some(value.clone()),
                }),
                Some(_) => {}
            }
        }

        for (key, value) in &self.previous {
            if !current.contains_key(key) {
                records.push(ChangeRecord {
                    key: key.clone(),
                    kind: ChangeKind::Removed,
                    previous: Some(value.clone()),
                    current: None,
                });
            }
        }

        self.previous = current.clone();

        Changeset { records }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    type Layer = Arc<&'static str>;

    fn map(entries: &[(&str, &Layer)]) -> KeyedMap<String, Layer> {
        entries
            .iter()
            .map(|(name, layer)| (name.to_string(), Arc::clone(layer)))
            .collect()
    }

    #[test]
    fn first_diff_reports_everything_as_added() {
        let osm = Arc::new("osm");
        let satellite = Arc::new("satellite");
        let mut differ = KeyedDiffer::new();

        let changes = differ.diff(&map(&[("osm", &osm), ("satellite", &satellite)]));

        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|rec| rec.kind == ChangeKind::Added));
        assert!(changes.iter().all(|rec| rec.previous.is_none()));
    }

    #[test]
    fn repeated_diff_of_same_mapping_is_empty() {
        let osm = Arc::new("osm");
        let mut differ = KeyedDiffer::new();
        let mapping = map(&[("osm", &osm)]);

        assert_eq!(differ.diff(&mapping).len(), 1);
        assert!(differ.diff(&mapping).is_empty());
    }

    #[test]
    fn missing_key_is_reported_as_removed_with_its_old_value() {
        let osm: Layer = Arc::new("osm");
        let mut differ = KeyedDiffer::new();

        differ.diff(&map(&[("osm", &osm)]));
        let changes = differ.diff(&KeyedMap::default());

        assert_eq!(changes.len(), 1);
        let record = &changes.records()[0];
        assert_eq!(record.kind, ChangeKind::Removed);
        assert_eq!(record.key, "osm");
        assert!(record.previous.as_ref().is_some_and(|old| old.same_handle(&osm)));
        assert!(record.current.is_none());
    }

    #[test]
    fn new_handle_under_existing_key_is_reported_as_changed() {
        let old: Layer = Arc::new("osm");
        let new: Layer = Arc::new("osm");
        let mut differ = KeyedDiffer::new();

        differ.diff(&map(&[("base", &old)]));
        let changes = differ.diff(&map(&[("base", &new)]));

        assert_eq!(changes.len(), 1);
        let record = &changes.records()[0];
        assert_eq!(record.kind, ChangeKind::Changed);
        assert!(record.previous.as_ref().is_some_and(|v| v.same_handle(&old)));
        assert!(record.current.as_ref().is_some_and(|v| v.same_handle(&new)));
    }

    #[test]
    fn same_handle_under_same_key_emits_nothing() {
        let osm: Layer = Arc::new("osm");
        let mut differ = KeyedDiffer::new();

        differ.diff(&map(&[("base", &osm)]));
        // New map instance, same handle inside.
        let changes = differ.diff(&map(&[("base", &osm)]));

        assert!(changes.is_empty());
    }

    #[test]
    fn differs_do_not_observe_each_other() {
        let osm: Layer = Arc::new("osm");
        let mut base = KeyedDiffer::new();
        let mut overlays = KeyedDiffer::new();

        base.diff(&map(&[("osm", &osm)]));

        // The overlays differ has never seen "osm"; it must still report it
        // as added even though the base differ already has.
        let changes = overlays.diff(&map(&[("osm", &osm)]));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.records()[0].kind, ChangeKind::Added);
    }
}
