//! Id-keyed lookups built from record lists, and the way back.

use std::collections::HashMap;

/// A record that can be looked up by a string id.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Insertion-ordered mapping from id to record.
///
/// Iteration follows insertion order: records loaded from a list keep their
/// list order, removals close the gap, and new records are appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T> {
    order: Vec<String>,
    records: HashMap<String, T>,
}

impl<T> Default for Lookup<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<T: Keyed> Lookup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lookup from a list of records.
    ///
    /// A repeated id replaces the earlier record but keeps its position.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut lookup = Self::new();
        for record in records {
            lookup.insert(record);
        }
        lookup
    }

    /// Insert a record under its own id, returning the record it replaced.
    pub fn insert(&mut self, record: T) -> Option<T> {
        let key = record.key().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Convert back into a list, in iteration order.
    pub fn into_records(self) -> Vec<T> {
        let Self { order, mut records } = self;
        order
            .into_iter()
            .filter_map(|key| records.remove(&key))
            .collect()
    }
}

impl<T> Lookup<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.records.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
