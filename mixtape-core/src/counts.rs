use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::action::ActionKind;

/// Tally of applied actions, by kind, in the order each kind was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationCounts {
    entries: Vec<(ActionKind, usize)>,
}

impl OperationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: ActionKind) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((kind, 1)),
        }
    }

    pub fn get(&self, kind: ActionKind) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionKind, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<ActionKind> for OperationCounts {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        let mut counts = Self::new();
        for kind in iter {
            counts.record(kind);
        }
        counts
    }
}

impl Serialize for OperationCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, count) in &self.entries {
            map.serialize_entry(kind.as_str(), count)?;
        }
        map.end()
    }
}
