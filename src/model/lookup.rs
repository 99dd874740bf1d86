use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::Slug;

/// Two-level table keyed by crop, then by location, carrying the record that
/// answers for every pair the table does not contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTable<T> {
    pub default: T,
    #[serde(default = "HashMap::new")]
    pub table: HashMap<Slug, HashMap<Slug, T>>,
}

impl<T> LookupTable<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            table: HashMap::new(),
        }
    }

    pub fn insert(&mut self, crop: impl Into<Slug>, location: impl Into<Slug>, record: T) {
        self.table
            .entry(crop.into())
            .or_default()
            .insert(location.into(), record);
    }

    /// Exact match only.
    pub fn get_exact(&self, crop: &str, location: &str) -> Option<&T> {
        self.table.get(crop)?.get(location)
    }

    pub fn contains(&self, crop: &str, location: &str) -> bool {
        self.get_exact(crop, location).is_some()
    }

    /// Total lookup: a missing crop or a missing location both yield the default.
    pub fn get(&self, crop: &str, location: &str) -> &T {
        self.get_exact(crop, location).unwrap_or(&self.default)
    }

    /// Every (crop, location, record) entry, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &T)> {
        self.table.iter().flat_map(|(crop, locations)| {
            locations
                .iter()
                .map(move |(location, record)| (crop.as_str(), location.as_str(), record))
        })
    }

    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
