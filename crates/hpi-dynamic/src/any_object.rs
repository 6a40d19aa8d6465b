// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic record store.

use crate::AnyValue;
use std::collections::HashMap;

/// A record whose field layout is only known at runtime.
///
/// Field names are unique; iteration order is unspecified. Each stored value
/// is owned by the record until it is overwritten or the record is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnyObject {
    fields: HashMap<String, AnyValue>,
}

impl AnyObject {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`.
    ///
    /// Returns the value previously stored under `key`; it is released when
    /// the caller drops it.
    pub fn insert(&mut self, key: impl Into<String>, value: AnyValue) -> Option<AnyValue> {
        let key = key.into();
        let previous = self.fields.insert(key, value);
        if let Some(old) = &previous {
            log::trace!("[anyobj] overwrote field of type {}", old.type_descriptor());
        }
        previous
    }

    /// Copy of the value stored under `key`, or `Nichts` if there is none.
    ///
    /// A missing key is not an error and nothing is removed.
    pub fn take(&self, key: &str) -> AnyValue {
        self.fields.get(key).cloned().unwrap_or_default()
    }

    /// Borrow the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AnyValue> {
        self.fields.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// All field names, as owned copies.
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, AnyValue)> for AnyObject {
    fn from_iter<I: IntoIterator<Item = (K, AnyValue)>>(iter: I) -> Self {
        let mut obj = Self::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}

impl IntoIterator for AnyObject {
    type Item = (String, AnyValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
