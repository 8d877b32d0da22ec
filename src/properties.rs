//! The property table.

use std::{
    collections::{hash_map, HashMap},
    io::{self, Read, Write},
};

use crate::{
    config::Settings,
    error::LoadError,
    parser::{load_from, LoadSummary, PropertySink},
    serializer::{encode_entry, ordered_entries, store_to},
};

/// Mapping of unique string keys to string values.
///
/// Every value is an opaque string; iteration order is unspecified. The
/// table carries the [`Settings`] used by [`load`](Properties::load) and
/// [`store`](Properties::store); two tables compare equal when they hold the
/// same entries, whatever their settings.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: HashMap<String, String>,
    settings: Settings,
}

impl Properties {
    /// Creates an empty table with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            values: HashMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Inserts or replaces the value for `key`.
    ///
    /// The key is not validated; an empty key is stored as is but cannot be
    /// loaded back from text.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.values.insert(key.into(), value.into());
    }

    /// Current value for `key`, `None` if it was never set or loaded.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Current value for `key`, or `default` when absent.
    pub fn get_or<'a>(
        &'a self,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn remove(
        &mut self,
        key: &str,
    ) -> Option<String> {
        self.values.remove(key)
    }

    pub fn contains_key(
        &self,
        key: &str,
    ) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.values.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.values().map(String::as_str)
    }

    /// Parses `.properties` text from `reader` into this table.
    ///
    /// Existing entries are kept; loaded definitions overwrite them key by
    /// key. On error the definitions read before the bad line stay in the
    /// table.
    pub fn load<R: Read>(
        &mut self,
        reader: R,
    ) -> Result<(), LoadError> {
        let settings = self.settings.clone();
        load_from(reader, self, &settings).map(|_| ())
    }

    /// Like [`load`](Properties::load) with explicit settings, returning
    /// what was read.
    pub fn load_with<R: Read>(
        &mut self,
        reader: R,
        settings: &Settings,
    ) -> Result<LoadSummary, LoadError> {
        load_from(reader, self, settings)
    }

    pub fn load_str(
        &mut self,
        text: &str,
    ) -> Result<LoadSummary, LoadError> {
        self.load_bytes(text.as_bytes())
    }

    pub fn load_bytes(
        &mut self,
        bytes: &[u8],
    ) -> Result<LoadSummary, LoadError> {
        let settings = self.settings.clone();
        load_from(bytes, self, &settings)
    }

    /// Writes every entry to `writer` as `key=value` lines.
    ///
    /// Loading the output yields an equal table unless a key starts with
    /// `#` (the line reads back as a comment) or a key or value has spaces
    /// at either end (they are trimmed). See [`escape_key`].
    ///
    /// [`escape_key`]: crate::escape::escape_key
    pub fn store<W: Write>(
        &self,
        writer: W,
    ) -> io::Result<()> {
        store_to(self, writer, &self.settings).map(|_| ())
    }

    /// Like [`store`](Properties::store) with explicit settings, returning
    /// the number of bytes written.
    pub fn store_with<W: Write>(
        &self,
        writer: W,
        settings: &Settings,
    ) -> io::Result<usize> {
        store_to(self, writer, settings)
    }

    /// Renders the table as `.properties` text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in ordered_entries(self, self.settings.sorted_output) {
            encode_entry(self.settings.escape_policy, key, value, &mut out);
        }
        out
    }
}

impl PropertySink for Properties {
    fn put(
        &mut self,
        key: String,
        value: String,
    ) {
        self.values.insert(key, value);
    }
}

impl PartialEq for Properties {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.values == other.values
    }
}

impl Eq for Properties {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

/// Borrowing iterator over `(key, value)` pairs.
pub struct Iter<'a>(hash_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
