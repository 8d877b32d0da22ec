use std::collections::{BTreeMap, HashMap};

/// Destination for definitions completed by the parser.
///
/// The parser calls [`put`](PropertySink::put) once per committed logical
/// line, in input order; a later call for the same key must replace the
/// earlier value.
pub trait PropertySink {
    fn put(
        &mut self,
        key: String,
        value: String,
    );
}

impl PropertySink for HashMap<String, String> {
    fn put(
        &mut self,
        key: String,
        value: String,
    ) {
        self.insert(key, value);
    }
}

impl PropertySink for BTreeMap<String, String> {
    fn put(
        &mut self,
        key: String,
        value: String,
    ) {
        self.insert(key, value);
    }
}
