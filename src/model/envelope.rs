use std::collections::HashMap;

use serde::Deserialize;

/// The hypermedia list envelope the services wrap collections in: the actual
/// array is nested under `_embedded.<resource>` rather than at the response
/// root. Workflow code never sees this shape; the service bindings unwrap it
/// here so a backend envelope change stays localised.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Embedded<T> {
    #[serde(rename = "_embedded", default)]
    embedded: HashMap<String, Vec<T>>,
}

impl<T> Embedded<T> {
    /// Take the collection registered under `resource`. A missing envelope
    /// or missing key is an empty collection, not an error.
    pub fn into_items(mut self, resource: &str) -> Vec<T> {
        self.embedded.remove(resource).unwrap_or_default()
    }
}
