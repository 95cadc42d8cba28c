//! Global element identity index
//!
//! One pass over the whole tree assigns every identified element a
//! best-effort display name. Extractors use it to resolve back-references
//! that leave the current diagram, such as a lifeline's `owner`.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::document::Document;
use super::naming::{is_meaningful, stereotype_label, sub_label, type_descriptor, unknown_element};
use super::vocabulary::{ALIAS_NAME, NAME_ATTR};

/// Element ID → display name, write-once after [`GlobalIdIndex::build`]
#[derive(Debug, Clone, Default)]
pub struct GlobalIdIndex {
    names: HashMap<String, String>,
}

impl GlobalIdIndex {
    /// Index every element carrying an identity attribute.
    ///
    /// Name priority, first match wins:
    /// 1. non-empty `name` attribute
    /// 2. nested stereotype label, undecorated
    /// 3. nested `Name` sub-label
    /// 4. declared type descriptor, e.g. `Block (type)`
    /// 5. `unknown-element (id: <ID>)`
    ///
    /// When an ID occurs twice the first occurrence in document order is kept.
    pub fn build(document: &Document) -> Self {
        let mut names = HashMap::new();

        for element in document.iter() {
            let Some(id) = document.keys.id_of(element) else {
                continue;
            };
            if names.contains_key(id) {
                trace!(id, "Duplicate identity, keeping first");
                continue;
            }

            let name = element
                .non_empty_attr(NAME_ATTR)
                .map(str::to_string)
                .or_else(|| stereotype_label(element).map(str::to_string))
                .or_else(|| sub_label(element, ALIAS_NAME).map(str::to_string))
                .or_else(|| document.keys.type_of(element).map(type_descriptor))
                .unwrap_or_else(|| unknown_element(id));

            names.insert(id.to_string(), name);
        }

        debug!(elements = names.len(), "Built global identity index");
        Self { names }
    }

    /// Display name of an element, whatever its quality
    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name of an element only when it is a real name, not a type
    /// descriptor or placeholder
    pub fn meaningful(&self, id: &str) -> Option<&str> {
        self.get(id).filter(|name| is_meaningful(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
