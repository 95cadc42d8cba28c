//! Per-run and per-diagram extraction state
//!
//! [`ExtractContext`] is shared read-only by every extractor in a run.
//! [`NodeNameTable`] is created fresh for each diagram and dropped after it.

use std::collections::HashMap;

use super::config::ExtractConfig;
use super::document::{Document, RawElement};
use super::identity::GlobalIdIndex;
use super::naming::strip_prefix;
use super::vocabulary::{MODEL_ELEMENT_ATTR, OWNER_ATTR};

/// Read-only inputs available to every extractor
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'d> {
    pub document: &'d Document,
    pub index: &'d GlobalIdIndex,
    pub config: &'d ExtractConfig,
}

impl<'d> ExtractContext<'d> {
    pub fn new(document: &'d Document, index: &'d GlobalIdIndex, config: &'d ExtractConfig) -> Self {
        Self {
            document,
            index,
            config,
        }
    }

    pub fn id_of(&self, element: &'d RawElement) -> Option<&'d str> {
        self.document.keys.id_of(element)
    }

    /// Raw declared element-type, e.g. `trufun:TPortNode`
    pub fn type_of(&self, element: &'d RawElement) -> Option<&'d str> {
        self.document.keys.type_of(element)
    }

    /// Declared element-type without its prefix, e.g. `TPortNode`
    pub fn local_type_of(&self, element: &'d RawElement) -> &'d str {
        self.type_of(element).map(strip_prefix).unwrap_or("")
    }

    /// Real name of the model element a graphical element points back to,
    /// via `owner` first and `modelElement` second
    pub fn referenced_name(&self, element: &RawElement) -> Option<&'d str> {
        [OWNER_ATTR, MODEL_ELEMENT_ATTR]
            .into_iter()
            .filter_map(|attr| element.non_empty_attr(attr))
            .find_map(|id| self.index.meaningful(id))
    }
}

/// Node ID → display name for one diagram, plus node → scope ownership
#[derive(Debug, Clone, Default)]
pub struct NodeNameTable {
    names: HashMap<String, String>,
    owners: HashMap<String, String>,
}

impl NodeNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node's display name; a later name for the same ID wins
    pub fn insert(&mut self, id: &str, name: impl Into<String>) {
        self.names.insert(id.to_string(), name.into());
    }

    /// Record that a node lives inside the scope node `owner`
    pub fn set_owner(&mut self, id: &str, owner: &str) {
        self.owners.insert(id.to_string(), owner.to_string());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Scope node that owns `id`, if any
    pub fn owner(&self, id: &str) -> Option<&str> {
        self.owners.get(id).map(String::as_str)
    }

    /// Display name of the node's owning scope, falling back to the node itself
    pub fn resolve_through_owner(&self, id: &str) -> Option<&str> {
        self.owner(id)
            .and_then(|owner| self.get(owner))
            .or_else(|| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
