//! Triple-graph document serialization
//!
//! Converts a [`TripleGraph`] into the import document consumed by the graph
//! store. Each display name becomes an entity keyed by the SHA-256 of the
//! name, so repeated mentions across diagrams merge into one graph node.
//!
//! ```json
//! {"triples": [
//!   {"head": {"label": "tmx", "id": "…", "properties": {"name": "R1"}},
//!    "relation": {"type": "Derive", "properties": {}},
//!    "tail": {"label": "tmx", "id": "…", "properties": {"name": "R2"}}}
//! ]}
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::ExtractError;
use super::triple::{Triple, TripleGraph};

/// Stable, cross-run entity key for a display name
pub fn entity_id(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hex::encode(hasher.finalize())
}

/// Make a label or relation type safe to use as a graph-store identifier.
///
/// Non-word characters become `_`, runs of `_` collapse, leading and trailing
/// `_` are dropped, and a leading digit gets a `_` prefix.
pub fn safe_identifier(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        let c = if c.is_alphanumeric() || c == '_' { c } else { '_' };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    let trimmed = out.trim_matches('_');
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityProperties {
    pub name: String,
}

/// One head or tail entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub label: String,
    pub id: String,
    pub properties: EntityProperties,
}

impl EntityRecord {
    pub fn new(label: &str, name: &str) -> Self {
        Self {
            label: label.to_string(),
            id: entity_id(name),
            properties: EntityProperties {
                name: name.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    #[serde(rename = "type")]
    pub relation_type: String,
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleRecord {
    pub head: EntityRecord,
    pub relation: RelationRecord,
    pub tail: EntityRecord,
}

/// The canonical output document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub triples: Vec<TripleRecord>,
}

impl GraphDocument {
    /// Serialize a triple list under one entity label, preserving order
    pub fn from_triples(graph: &TripleGraph, label: &str) -> Self {
        let triples = graph
            .iter()
            .map(|triple| TripleRecord {
                head: EntityRecord::new(label, &triple.subject),
                relation: RelationRecord {
                    relation_type: triple.relation.clone(),
                    properties: BTreeMap::new(),
                },
                tail: EntityRecord::new(label, &triple.object),
            })
            .collect();
        Self { triples }
    }

    /// Parse a document of the same shape, e.g. from the text extractor
    pub fn from_json(input: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with every relation type passed through [`safe_identifier`]
    pub fn sanitized(&self) -> Self {
        let mut document = self.clone();
        for record in &mut document.triples {
            record.relation.relation_type = safe_identifier(&record.relation.relation_type);
        }
        document
    }

    /// Unique entities in first-mention order
    pub fn entities(&self) -> Vec<&EntityRecord> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .flat_map(|record| [&record.head, &record.tail])
            .filter(|entity| seen.insert((entity.label.as_str(), entity.id.as_str())))
            .collect()
    }

    /// Back to plain triples
    pub fn to_triples(&self) -> TripleGraph {
        self.triples
            .iter()
            .map(|record| {
                Triple::new(
                    record.head.name(),
                    record.relation.relation_type.as_str(),
                    record.tail.name(),
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}
