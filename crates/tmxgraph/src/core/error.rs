//! Core error types for triple extraction
//!
//! Only a malformed document (or an I/O / serialization failure around it)
//! aborts a run. Every other condition is recorded as a diagnostic and the
//! extraction degrades to a placeholder.

use thiserror::Error;

/// Errors and diagnostics raised while extracting triples
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Malformed document: {message} at byte {position}")]
    MalformedDocument { message: String, position: u64 },

    #[error("Unresolved reference: {id} in diagram '{diagram}'")]
    UnresolvedReference { diagram: String, id: String },

    #[error("Unrecognized diagram kind: '{name}' (stereotype: {stereotype}, type: {declared_type})")]
    UnrecognizedDiagramKind {
        name: String,
        stereotype: String,
        declared_type: String,
    },

    #[error("Unrecognized node type: {node_type} for node {id} in diagram '{diagram}'")]
    UnrecognizedNodeType {
        diagram: String,
        id: String,
        node_type: String,
    },

    #[error("Depth limit of {limit} exceeded in diagram '{diagram}'")]
    DepthLimitExceeded { diagram: String, limit: usize },

    #[error("Sequence diagram '{diagram}' has no interaction frame")]
    MissingInteraction { diagram: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl ExtractError {
    /// Create a new malformed-document error
    pub fn malformed(message: impl Into<String>, position: u64) -> Self {
        Self::MalformedDocument {
            message: message.into(),
            position,
        }
    }

    /// Create a new unresolved-reference diagnostic
    pub fn unresolved(diagram: &str, id: &str) -> Self {
        Self::UnresolvedReference {
            diagram: diagram.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a new unrecognized-node-type diagnostic
    pub fn unrecognized_node(diagram: &str, id: &str, node_type: &str) -> Self {
        Self::UnrecognizedNodeType {
            diagram: diagram.to_string(),
            id: id.to_string(),
            node_type: node_type.to_string(),
        }
    }

    /// Whether this error aborts the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MalformedDocument { .. } | Self::Io { .. } | Self::Serialization { .. }
        )
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        Self::malformed(err.to_string(), 0)
    }
}

impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::malformed(format!("invalid attribute: {err}"), 0)
    }
}
