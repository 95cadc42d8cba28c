//! Use case diagram extractor

use tracing::debug;

use crate::core::naming::clean_connection_type;
use crate::core::{
    comment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName, NodeView,
    RawElement,
};

/// Extractor for use case diagrams
pub struct UseCaseExtractor;

impl UseCaseExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UseCaseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for UseCaseExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::UseCase
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = comment_rule(node) {
            return rule;
        }
        let role = match node.declared_type {
            "TUseCaseNode" => "use case",
            // Actors are modeled as blocks
            "TModelElementNode" | "TActorNode" => "actor",
            _ => return NodeName::Unrecognized,
        };
        let name = entity_name(node, ctx).unwrap_or_else(|| format!("{role} ({})", node.id));
        debug!(role, name = name.as_str(), "Use case node");
        NodeName::Named(name)
    }

    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        let label = match ctx.document.keys.type_of(connection) {
            Some(declared) => clean_connection_type(declared),
            None => connection.local.clone(),
        };
        Some(label)
    }
}
