//! Block definition diagram extractor

use tracing::debug;

use crate::core::naming::clean_connection_type;
use crate::core::{
    comment_rule, compartment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName,
    NodeView, RawElement,
};

/// Extractor for block definition diagrams
pub struct BlockExtractor;

impl BlockExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for BlockExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Block
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = compartment_rule(node).or_else(|| comment_rule(node)) {
            return rule;
        }
        let name = entity_name(node, ctx).unwrap_or_else(|| format!("block ({})", node.id));
        debug!(name = name.as_str(), stereotype = node.stereotype(), "Block");
        NodeName::Named(name)
    }

    /// Structural relations are labeled by their declared type, not stereotype
    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        Some(
            ctx.document
                .keys
                .type_of(connection)
                .map(clean_connection_type)
                .unwrap_or_else(|| connection.local.clone()),
        )
    }
}
