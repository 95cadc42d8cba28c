//! Internal block diagram extractor
//!
//! Parts are typed properties shown as `: Type` when anonymous; ports carry
//! direction decorations (`~`, `:`) that are dropped from their names.

use tracing::debug;

use crate::core::naming::{clean_connection_type, strip_leading_colon, strip_port_decoration};
use crate::core::vocabulary::TYPE_ATTR;
use crate::core::{
    comment_rule, compartment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName,
    NodeView, RawElement,
};

const PART_PROPERTY: &str = "SysML.IBD.PartProperty";
const CONNECTOR: &str = "SysML.IBD.Connector";

/// Extractor for internal block diagrams
pub struct InternalBlockExtractor;

impl InternalBlockExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InternalBlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for InternalBlockExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::InternalBlock
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = compartment_rule(node).or_else(|| comment_rule(node)) {
            return rule;
        }
        let (role, name) = match node.declared_type {
            "TStructureClassNode" => ("block", entity_name(node, ctx)),
            "TModelElementNode" if node.model_type() == Some(PART_PROPERTY) => (
                "part",
                node.name
                    .map(strip_leading_colon)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .or_else(|| ctx.referenced_name(node.element).map(str::to_string)),
            ),
            "TModelElementNode" => ("property", entity_name(node, ctx)),
            "TPortNode" => (
                "port",
                node.name
                    .map(strip_port_decoration)
                    .filter(|n| !n.is_empty())
                    .or_else(|| ctx.referenced_name(node.element).map(str::to_string)),
            ),
            _ => return NodeName::Unrecognized,
        };
        let name = name.unwrap_or_else(|| format!("{role} ({})", node.id));
        debug!(node_type = node.declared_type, name = name.as_str(), "Structure node");
        NodeName::Named(name)
    }

    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        if connection.non_empty_attr(TYPE_ATTR) == Some(CONNECTOR) {
            return Some("Connector".to_string());
        }
        Some(
            ctx.document
                .keys
                .type_of(connection)
                .map(clean_connection_type)
                .unwrap_or_else(|| connection.local.clone()),
        )
    }
}
