//! Class diagram extractor

use tracing::debug;

use crate::core::naming::clean_connection_type;
use crate::core::{
    comment_rule, compartment_rule, entity_name, stereotype_relation, DiagramKind, ExtractContext,
    Extractor, NodeName, NodeView, RawElement,
};

const CLASSIFIER_NODES: &[&str] = &[
    "TClassNode",
    "TModelElementNode",
    "TStructureClassNode",
    "TInterfaceNode",
    "TEnumerationNode",
    "TDataTypeNode",
];

/// Extractor for class diagrams
pub struct ClassExtractor;

impl ClassExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn relation_for_type(cleaned: &str) -> &str {
    match cleaned {
        "Generalize" => "Generalization",
        "Realize" | "Realization" => "Realization",
        other => other,
    }
}

impl Extractor for ClassExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Class
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = compartment_rule(node).or_else(|| comment_rule(node)) {
            return rule;
        }
        if !CLASSIFIER_NODES.contains(&node.declared_type) {
            return NodeName::Unrecognized;
        }
        let name = entity_name(node, ctx).unwrap_or_else(|| format!("class ({})", node.id));
        debug!(
            name = name.as_str(),
            node_type = node.declared_type,
            stereotype = node.stereotype(),
            "Classifier"
        );
        NodeName::Named(name)
    }

    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        let label = stereotype_relation(connection).unwrap_or_else(|| {
            match ctx.document.keys.type_of(connection) {
                Some(declared) => relation_for_type(&clean_connection_type(declared)).to_string(),
                None => connection.local.clone(),
            }
        });
        Some(label)
    }
}
