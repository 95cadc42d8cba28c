//! Requirement diagram extractor
//!
//! Requirement nodes carry their name directly; stereotype properties listed
//! in their compartments are named too. Relations use the generic label chain,
//! so `<<deriveReqt>>` becomes `DeriveReqt`.

use tracing::debug;

use crate::core::{
    comment_rule, compartment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName,
    NodeView,
};

const REQUIREMENT_STEREOTYPE: &str = "requirement";

/// Extractor for requirement diagrams
pub struct RequirementExtractor;

impl RequirementExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequirementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for RequirementExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Requirement
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = compartment_rule(node).or_else(|| comment_rule(node)) {
            return rule;
        }
        if node.has_stereotype(REQUIREMENT_STEREOTYPE) {
            let name = entity_name(node, ctx).unwrap_or_else(|| format!("requirement ({})", node.id));
            debug!(name = name.as_str(), "Requirement");
            return NodeName::Named(name);
        }
        // Satisfying blocks, test cases and other model elements
        if node.stereotype().is_none() && node.declared_type != "TModelElementNode" {
            return NodeName::Unrecognized;
        }
        NodeName::Named(entity_name(node, ctx).unwrap_or_else(|| format!("element ({})", node.id)))
    }
}
