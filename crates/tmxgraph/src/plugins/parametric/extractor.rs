//! Parametric diagram extractor
//!
//! Only binding connectors, recognized by their palette annotation, become
//! triples. Everything else on the canvas is named so that bindings between
//! any two elements resolve.

use tracing::{debug, trace};

use crate::core::naming::{name_before_type, strip_leading_colon, strip_port_decoration, strip_stereotype};
use crate::core::vocabulary::{
    ALIAS_NAME, ANNOTATIONS_TAG, DETAILS_TAG, KEY_ATTR, STEREOTYPE_ATTR, VALUE_ATTR,
};
use crate::core::{
    comment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName, NodeView,
    RawElement,
};

const CONSTRAINT_PROPERTY: &str = "SysML.IBD.ConstraintProperty";
const VALUE_PROPERTY: &str = "SysML.IBD.ValueProperty";
const PART_PROPERTY: &str = "SysML.IBD.PartProperty";
const CONSTRAINT_PARAMETER: &str = "constraintParameter";
const PALETTE_KEY: &str = "palette_entry_id";
const BINDING_CONNECTOR: &str = "SysML.IBD.BindingConnector";

/// Extractor for parametric diagrams
pub struct ParametricExtractor;

impl ParametricExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParametricExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a connection carries the binding-connector palette marker
fn is_binding_connector(connection: &RawElement) -> bool {
    connection
        .children_named(ANNOTATIONS_TAG)
        .flat_map(|annotation| annotation.children_named(DETAILS_TAG))
        .any(|detail| {
            detail.attr(KEY_ATTR) == Some(PALETTE_KEY) && detail.attr(VALUE_ATTR) == Some(BINDING_CONNECTOR)
        })
}

fn parameter_name(node: &NodeView<'_>) -> String {
    node.sub_label(ALIAS_NAME)
        .or_else(|| node.name.map(name_before_type).filter(|n| !n.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("parameter ({})", node.id))
}

impl Extractor for ParametricExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Parametric
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = comment_rule(node) {
            return rule;
        }
        let fallback = |role: &str| {
            entity_name(node, ctx).unwrap_or_else(|| format!("{role} ({})", node.id))
        };
        let name = match (node.declared_type, node.model_type()) {
            ("TStructureClassNode", _) if node.has_stereotype("block") => fallback("block"),
            (_, Some(CONSTRAINT_PROPERTY)) => fallback("constraint property"),
            (_, Some(VALUE_PROPERTY)) => fallback("value property"),
            (_, Some(PART_PROPERTY)) => node
                .name
                .map(strip_leading_colon)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| fallback("part property")),
            ("TPortNode", _) if node.has_stereotype(CONSTRAINT_PARAMETER) => {
                let name = parameter_name(node);
                debug!(
                    parameter = name.as_str(),
                    constraint = node.scope.and_then(|scope| ctx.index.get(scope)),
                    "Constraint parameter"
                );
                return NodeName::Named(name);
            }
            ("TPortNode", _) => node
                .name
                .map(strip_port_decoration)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("port ({})", node.id)),
            _ => return NodeName::Unrecognized,
        };
        debug!(name = name.as_str(), "Parametric node");
        NodeName::Named(name)
    }

    fn child_scope<'d>(&self, node: &NodeView<'d>) -> Option<&'d str> {
        if node.model_type() == Some(CONSTRAINT_PROPERTY) {
            Some(node.id)
        } else {
            node.scope
        }
    }

    fn classify_relation(&self, connection: &RawElement, _ctx: &ExtractContext<'_>) -> Option<String> {
        if !is_binding_connector(connection) {
            trace!("Not a binding connector");
            return None;
        }
        let stereotype = connection
            .non_empty_attr(STEREOTYPE_ATTR)
            .map(strip_stereotype)
            .filter(|s| !s.is_empty());
        Some(match stereotype {
            Some(stereotype) => format!("Binding ({stereotype})"),
            None => "Binding".to_string(),
        })
    }
}
