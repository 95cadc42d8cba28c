//! Activity diagram extractor
//!
//! Control nodes get fixed names, pins are prefixed with their direction and
//! partitions are named like any model element. Flow labels carry their guard
//! as ` [guard]`.

use tracing::debug;

use crate::core::naming::{clean_connection_type, strip_port_decoration, strip_stereotype, sub_label};
use crate::core::vocabulary::{ALIAS_GUARD, ALIAS_STEREOTYPE};
use crate::core::{
    comment_rule, entity_name, stereotype_relation, DiagramKind, ExtractContext, Extractor,
    NodeName, NodeView, RawElement,
};

/// Extractor for activity diagrams
pub struct ActivityExtractor;

impl ActivityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ActivityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn pin_name(direction: &str, node: &NodeView<'_>) -> String {
    match node.name.map(strip_port_decoration).filter(|n| !n.is_empty()) {
        Some(name) => format!("{direction} pin: {name}"),
        None => format!("{direction} pin ({})", node.id),
    }
}

impl Extractor for ActivityExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Activity
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = comment_rule(node) {
            return rule;
        }
        let (role, name) = match node.declared_type {
            "TInitialNode" => ("control", "initial node".to_string()),
            "TActivityFinalNode" => ("control", "activity final".to_string()),
            "TFlowFinalNode" => ("control", "flow final".to_string()),
            "TDecisionNode" => ("control", "decision node".to_string()),
            "TMergeNode" => ("control", "merge node".to_string()),
            "TForkNode" => ("control", "fork node".to_string()),
            "TJoinNode" => ("control", "join node".to_string()),
            "TInputPinNode" => ("pin", pin_name("input", node)),
            "TOutputPinNode" => ("pin", pin_name("output", node)),
            "TActionNode" | "TCallBehaviorAction" | "TCallBehaviorActionNode" => (
                "action",
                entity_name(node, ctx).unwrap_or_else(|| format!("action ({})", node.id)),
            ),
            "TSubjectNode" => (
                "partition",
                entity_name(node, ctx).unwrap_or_else(|| format!("partition ({})", node.id)),
            ),
            "TActivityNode" => (
                "activity",
                entity_name(node, ctx).unwrap_or_else(|| format!("activity ({})", node.id)),
            ),
            _ => return NodeName::Unrecognized,
        };
        debug!(role, name = name.as_str(), "Activity node");
        NodeName::Named(name)
    }

    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        let stereotype = stereotype_relation(connection);
        let has_stereotype = stereotype.is_some();
        let mut label = stereotype.unwrap_or_else(|| match ctx.document.keys.type_of(connection) {
            Some(declared) => match clean_connection_type(declared).as_str() {
                "ControlFlow" => "Control Flow".to_string(),
                "ObjectFlow" => "Object Flow".to_string(),
                other => other.to_string(),
            },
            None => connection.local.clone(),
        });

        if !has_stereotype {
            if let Some(extra) = sub_label(connection, ALIAS_STEREOTYPE).map(strip_stereotype) {
                if !extra.is_empty() && !label.contains(extra) {
                    label.push(' ');
                    label.push_str(extra);
                }
            }
        }
        if let Some(guard) = sub_label(connection, ALIAS_GUARD) {
            label.push_str(&format!(" [{guard}]"));
        }
        Some(label)
    }
}
