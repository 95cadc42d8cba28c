//! State machine diagram extractor
//!
//! Pseudo-states get fixed names. Every connection is a `Transition`; its
//! event and guard text is logged but kept out of the relation label.

use tracing::debug;

use crate::core::naming::sub_label;
use crate::core::vocabulary::{ALIAS_GUARD, ALIAS_NAME, NAME_ATTR};
use crate::core::{
    comment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName, NodeView,
    RawElement,
};

const TRANSITION: &str = "Transition";
const INTERNAL_COMPARTMENT_TAG: &str = "internetPartCompartment";
const INTERNAL_PART_TAG: &str = "internelParts";

/// Extractor for state machine diagrams
pub struct StateMachineExtractor;

impl StateMachineExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StateMachineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn pseudo_state(declared_type: &str) -> Option<&'static str> {
    Some(match declared_type {
        "TInitialStateNode" => "initial state",
        "TFinalStateNode" => "final state",
        "TChoiceStateNode" => "choice",
        "TJoinStateNode" => "join",
        "TForkStateNode" => "fork",
        "TEntryPointNode" => "entry point",
        "TExitPointNode" => "exit point",
        "TShallowHistoryStateNode" => "shallow history",
        "TDeepHistoryStateNode" => "deep history",
        "TTerminateStateNode" => "terminate",
        _ => return None,
    })
}

/// Log a state's entry/exit/do behaviors
fn log_internal_behaviors(state: &RawElement, name: &str) {
    let Some(compartment) = state.first_child(INTERNAL_COMPARTMENT_TAG) else {
        return;
    };
    for part in compartment.children_named(INTERNAL_PART_TAG) {
        let behavior = if part.attr("isDo") == Some("true") {
            "Do"
        } else {
            "Internal"
        };
        debug!(
            state = name,
            behavior,
            activity = part.non_empty_attr(NAME_ATTR).unwrap_or("unnamed activity"),
            "State behavior"
        );
    }
}

/// Event/guard text of a transition: its name plus differing sub-labels
fn transition_text(connection: &RawElement) -> String {
    let mut text = connection.non_empty_attr(NAME_ATTR).unwrap_or("").to_string();
    for alias in [ALIAS_NAME, ALIAS_GUARD] {
        let Some(extra) = sub_label(connection, alias) else {
            continue;
        };
        if extra == text {
            continue;
        }
        if text.is_empty() {
            text = extra.to_string();
        } else {
            text.push_str(&format!(" ({extra})"));
        }
    }
    text
}

impl Extractor for StateMachineExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::StateMachine
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = comment_rule(node) {
            return rule;
        }
        if let Some(name) = pseudo_state(node.declared_type) {
            return NodeName::named(name);
        }
        let role = match node.declared_type {
            "TStateMachineNode" => "state machine",
            "TRegionNode" => "region",
            "TCompositeStateNode" | "TStateNode" | "TSimpleStateNode" => "state",
            _ => return NodeName::Unrecognized,
        };
        let name = entity_name(node, ctx).unwrap_or_else(|| format!("{role} ({})", node.id));
        if role == "state" {
            log_internal_behaviors(node.element, &name);
        }
        debug!(role, name = name.as_str(), "State machine node");
        NodeName::Named(name)
    }

    fn classify_relation(&self, connection: &RawElement, _ctx: &ExtractContext<'_>) -> Option<String> {
        let text = transition_text(connection);
        if !text.is_empty() {
            debug!(label = text.as_str(), "Transition label");
        }
        Some(TRANSITION.to_string())
    }
}
