//! Sequence diagram extractor
//!
//! Nodes are named from the interaction frame down. Every node nested under
//! a lifeline is owned by it, so a message between two event occurrences
//! resolves to the two lifelines.

use tracing::debug;

use crate::core::naming::strip_prefix;
use crate::core::vocabulary::{ALIAS_ATTR, ALIAS_NAME, NAME_ATTR, NODE_TAG, OWNER_ATTR, SUB_LABEL_TAG};
use crate::core::{
    comment_rule, default_relation_label, DiagramDescriptor, DiagramKind, ExtractContext,
    ExtractError, Extractor, NodeName, NodeNameTable, NodeView, RawElement,
};

const INTERACTION_NODE: &str = "TInteractionNode";
const LIFELINE_NODE: &str = "TLifelineNode_SD";
const MESSAGE_CONNECTION: &str = "TMessageConnection_SD";
const UNNAMED_MESSAGE: &str = "Unnamed Message";

/// Extractor for sequence diagrams
pub struct SequenceExtractor;

impl SequenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn lifeline_name(node: &NodeView<'_>, ctx: &ExtractContext<'_>) -> String {
    if let Some(name) = node.name {
        return name.to_string();
    }
    match node.attr(OWNER_ATTR) {
        Some(owner) => match ctx.index.meaningful(owner) {
            Some(owner_name) => format!(":{owner_name}"),
            None => format!("unnamed lifeline ({owner})"),
        },
        None => format!("unnamed lifeline ({})", node.id),
    }
}

/// Message name plus any differing `Name` sub-labels
fn message_label(connection: &RawElement) -> String {
    let name = connection.non_empty_attr(NAME_ATTR).unwrap_or(UNNAMED_MESSAGE);
    let details: Vec<&str> = connection
        .children_named(SUB_LABEL_TAG)
        .filter(|label| label.attr(ALIAS_ATTR) == Some(ALIAS_NAME))
        .filter_map(|label| label.non_empty_attr(NAME_ATTR))
        .filter(|text| *text != name)
        .collect();
    if details.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({})", details.join(", "))
    }
}

impl Extractor for SequenceExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Sequence
    }

    fn traversal_root<'d>(
        &self,
        diagram: &DiagramDescriptor<'d>,
        ctx: &ExtractContext<'d>,
    ) -> Result<&'d RawElement, ExtractError> {
        let interaction = diagram
            .root
            .children_named(NODE_TAG)
            .find(|node| ctx.local_type_of(*node) == INTERACTION_NODE)
            .ok_or_else(|| ExtractError::MissingInteraction {
                diagram: diagram.name.to_string(),
            })?;
        debug!(
            interaction = interaction.non_empty_attr(NAME_ATTR).unwrap_or("unnamed interaction"),
            "Interaction"
        );
        Ok(interaction)
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = comment_rule(node) {
            return rule;
        }
        let label = |role: &str| match node.name {
            Some(name) => format!("{role} ({name})"),
            None => format!("{role} ({})", node.id),
        };
        let name = match node.declared_type {
            LIFELINE_NODE => lifeline_name(node, ctx),
            "TInvocationSpecificationNode" | "TExecutionSpecificationNode" => node
                .name
                .map(str::to_string)
                .unwrap_or_else(|| format!("activation ({})", node.id)),
            "TEventOccurrenceNode" => format!("event ({})", node.id),
            "TStateInvariantNode" => label("state invariant"),
            "TInteractionOccurrenceNode" => label("interaction use"),
            "TInteractionOperandNode" => label("operand"),
            "TCombinedFragmentNode" => {
                let operator = node.attr("kind").unwrap_or("unknown").to_uppercase();
                match node.name {
                    Some(name) => format!("combined fragment ({operator}): {name}"),
                    None => format!("combined fragment ({operator})"),
                }
            }
            "TMountingLinkNode" | "TSplitterNode" => return NodeName::Decorative,
            _ => return NodeName::Unrecognized,
        };
        debug!(
            node_type = node.declared_type,
            name = name.as_str(),
            lifeline = node.scope,
            "Sequence node"
        );
        NodeName::Named(name)
    }

    fn child_scope<'d>(&self, node: &NodeView<'d>) -> Option<&'d str> {
        if node.declared_type == LIFELINE_NODE {
            Some(node.id)
        } else {
            node.scope
        }
    }

    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        if ctx.document.keys.type_of(connection).map(strip_prefix) == Some(MESSAGE_CONNECTION) {
            Some(message_label(connection))
        } else {
            Some(default_relation_label(connection, ctx))
        }
    }

    fn resolve_endpoint<'t>(&self, id: &str, table: &'t NodeNameTable) -> Option<&'t str> {
        table.resolve_through_owner(id)
    }
}
