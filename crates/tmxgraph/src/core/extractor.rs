//! Per-kind extractor trait and the shared two-phase engine
//!
//! Phase A walks every node below the diagram with an explicit worklist and
//! asks the kind's [`Extractor::name_node`] for a display name. Phase B walks
//! the diagram's direct connections, resolves both endpoints through the
//! resulting [`NodeNameTable`] and asks [`Extractor::classify_relation`] for
//! the label. Kinds override only the hooks where their rules differ.

use tracing::{debug, info, span, trace, warn, Level};

use super::context::{ExtractContext, NodeNameTable};
use super::document::RawElement;
use super::error::ExtractError;
use super::naming::{
    clean_connection_type, last_segment, name_before_type, other_node, strip_stereotype,
    sub_label, title_case, unknown_node,
};
use super::triple::{Triple, TripleGraph};
use super::types::{DiagramDescriptor, DiagramKind};
use super::vocabulary::{
    COMMENT_NODE_TYPE, COMPARTMENT_CHILD_TYPE, COMPARTMENT_TYPES, CONNECTION_TAG, HYPERLINK_TYPE,
    NAME_ATTR, NODE_TAG, SOURCE_ATTR, STEREOTYPE_ATTR, SUB_LABEL_TYPE, TARGET_ATTR, TYPE_ATTR,
};

/// Outcome of naming one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeName {
    /// Record this display name; children are visited
    Named(String),
    /// No kind-specific rule; the generic "other node" rule applies
    Unrecognized,
    /// Grouping element: not named, children are visited
    Transparent,
    /// Decorative label: neither named nor descended into
    Decorative,
}

impl NodeName {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// A graphical node as seen by a namer
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'d> {
    pub element: &'d RawElement,
    pub id: &'d str,
    /// Declared element-type without its prefix, e.g. `TPortNode`
    pub declared_type: &'d str,
    /// Trimmed non-empty `name`
    pub name: Option<&'d str>,
    /// Scope node inherited from the enclosing nodes
    pub scope: Option<&'d str>,
}

impl<'d> NodeView<'d> {
    pub fn attr(&self, key: &str) -> Option<&'d str> {
        self.element.non_empty_attr(key)
    }

    /// Undecorated stereotype, e.g. `block` for `<<block>>`
    pub fn stereotype(&self) -> Option<&'d str> {
        self.attr(STEREOTYPE_ATTR)
            .map(strip_stereotype)
            .filter(|s| !s.is_empty())
    }

    pub fn has_stereotype(&self, expected: &str) -> bool {
        self.stereotype()
            .is_some_and(|s| s.eq_ignore_ascii_case(expected))
    }

    /// Generic/specific `type` attribute, e.g. `SysML.IBD.PartProperty`
    pub fn model_type(&self) -> Option<&'d str> {
        self.attr(TYPE_ATTR)
    }

    pub fn sub_label(&self, alias: &str) -> Option<&'d str> {
        sub_label(self.element, alias)
    }

    /// Own name, or `fallback` when the node is unnamed
    pub fn name_or(&self, fallback: &str) -> String {
        self.name.unwrap_or(fallback).to_string()
    }
}

/// Naming shared by every kind for list compartments and their rows.
///
/// Compartments are transparent; rows are named by the part of their label
/// before any `: Type` suffix.
pub fn compartment_rule(node: &NodeView<'_>) -> Option<NodeName> {
    let model_type = node.model_type()?;
    if model_type == COMPARTMENT_CHILD_TYPE {
        let name = node.name.map(name_before_type).filter(|n| !n.is_empty());
        return Some(match name {
            Some(name) => {
                debug!(id = node.id, name, "Compartment entry");
                NodeName::named(name)
            }
            None => NodeName::Transparent,
        });
    }
    COMPARTMENT_TYPES
        .contains(&model_type)
        .then_some(NodeName::Transparent)
}

/// Name of a node standing for a model element: its own name, else the real
/// name of the element it points back to
pub fn entity_name(node: &NodeView<'_>, ctx: &ExtractContext<'_>) -> Option<String> {
    node.name
        .or_else(|| ctx.referenced_name(node.element))
        .map(str::to_string)
}

/// Naming shared by every kind for comment and hyperlink nodes
pub fn comment_rule(node: &NodeView<'_>) -> Option<NodeName> {
    if node.declared_type != COMMENT_NODE_TYPE {
        return None;
    }
    let role = if node.model_type() == Some(HYPERLINK_TYPE) {
        "hyperlink"
    } else {
        "comment"
    };
    Some(match node.name {
        Some(text) => NodeName::named(format!("{role}: {text}")),
        None => NodeName::named(format!("{role} ({})", node.id)),
    })
}

/// Decoration-stripped, title-cased stereotype of a connection
pub fn stereotype_relation(connection: &RawElement) -> Option<String> {
    connection
        .non_empty_attr(STEREOTYPE_ATTR)
        .map(strip_stereotype)
        .filter(|s| !s.is_empty())
        .map(title_case)
}

/// Generic relation label chain: stereotype, then the `type` attribute's last
/// segment, then the cleaned declared type, then the raw tag
pub fn default_relation_label(connection: &RawElement, ctx: &ExtractContext<'_>) -> String {
    stereotype_relation(connection)
        .or_else(|| {
            connection
                .non_empty_attr(TYPE_ATTR)
                .map(|t| last_segment(t).to_string())
        })
        .or_else(|| ctx.document.keys.type_of(connection).map(clean_connection_type))
        .unwrap_or_else(|| connection.local.clone())
}

/// Result of extracting one diagram
#[derive(Debug, Default)]
pub struct DiagramOutcome {
    pub triples: TripleGraph,
    /// Number of named nodes
    pub nodes: usize,
    pub diagnostics: Vec<ExtractError>,
}

/// Kind-specific node namer and relation classifier
pub trait Extractor: Send + Sync {
    fn kind(&self) -> DiagramKind;

    /// Element whose nested nodes are named; the diagram root by default
    fn traversal_root<'d>(
        &self,
        diagram: &DiagramDescriptor<'d>,
        _ctx: &ExtractContext<'d>,
    ) -> Result<&'d RawElement, ExtractError> {
        Ok(diagram.root)
    }

    /// Display name for one node
    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName;

    /// Scope handed down to the node's children
    fn child_scope<'d>(&self, node: &NodeView<'d>) -> Option<&'d str> {
        node.scope
    }

    /// Relation label for a connection; `None` ignores the connection
    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        Some(default_relation_label(connection, ctx))
    }

    /// Display name of a connection endpoint
    fn resolve_endpoint<'t>(&self, id: &str, table: &'t NodeNameTable) -> Option<&'t str> {
        table.get(id)
    }

    /// Run both phases over one diagram
    fn extract<'d>(&self, diagram: &DiagramDescriptor<'d>, ctx: &ExtractContext<'d>) -> DiagramOutcome {
        let extract_span = span!(
            Level::DEBUG,
            "extract_diagram",
            kind = %self.kind(),
            name = diagram.name
        );
        let _enter = extract_span.enter();

        let mut outcome = DiagramOutcome::default();
        let root = match self.traversal_root(diagram, ctx) {
            Ok(root) => root,
            Err(err) => {
                warn!(error = %err, "Skipping diagram");
                outcome.diagnostics.push(err);
                return outcome;
            }
        };

        let table = name_nodes(self, diagram, root, ctx, &mut outcome.diagnostics);
        outcome.nodes = table.len();
        extract_relations(self, diagram, &table, ctx, &mut outcome);

        info!(
            nodes = outcome.nodes,
            triples = outcome.triples.len(),
            "Diagram extracted"
        );
        outcome
    }
}

/// Phase A: name every node below `root`, without native recursion
fn name_nodes<'d, E: Extractor + ?Sized>(
    extractor: &E,
    diagram: &DiagramDescriptor<'d>,
    root: &'d RawElement,
    ctx: &ExtractContext<'d>,
    diagnostics: &mut Vec<ExtractError>,
) -> NodeNameTable {
    let mut table = NodeNameTable::new();
    let mut depth_exceeded = false;
    let mut stack: Vec<(&'d RawElement, usize, Option<&'d str>)> =
        root.children.iter().rev().map(|child| (child, 1, None)).collect();

    while let Some((element, depth, scope)) = stack.pop() {
        if element.local == CONNECTION_TAG || ctx.config.is_container_tag(&element.local) {
            continue;
        }
        if depth > ctx.config.max_depth {
            if !depth_exceeded {
                let err = ExtractError::DepthLimitExceeded {
                    diagram: diagram.name.to_string(),
                    limit: ctx.config.max_depth,
                };
                warn!(error = %err, "Nested nodes below the limit are not named");
                diagnostics.push(err);
                depth_exceeded = true;
            }
            continue;
        }

        let mut inner_scope = scope;
        if element.local == NODE_TAG {
            let declared_type = ctx.local_type_of(element);
            if declared_type == SUB_LABEL_TYPE {
                continue;
            }
            if let Some(id) = ctx.id_of(element) {
                let view = NodeView {
                    element,
                    id,
                    declared_type,
                    name: element.non_empty_attr(NAME_ATTR),
                    scope,
                };
                match extractor.name_node(&view, ctx) {
                    NodeName::Named(name) => {
                        trace!(id, name = name.as_str(), "Named node");
                        table.insert(id, name);
                    }
                    NodeName::Unrecognized => {
                        let kind = if declared_type.is_empty() { "node" } else { declared_type };
                        let name = other_node(kind, view.name.or_else(|| ctx.referenced_name(element)), id);
                        let err = ExtractError::unrecognized_node(diagram.name, id, kind);
                        warn!(error = %err, name = name.as_str(), "Generic node name");
                        diagnostics.push(err);
                        table.insert(id, name);
                    }
                    NodeName::Transparent => {}
                    NodeName::Decorative => continue,
                }
                if let Some(owner) = scope {
                    table.set_owner(id, owner);
                }
                inner_scope = extractor.child_scope(&view);
            } else {
                trace!(declared_type, "Node without identity is not named");
            }
        }

        stack.extend(
            element
                .children
                .iter()
                .rev()
                .map(|child| (child, depth + 1, inner_scope)),
        );
    }

    table
}

/// Phase B: one triple per direct connection with both endpoints
fn extract_relations<'d, E: Extractor + ?Sized>(
    extractor: &E,
    diagram: &DiagramDescriptor<'d>,
    table: &NodeNameTable,
    ctx: &ExtractContext<'d>,
    outcome: &mut DiagramOutcome,
) {
    for connection in diagram.root.children_named(CONNECTION_TAG) {
        let (Some(source), Some(target)) = (
            connection.non_empty_attr(SOURCE_ATTR),
            connection.non_empty_attr(TARGET_ATTR),
        ) else {
            trace!("Connection without both endpoints");
            continue;
        };
        let Some(relation) = extractor.classify_relation(connection, ctx) else {
            trace!(source, target, "Connection ignored");
            continue;
        };

        let subject = endpoint_name(extractor, source, table, diagram, &mut outcome.diagnostics);
        let object = endpoint_name(extractor, target, table, diagram, &mut outcome.diagnostics);
        let triple = Triple::new(subject, relation, object);
        debug!(%triple, "Extracted triple");
        outcome.triples.push(triple);
    }

    if outcome.triples.is_empty() {
        debug!("No connections found");
    }
}

fn endpoint_name<E: Extractor + ?Sized>(
    extractor: &E,
    id: &str,
    table: &NodeNameTable,
    diagram: &DiagramDescriptor<'_>,
    diagnostics: &mut Vec<ExtractError>,
) -> String {
    match extractor.resolve_endpoint(id, table) {
        Some(name) => name.to_string(),
        None => {
            let err = ExtractError::unresolved(diagram.name, id);
            warn!(error = %err, "Using placeholder endpoint");
            diagnostics.push(err);
            unknown_node(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Document, ExtractConfig, GlobalIdIndex};

    /// Names `TThing` nodes, treats `TGroup` as a scope, skips `TDecor`
    struct TestExtractor;

    impl Extractor for TestExtractor {
        fn kind(&self) -> DiagramKind {
            DiagramKind::Class
        }

        fn name_node<'d>(&self, node: &NodeView<'d>, _ctx: &ExtractContext<'d>) -> NodeName {
            if let Some(rule) = compartment_rule(node) {
                return rule;
            }
            match node.declared_type {
                "TThing" => NodeName::named(node.name_or("unnamed thing")),
                "TGroup" => NodeName::named(format!("group {}", node.id)),
                "TDecor" => NodeName::Decorative,
                _ => NodeName::Unrecognized,
            }
        }

        fn child_scope<'d>(&self, node: &NodeView<'d>) -> Option<&'d str> {
            (node.declared_type == "TGroup")
                .then_some(node.id)
                .or(node.scope)
        }
    }

    fn run(xml: &str, config: &ExtractConfig) -> (DiagramOutcome, NodeNameTable) {
        let document = Document::parse(xml).unwrap();
        let index = GlobalIdIndex::build(&document);
        let ctx = ExtractContext::new(&document, &index, config);
        let diagram_root = document.root.first_child("contents").unwrap();
        let diagram = DiagramDescriptor::new(DiagramKind::Class, diagram_root);
        let table = name_nodes(&TestExtractor, &diagram, diagram_root, &ctx, &mut Vec::new());
        (TestExtractor.extract(&diagram, &ctx), table)
    }

    const XMI: &str = r#"xmlns:xmi="http://www.omg.org/XMI""#;

    #[test]
    fn test_nested_nodes_are_named_and_scoped() {
        let xml = format!(
            r#"<r {XMI}><contents name="D">
                <nodes xmi:id="g" xmi:type="t:TGroup">
                    <nodes xmi:id="a" xmi:type="t:TThing" name=" A "/>
                    <nodes xmi:id="d" xmi:type="t:TDecor"><nodes xmi:id="hidden" xmi:type="t:TThing"/></nodes>
                    <nodes xmi:id="s" xmi:type="t:SubLabel" name="label"/>
                </nodes>
            </contents></r>"#
        );
        let (_, table) = run(&xml, &ExtractConfig::default());
        assert_eq!(table.get("a"), Some("A"));
        assert_eq!(table.owner("a"), Some("g"));
        assert_eq!(table.get("hidden"), None);
        assert_eq!(table.get("s"), None);
        assert_eq!(table.get("d"), None);
    }

    #[test]
    fn test_connections_resolve_or_use_placeholders() {
        let xml = format!(
            r#"<r {XMI}><contents name="D">
                <nodes xmi:id="a" xmi:type="t:TThing" name="A"/>
                <nodes xmi:id="b" xmi:type="t:TThing" name="B"/>
                <connections source="a" target="b" stereotype="&lt;&lt;derive&gt;&gt;"/>
                <connections source="x" target="b" xmi:type="trufun:TGeneralizeConnection"/>
                <connections source="a"/>
            </contents></r>"#
        );
        let (outcome, _) = run(&xml, &ExtractConfig::default());
        let triples: Vec<String> = outcome.triples.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            triples,
            vec![
                "(A, Derive, B)".to_string(),
                "(unknown node (id: x), Generalize, B)".to_string(),
            ]
        );
        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| matches!(d, ExtractError::UnresolvedReference { id, .. } if id == "x")));
    }

    #[test]
    fn test_unrecognized_nodes_fall_back_to_generic_name() {
        let xml = format!(
            r#"<r {XMI}>
                <e xmi:id="m" name="Motor"/>
                <contents name="D">
                    <nodes xmi:id="w" xmi:type="t:TWidgetNode" name="W"/>
                    <nodes xmi:id="v" xmi:type="t:TWidgetNode" owner="m"/>
                    <nodes xmi:id="z" xmi:type="t:TWidgetNode"/>
                </contents>
            </r>"#
        );
        let (outcome, table) = run(&xml, &ExtractConfig::default());
        assert_eq!(table.get("w"), Some("other node (WidgetNode): W"));
        assert_eq!(table.get("v"), Some("other node (WidgetNode): Motor"));
        assert_eq!(table.get("z"), Some("other node (WidgetNode): id z"));
        assert_eq!(
            outcome
                .diagnostics
                .iter()
                .filter(|d| matches!(d, ExtractError::UnrecognizedNodeType { .. }))
                .count(),
            3
        );
    }

    #[test]
    fn test_compartment_rows_are_named() {
        let xml = format!(
            r#"<r {XMI}><contents name="D">
                <nodes xmi:id="a" xmi:type="t:TThing" name="A">
                    <nodes xmi:id="c" type="value_properties">
                        <nodes xmi:id="p" type="ListCompartmentChild" name="mass : Real"/>
                    </nodes>
                </nodes>
            </contents></r>"#
        );
        let (_, table) = run(&xml, &ExtractConfig::default());
        assert_eq!(table.get("p"), Some("mass"));
        assert_eq!(table.get("c"), None);
    }

    #[test]
    fn test_depth_limit_is_reported_once() {
        let mut nested = String::new();
        for i in 0..6 {
            nested.push_str(&format!(r#"<nodes xmi:id="n{i}" xmi:type="t:TThing" name="N{i}">"#));
        }
        nested.push_str(&"</nodes>".repeat(6));
        let xml = format!(r#"<r {XMI}><contents name="D">{nested}</contents></r>"#);

        let config = ExtractConfig::default().with_max_depth(3);
        let (outcome, table) = run(&xml, &config);
        assert_eq!(table.get("n2"), Some("N2"));
        assert_eq!(table.get("n3"), None);
        assert_eq!(
            outcome
                .diagnostics
                .iter()
                .filter(|d| matches!(d, ExtractError::DepthLimitExceeded { limit: 3, .. }))
                .count(),
            1
        );
    }
}
