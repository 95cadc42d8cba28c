//! Package diagram extractor
//!
//! Import relations are realizations whose `type` says what is imported; the
//! decorative `<<import>>` marker sub-label is appended to the label.

use tracing::debug;

use crate::core::naming::{clean_connection_type, split_camel, strip_prefix, sub_label};
use crate::core::vocabulary::{ALIAS_FIXED_NAME, TYPE_ATTR};
use crate::core::{
    comment_rule, entity_name, DiagramKind, ExtractContext, Extractor, NodeName, NodeView,
    RawElement,
};

const REALIZATION_CONNECTION: &str = "TRealizationConnection";

/// Extractor for package diagrams
pub struct PackageExtractor;

impl PackageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PackageExtractor {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Package
    }

    fn name_node<'d>(&self, node: &NodeView<'d>, ctx: &ExtractContext<'d>) -> NodeName {
        if let Some(rule) = comment_rule(node) {
            return rule;
        }
        match node.declared_type {
            "TPackageNode" => {
                let name = entity_name(node, ctx).unwrap_or_else(|| format!("package ({})", node.id));
                debug!(name = name.as_str(), "Package");
                NodeName::Named(name)
            }
            "TModelElementNode" | "TClassNode" => NodeName::Named(
                entity_name(node, ctx).unwrap_or_else(|| format!("element ({})", node.id)),
            ),
            _ => NodeName::Unrecognized,
        }
    }

    fn classify_relation(&self, connection: &RawElement, ctx: &ExtractContext<'_>) -> Option<String> {
        let declared = ctx.document.keys.type_of(connection);
        let import_kind = connection.non_empty_attr(TYPE_ATTR);
        let mut label = match (declared.map(strip_prefix), import_kind) {
            (Some(REALIZATION_CONNECTION), Some(kind)) => split_camel(kind),
            (Some(_), _) => declared.map(clean_connection_type).unwrap_or_default(),
            (None, _) => connection.local.clone(),
        };
        if let Some(marker) = sub_label(connection, ALIAS_FIXED_NAME) {
            label.push_str(&format!(" ({marker})"));
        }
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::test_support::{extract_first, triples};

    #[test]
    fn test_import_relations() {
        let outcome = extract_first(
            &PackageExtractor::new(),
            r#"<contents name="Packages" stereotype="SysMlPackageDiagram" xmi:type="trufun:TClassDiagram">
                <nodes xmi:id="p1" xmi:type="trufun:TPackageNode" name="Vehicle"/>
                <nodes xmi:id="p2" xmi:type="trufun:TPackageNode" name="Units"/>
                <connections source="p1" target="p2" xmi:type="trufun:TRealizationConnection" type="PackageImport">
                    <subLabels alias="FixedName" name="&lt;&lt;import&gt;&gt;"/>
                </connections>
                <connections source="p1" target="p2" xmi:type="trufun:TRealizationConnection" type="ElementImport"/>
                <connections source="p2" target="p1" xmi:type="trufun:TDependencyConnection"/>
            </contents>"#,
        );
        assert_eq!(
            triples(&outcome),
            vec![
                ("Vehicle", "Package Import (<<import>>)", "Units"),
                ("Vehicle", "Element Import", "Units"),
                ("Units", "Dependency", "Vehicle"),
            ]
        );
    }

    #[test]
    fn test_unnamed_element_gets_placeholder() {
        let outcome = extract_first(
            &PackageExtractor::new(),
            r#"<contents name="Packages" stereotype="SysMlPackageDiagram">
                <nodes xmi:id="p1" xmi:type="trufun:TPackageNode" name="Vehicle"/>
                <nodes xmi:id="c1" xmi:type="trufun:TClassNode"/>
                <connections source="c1" target="p1" xmi:type="trufun:TDependencyConnection"/>
            </contents>"#,
        );
        assert_eq!(triples(&outcome), vec![("element (c1)", "Dependency", "Vehicle")]);
        assert!(outcome.diagnostics.is_empty());
    }
}
