//! Core detector trait for diagram kind identification
//!
//! A diagram container is classified from two attribute signals: its
//! stereotype string and its declared element-type. Its tag has already
//! gated it as a container. Every detector scores the signals and the
//! orchestrator keeps the highest score.

use super::document::{AttributeKeys, RawElement};
use super::naming::strip_prefix;
use super::types::DiagramKind;
use super::vocabulary::{NAME_ATTR, STEREOTYPE_ATTR};

/// Score for a stereotype match
pub const STEREOTYPE_CONFIDENCE: f64 = 1.0;
/// Score for a declared element-type match
pub const DECLARED_TYPE_CONFIDENCE: f64 = 0.8;

/// The discriminating attributes of one diagram container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSignals<'d> {
    pub tag: &'d str,
    pub name: Option<&'d str>,
    pub stereotype: Option<&'d str>,
    /// Declared element-type without its prefix
    pub declared_type: Option<&'d str>,
}

impl<'d> ContainerSignals<'d> {
    pub fn of(element: &'d RawElement, keys: &AttributeKeys) -> Self {
        Self {
            tag: &element.local,
            name: element.non_empty_attr(NAME_ATTR),
            stereotype: element.non_empty_attr(STEREOTYPE_ATTR),
            declared_type: keys.type_of(element).map(strip_prefix),
        }
    }

    pub fn stereotype_is(&self, expected: &str) -> bool {
        self.stereotype
            .is_some_and(|s| s.eq_ignore_ascii_case(expected))
    }

    pub fn declared_type_is(&self, expected: &str) -> bool {
        self.declared_type == Some(expected)
    }
}

/// Static discriminator shared by the per-kind detectors
#[derive(Debug, Clone, Copy)]
pub struct SignalRule {
    pub stereotypes: &'static [&'static str],
    pub declared_types: &'static [&'static str],
}

impl SignalRule {
    pub fn score(&self, signals: &ContainerSignals<'_>) -> f64 {
        if self.stereotypes.iter().any(|s| signals.stereotype_is(s)) {
            STEREOTYPE_CONFIDENCE
        } else if self.declared_types.iter().any(|t| signals.declared_type_is(t)) {
            DECLARED_TYPE_CONFIDENCE
        } else {
            0.0
        }
    }

    pub fn patterns(&self) -> Vec<&'static str> {
        self.stereotypes
            .iter()
            .chain(self.declared_types.iter())
            .copied()
            .collect()
    }
}

/// Core trait for diagram kind detectors
///
/// # Example
/// ```
/// use tmxgraph::core::{ContainerSignals, Detector};
/// use tmxgraph::plugins::requirement::RequirementDetector;
///
/// let signals = ContainerSignals {
///     tag: "contents",
///     name: Some("Reqs"),
///     stereotype: Some("SysmlRequirementDiagram"),
///     declared_type: Some("TClassDiagram"),
/// };
/// assert!(RequirementDetector::new().detect(&signals));
/// ```
pub trait Detector: Send + Sync {
    /// Whether the container belongs to this kind
    fn detect(&self, signals: &ContainerSignals<'_>) -> bool {
        self.confidence(signals) > 0.0
    }

    /// Confidence of the match (0.0 to 1.0)
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64;

    /// The kind this detector recognizes
    fn diagram_kind(&self) -> DiagramKind;

    /// Stereotypes and declared types this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::NamespaceMap;

    const RULE: SignalRule = SignalRule {
        stereotypes: &["SysMLStateDiagram"],
        declared_types: &["TStateMachineDiagram"],
    };

    fn signals<'a>(stereotype: Option<&'a str>, declared: Option<&'a str>) -> ContainerSignals<'a> {
        ContainerSignals {
            tag: "contents",
            name: None,
            stereotype,
            declared_type: declared,
        }
    }

    #[test]
    fn test_stereotype_beats_declared_type() {
        assert_eq!(RULE.score(&signals(Some("SysMLStateDiagram"), None)), 1.0);
        assert_eq!(RULE.score(&signals(Some("sysmlstatediagram"), None)), 1.0);
        assert_eq!(RULE.score(&signals(None, Some("TStateMachineDiagram"))), 0.8);
        assert_eq!(RULE.score(&signals(Some("Other"), Some("TClassDiagram"))), 0.0);
    }

    #[test]
    fn test_signals_strip_type_prefix() {
        let element = RawElement::new("contents")
            .with_attr("xmi:type", "trufun:TUsecaseDiagram")
            .with_attr("stereotype", " ")
            .with_attr("name", "Uses");
        let keys = AttributeKeys::from_namespaces(&NamespaceMap::new());
        let signals = ContainerSignals::of(&element, &keys);
        assert_eq!(signals.declared_type, Some("TUsecaseDiagram"));
        assert_eq!(signals.stereotype, None);
        assert_eq!(signals.name, Some("Uses"));
    }

    #[test]
    fn test_patterns() {
        assert_eq!(RULE.patterns(), vec!["SysMLStateDiagram", "TStateMachineDiagram"]);
    }
}
