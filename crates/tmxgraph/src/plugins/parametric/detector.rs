//! Parametric diagram detector
//!
//! Identifies parametric diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysmlParameterDiagram", "SysmlParametricDiagram"],
    declared_types: &[],
};

/// Detector for parametric diagram containers
pub struct ParametricDetector;

impl ParametricDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParametricDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ParametricDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Parametric
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULE.patterns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals<'a>(stereotype: Option<&'a str>, declared_type: Option<&'a str>) -> ContainerSignals<'a> {
        ContainerSignals {
            tag: "contents",
            name: None,
            stereotype,
            declared_type,
        }
    }

    #[test]
    fn test_detects_parametric_container() {
        let detector = ParametricDetector::new();
        assert!(detector.detect(&signals(Some("SysmlParameterDiagram"), Some("TCompositeStructureDiagram"))));
        assert_eq!(detector.confidence(&signals(Some("SysmlParameterDiagram"), Some("TCompositeStructureDiagram"))), 1.0);
    }

    #[test]
    fn test_rejects_other_containers() {
        let detector = ParametricDetector::new();
        assert!(!detector.detect(&signals(None, Some("TCompositeStructureDiagram"))));
        assert_eq!(detector.confidence(&signals(None, None)), 0.0);
    }
}
