//! Requirement diagram detector
//!
//! Identifies requirement diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysmlRequirementDiagram"],
    declared_types: &[],
};

/// Detector for requirement diagram containers
pub struct RequirementDetector;

impl RequirementDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequirementDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for RequirementDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Requirement
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
    fn test_detects_requirement_container() {
        let detector = RequirementDetector::new();
        assert!(detector.detect(&signals(Some("SysmlRequirementDiagram"), Some("TClassDiagram"))));
        assert_eq!(detector.confidence(&signals(Some("SysmlRequirementDiagram"), Some("TClassDiagram"))), 1.0);
    }

    #[test]
    fn test_rejects_other_containers() {
        let detector = RequirementDetector::new();
        assert!(!detector.detect(&signals(None, Some("TClassDiagram"))));
        assert_eq!(detector.confidence(&signals(None, None)), 0.0);
    }
}
