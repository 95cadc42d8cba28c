//! Activity diagram detector
//!
//! Identifies activity diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &[],
    declared_types: &["TActivityDiagram"],
};

/// Detector for activity diagram containers
pub struct ActivityDetector;

impl ActivityDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ActivityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ActivityDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Activity
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
    fn test_detects_activity_container() {
        let detector = ActivityDetector::new();
        assert!(detector.detect(&signals(None, Some("TActivityDiagram"))));
        assert_eq!(detector.confidence(&signals(None, Some("TActivityDiagram"))), 0.8);
    }

    #[test]
    fn test_rejects_other_containers() {
        let detector = ActivityDetector::new();
        assert!(!detector.detect(&signals(None, Some("TStateMachineDiagram"))));
        assert_eq!(detector.confidence(&signals(None, None)), 0.0);
    }
}
