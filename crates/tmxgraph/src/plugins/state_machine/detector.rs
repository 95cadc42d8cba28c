//! State machine diagram detector
//!
//! Identifies state machine diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysMLStateDiagram"],
    declared_types: &["TStateMachineDiagram"],
};

/// Detector for state machine diagram containers
pub struct StateMachineDetector;

impl StateMachineDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StateMachineDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for StateMachineDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::StateMachine
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
    fn test_detects_state_machine_container() {
        let detector = StateMachineDetector::new();
        assert!(detector.detect(&signals(Some("SysMLStateDiagram"), Some("TStateMachineDiagram"))));
        assert_eq!(detector.confidence(&signals(Some("SysMLStateDiagram"), Some("TStateMachineDiagram"))), 1.0);
    }

    #[test]
    fn test_rejects_other_containers() {
        let detector = StateMachineDetector::new();
        assert!(!detector.detect(&signals(None, Some("TActivityDiagram"))));
        assert_eq!(detector.confidence(&signals(None, None)), 0.0);
    }

    #[test]
    fn test_declared_type_alone_is_weaker() {
        let detector = StateMachineDetector::new();
        let confidence = detector.confidence(&signals(None, Some("TStateMachineDiagram")));
        assert_eq!(confidence, 0.8);
        assert!(detector.detect(&signals(None, Some("TStateMachineDiagram"))));
    }
}
