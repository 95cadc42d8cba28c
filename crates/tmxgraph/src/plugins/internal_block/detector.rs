//! Internal block diagram detector
//!
//! Identifies internal block diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysmlInternalBlockDiagram"],
    declared_types: &[],
};

/// Detector for internal block diagram containers
pub struct InternalBlockDetector;

impl InternalBlockDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InternalBlockDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for InternalBlockDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::InternalBlock
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
    fn test_detects_internal_block_container() {
        let detector = InternalBlockDetector::new();
        assert!(detector.detect(&signals(Some("SysmlInternalBlockDiagram"), Some("TCompositeStructureDiagram"))));
        assert_eq!(detector.confidence(&signals(Some("SysmlInternalBlockDiagram"), Some("TCompositeStructureDiagram"))), 1.0);
    }

    #[test]
    fn test_rejects_other_containers() {
        let detector = InternalBlockDetector::new();
        assert!(!detector.detect(&signals(None, Some("TCompositeStructureDiagram"))));
        assert_eq!(detector.confidence(&signals(None, None)), 0.0);
    }
}
