//! Sequence diagram detector
//!
//! Identifies sequence diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysMLSequenceDiagram"],
    declared_types: &["TSequenceDiagram"],
};

/// Detector for sequence diagram containers
pub struct SequenceDetector;

impl SequenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SequenceDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Sequence
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULE.patterns()
    }
}
