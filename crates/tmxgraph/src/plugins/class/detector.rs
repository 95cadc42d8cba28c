//! Class diagram detector
//!
//! Identifies class diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &[],
    declared_types: &["TClassDiagram"],
};

/// Detector for class diagram containers
pub struct ClassDetector;

impl ClassDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ClassDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Class
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULE.patterns()
    }
}
