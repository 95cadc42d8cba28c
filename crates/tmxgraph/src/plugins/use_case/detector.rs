//! Use case diagram detector
//!
//! Identifies use case diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &[],
    declared_types: &["TUsecaseDiagram", "TUseCaseDiagram"],
};

/// Detector for use case diagram containers
pub struct UseCaseDetector;

impl UseCaseDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UseCaseDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for UseCaseDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::UseCase
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULE.patterns()
    }
}
