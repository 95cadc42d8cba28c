//! Package diagram detector
//!
//! Identifies package diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysMlPackageDiagram"],
    declared_types: &[],
};

/// Detector for package diagram containers
pub struct PackageDetector;

impl PackageDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for PackageDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Package
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULE.patterns()
    }
}
