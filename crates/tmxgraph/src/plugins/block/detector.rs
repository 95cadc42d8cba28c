//! Block definition diagram detector
//!
//! Identifies block definition diagram containers from their stereotype or declared type.

use crate::core::{ContainerSignals, Detector, DiagramKind, SignalRule};

const RULE: SignalRule = SignalRule {
    stereotypes: &["SysmlBlockDiagram"],
    declared_types: &[],
};

/// Detector for block definition diagram containers
pub struct BlockDetector;

impl BlockDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlockDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for BlockDetector {
    fn confidence(&self, signals: &ContainerSignals<'_>) -> f64 {
        RULE.score(signals)
    }

    fn diagram_kind(&self) -> DiagramKind {
        DiagramKind::Block
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULE.patterns()
    }
}
