//! Requirement diagram plugin
//!
//! Requirements and the derive, satisfy, verify and trace relations between them.
//! Relation labels come from the connection stereotype, e.g. `<<deriveReqt>>`.

mod detector;
mod extractor;

pub use detector::RequirementDetector;
pub use extractor::RequirementExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Requirement diagram implementation
pub struct RequirementDiagram;

impl Diagram for RequirementDiagram {
    type Extractor = RequirementExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(RequirementDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        RequirementExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Requirement
    }
}
