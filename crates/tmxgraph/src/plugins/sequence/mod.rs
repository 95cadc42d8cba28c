//! Sequence diagram plugin
//!
//! Lifelines and the messages exchanged between them. Messages point at event
//! occurrences, which resolve to the lifeline that owns them.

mod detector;
mod extractor;

pub use detector::SequenceDetector;
pub use extractor::SequenceExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Sequence diagram implementation
pub struct SequenceDiagram;

impl Diagram for SequenceDiagram {
    type Extractor = SequenceExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(SequenceDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        SequenceExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Sequence
    }
}
