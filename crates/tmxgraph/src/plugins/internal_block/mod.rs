//! Internal block diagram plugin
//!
//! The parts and ports inside one block and the connectors between them.

mod detector;
mod extractor;

pub use detector::InternalBlockDetector;
pub use extractor::InternalBlockExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Internal block diagram implementation
pub struct InternalBlockDiagram;

impl Diagram for InternalBlockDiagram {
    type Extractor = InternalBlockExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(InternalBlockDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        InternalBlockExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::InternalBlock
    }
}
