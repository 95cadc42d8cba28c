//! Activity diagram plugin
//!
//! Actions, pins, decisions and partitions connected by control and object
//! flows. Nodes nest inside partitions; flows stay at diagram level.

mod detector;
mod extractor;

pub use detector::ActivityDetector;
pub use extractor::ActivityExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Activity diagram implementation
pub struct ActivityDiagram;

impl Diagram for ActivityDiagram {
    type Extractor = ActivityExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(ActivityDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        ActivityExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Activity
    }
}
