//! Class diagram plugin
//!
//! Classes and model elements with their associations, generalizations,
//! realizations and dependencies.

mod detector;
mod extractor;

pub use detector::ClassDetector;
pub use extractor::ClassExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Class diagram implementation
pub struct ClassDiagram;

impl Diagram for ClassDiagram {
    type Extractor = ClassExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(ClassDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        ClassExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Class
    }
}
