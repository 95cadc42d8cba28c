//! Use case diagram plugin
//!
//! Actors (modeled as `<<block>>` elements) and the use cases they take part in.

mod detector;
mod extractor;

pub use detector::UseCaseDetector;
pub use extractor::UseCaseExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Use case diagram implementation
pub struct UseCaseDiagram;

impl Diagram for UseCaseDiagram {
    type Extractor = UseCaseExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(UseCaseDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        UseCaseExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::UseCase
    }
}
