//! Parametric diagram plugin
//!
//! Constraint properties and the value properties bound to their parameters.
//! Only binding connectors produce triples.

mod detector;
mod extractor;

pub use detector::ParametricDetector;
pub use extractor::ParametricExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Parametric diagram implementation
pub struct ParametricDiagram;

impl Diagram for ParametricDiagram {
    type Extractor = ParametricExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(ParametricDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        ParametricExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Parametric
    }
}
