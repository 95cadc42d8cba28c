//! Package diagram plugin
//!
//! Packages and their element and package imports.

mod detector;
mod extractor;

pub use detector::PackageDetector;
pub use extractor::PackageExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Package diagram implementation
pub struct PackageDiagram;

impl Diagram for PackageDiagram {
    type Extractor = PackageExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(PackageDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        PackageExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Package
    }
}
