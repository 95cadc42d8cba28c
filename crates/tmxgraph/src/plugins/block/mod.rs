//! Block definition diagram plugin
//!
//! Blocks, value types and constraint blocks with their generalizations,
//! associations and compositions.

mod detector;
mod extractor;

pub use detector::BlockDetector;
pub use extractor::BlockExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// Block definition diagram implementation
pub struct BlockDiagram;

impl Diagram for BlockDiagram {
    type Extractor = BlockExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(BlockDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        BlockExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Block
    }
}
