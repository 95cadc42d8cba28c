//! State machine diagram plugin
//!
//! States, regions and pseudo-states connected by transitions. Regions nest
//! inside composite states; transitions stay at diagram level.

mod detector;
mod extractor;

pub use detector::StateMachineDetector;
pub use extractor::StateMachineExtractor;

use crate::core::{Detector, Diagram, DiagramKind};
use std::sync::Arc;

/// State machine diagram implementation
pub struct StateMachineDiagram;

impl Diagram for StateMachineDiagram {
    type Extractor = StateMachineExtractor;

    fn detector() -> Arc<dyn Detector> {
        Arc::new(StateMachineDetector::new())
    }

    fn create_extractor() -> Self::Extractor {
        StateMachineExtractor::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::StateMachine
    }
}
