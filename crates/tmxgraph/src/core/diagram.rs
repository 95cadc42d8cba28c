//! Core diagram trait for all diagram kinds
//!
//! A diagram kind bundles its container detector with its extractor so the
//! orchestrator can register every kind through one call.

use std::sync::Arc;

use super::{Detector, DiagramKind, Extractor};

/// Core trait for diagram kinds
///
/// # Example
/// ```
/// use tmxgraph::core::{Diagram, DiagramKind};
/// use tmxgraph::plugins::requirement::RequirementDiagram;
///
/// assert_eq!(RequirementDiagram::kind(), DiagramKind::Requirement);
/// assert_eq!(RequirementDiagram::name(), "requirement");
/// ```
pub trait Diagram: Send + Sync {
    /// The extractor type for this kind
    type Extractor: Extractor + 'static;

    /// Get the container detector for this kind
    fn detector() -> Arc<dyn Detector>;

    /// Create a new extractor instance
    fn create_extractor() -> Self::Extractor;

    /// The kind this diagram implements
    fn kind() -> DiagramKind;

    /// Get the name of this diagram kind
    fn name() -> &'static str {
        Self::kind().as_str()
    }

    /// Get the version of this diagram kind
    fn version() -> &'static str {
        "0.1.0"
    }
}
