//! Plugin implementations for the supported diagram kinds
//!
//! Each plugin pairs a container detector with a kind-specific extractor.
//! The orchestrator classifies containers and dispatches to them.

pub mod activity;
pub mod block;
pub mod class;
pub mod internal_block;
pub mod orchestrator;
pub mod package;
pub mod parametric;
pub mod requirement;
pub mod sequence;
pub mod state_machine;
pub mod use_case;

pub use activity::*;
pub use block::*;
pub use class::*;
pub use internal_block::*;
pub use orchestrator::*;
pub use package::*;
pub use parametric::*;
pub use requirement::*;
pub use sequence::*;
pub use state_machine::*;
pub use use_case::*;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{
        DiagramDescriptor, DiagramOutcome, Document, ExtractConfig, ExtractContext, Extractor,
        GlobalIdIndex,
    };

    /// Wrap `body` in an XMI root, then extract its first container
    pub fn extract_first(extractor: &dyn Extractor, body: &str) -> DiagramOutcome {
        let xml = format!(
            r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:trufun="http://www.trufun.net">{body}</xmi:XMI>"#
        );
        let document = Document::parse(&xml).unwrap();
        let index = GlobalIdIndex::build(&document);
        let config = ExtractConfig::default();
        let ctx = ExtractContext::new(&document, &index, &config);
        let root = document.iter().find(|e| e.local == "contents").unwrap();
        let diagram = DiagramDescriptor::new(extractor.kind(), root);
        extractor.extract(&diagram, &ctx)
    }

    pub fn triples(outcome: &DiagramOutcome) -> Vec<(&str, &str, &str)> {
        outcome
            .triples
            .iter()
            .map(|t| (t.subject.as_str(), t.relation.as_str(), t.object.as_str()))
            .collect()
    }
}
