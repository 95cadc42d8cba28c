//! tmxgraph - Turn SysML modeling-tool XML exports into triple graphs
//!
//! A library for classifying the diagrams of a trufun/XMI export and
//! extracting `(subject, relation, object)` triples from them, ready for
//! import into a property graph.
//!
//! # Quick Start
//!
//! ```rust
//! use tmxgraph::extract;
//!
//! let input = r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI">
//!   <contents xmi:id="d" name="Reqs" stereotype="SysmlRequirementDiagram">
//!     <nodes xmi:id="a" name="R1" stereotype="&lt;&lt;requirement&gt;&gt;"/>
//!     <nodes xmi:id="b" name="R2" stereotype="&lt;&lt;requirement&gt;&gt;"/>
//!     <connections source="a" target="b" stereotype="&lt;&lt;derive&gt;&gt;"/>
//!   </contents>
//! </xmi:XMI>"#;
//!
//! let graph = extract(input).unwrap();
//! assert_eq!(graph.triples[0].head.name(), "R1");
//! assert_eq!(graph.triples[0].relation.relation_type, "Derive");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use tmxgraph::prelude::*;
//!
//! let input = r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI">
//!   <contents xmi:id="d" name="Flow" xmi:type="trufun:TGanttDiagram"/>
//! </xmi:XMI>"#;
//!
//! let document = Document::parse(input).unwrap();
//! let config = ExtractConfig::default().with_label("sysml");
//! let (triples, report) = Orchestrator::with_all_plugins().extract(&document, &config);
//!
//! assert!(triples.is_empty());
//! assert_eq!(report.skipped.len(), 1);
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Detector, Diagram, DiagramKind, Document, ExtractConfig, ExtractError, ExtractionReport,
        Extractor, GraphDocument, Triple, TripleGraph,
    };
    pub use crate::plugins::orchestrator::{ContainerClass, Detection, Orchestrator};
    pub use crate::Extraction;
}

use crate::plugins::orchestrator::Orchestrator;

/// Everything one run produced
#[derive(Debug)]
pub struct Extraction {
    pub triples: TripleGraph,
    pub report: ExtractionReport,
    label: String,
}

impl Extraction {
    /// The serializable graph document
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument::from_triples(&self.triples, &self.label)
    }
}

/// Extract a graph document with the default configuration
///
/// # Returns
/// * `Ok(GraphDocument)` - One record per extracted triple
/// * `Err` - If the input is not well-formed XML
pub fn extract(input: &str) -> anyhow::Result<GraphDocument> {
    extract_with_config(input, &ExtractConfig::default())
}

/// Extract a graph document with an explicit configuration
///
/// # Example
/// ```rust
/// use tmxgraph::{extract_with_config, ExtractConfig};
///
/// let input = r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI"/>"#;
/// let graph = extract_with_config(input, &ExtractConfig::new().with_label("sysml")).unwrap();
/// assert!(graph.is_empty());
/// ```
pub fn extract_with_config(input: &str, config: &ExtractConfig) -> anyhow::Result<GraphDocument> {
    Ok(run(input, config)?.to_document())
}

/// Full run: triples plus the report of diagrams, tables and diagnostics
///
/// Fatal errors are [`ExtractError`]s and can be recovered with
/// `downcast_ref`.
pub fn run(input: &str, config: &ExtractConfig) -> anyhow::Result<Extraction> {
    let document = Document::parse(input)?;
    let (triples, report) = Orchestrator::with_all_plugins().extract(&document, config);
    Ok(Extraction {
        triples,
        report,
        label: config.label.clone(),
    })
}
