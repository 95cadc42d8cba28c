//! Plugin orchestrator for coordinating the extraction pipeline
//!
//! The orchestrator drives every diagram container through the plugins:
//! Classify (detectors) → Extract (per-kind extractor) → Collect (triples)

use std::sync::Arc;

use tracing::{debug, info, span, warn, Level};

use crate::core::vocabulary::{NAME_ATTR, OWNER_ATTR, TABLE_TYPE};
use crate::core::{
    ContainerSignals, Detector, Diagram, DiagramDescriptor, DiagramKind, DiagramSummary, Document,
    ExtractConfig, ExtractContext, ExtractError, ExtractionReport, Extractor, GlobalIdIndex,
    RawElement, SkippedContainer, TableSummary, TripleGraph,
};
use crate::plugins::{
    ActivityDiagram, BlockDiagram, ClassDiagram, InternalBlockDiagram, PackageDiagram,
    ParametricDiagram, RequirementDiagram, SequenceDiagram, StateMachineDiagram, UseCaseDiagram,
};

/// One registered diagram kind
struct Plugin {
    detector: Arc<dyn Detector>,
    extractor: Box<dyn Extractor>,
}

/// How a container was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerClass {
    Diagram(DiagramKind),
    Table,
    Unrecognized,
}

/// One container found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub name: String,
    pub id: Option<String>,
    pub class: ContainerClass,
}

/// Plugin orchestrator that coordinates the entire pipeline
///
/// Detectors are consulted in registration order; the highest confidence
/// wins and ties go to the kind registered first.
pub struct Orchestrator {
    plugins: Vec<Plugin>,
}

impl Orchestrator {
    /// Create a new empty orchestrator
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Create an orchestrator with every diagram kind registered
    pub fn with_all_plugins() -> Self {
        let mut orchestrator = Self::new();
        orchestrator.register::<RequirementDiagram>();
        orchestrator.register::<InternalBlockDiagram>();
        orchestrator.register::<BlockDiagram>();
        orchestrator.register::<UseCaseDiagram>();
        orchestrator.register::<ActivityDiagram>();
        orchestrator.register::<PackageDiagram>();
        orchestrator.register::<ParametricDiagram>();
        orchestrator.register::<ClassDiagram>();
        orchestrator.register::<StateMachineDiagram>();
        orchestrator.register::<SequenceDiagram>();
        orchestrator
    }

    /// Register a diagram kind's detector and extractor
    pub fn register<D: Diagram>(&mut self) {
        debug!(kind = D::name(), version = D::version(), "Registering plugin");
        self.plugins.push(Plugin {
            detector: D::detector(),
            extractor: Box::new(D::create_extractor()),
        });
    }

    /// Kinds in registration order
    pub fn registered_kinds(&self) -> Vec<DiagramKind> {
        self.plugins
            .iter()
            .map(|plugin| plugin.detector.diagram_kind())
            .collect()
    }

    /// Best-matching kind for a container's signals
    pub fn classify(&self, signals: &ContainerSignals<'_>) -> Option<DiagramKind> {
        self.best_plugin(signals)
            .map(|plugin| plugin.extractor.kind())
    }

    fn best_plugin(&self, signals: &ContainerSignals<'_>) -> Option<&Plugin> {
        let mut best: Option<(&Plugin, f64)> = None;
        for plugin in &self.plugins {
            if !plugin.detector.detect(signals) {
                continue;
            }
            let confidence = plugin.detector.confidence(signals);
            debug!(
                kind = %plugin.detector.diagram_kind(),
                confidence,
                "Detector matched"
            );
            if best.map_or(true, |(_, score)| confidence > score) {
                best = Some((plugin, confidence));
            }
        }
        best.map(|(plugin, _)| plugin)
    }

    /// Classify every container without extracting
    pub fn detect(&self, document: &Document, config: &ExtractConfig) -> Vec<Detection> {
        containers(document, config)
            .map(|element| {
                let signals = ContainerSignals::of(element, &document.keys);
                let class = if signals.declared_type == Some(TABLE_TYPE) {
                    ContainerClass::Table
                } else {
                    self.classify(&signals)
                        .map_or(ContainerClass::Unrecognized, ContainerClass::Diagram)
                };
                Detection {
                    name: container_name(element),
                    id: document.keys.id_of(element).map(str::to_string),
                    class,
                }
            })
            .collect()
    }

    /// Extract triples from every recognized diagram, in document order
    pub fn extract(&self, document: &Document, config: &ExtractConfig) -> (TripleGraph, ExtractionReport) {
        let extract_span = span!(Level::INFO, "extract_triples", plugins = self.plugins.len());
        let _enter = extract_span.enter();

        let index = GlobalIdIndex::build(document);
        let ctx = ExtractContext::new(document, &index, config);
        let mut graph = TripleGraph::new();
        let mut report = ExtractionReport::new();

        for element in containers(document, config) {
            let signals = ContainerSignals::of(element, &document.keys);

            if signals.declared_type == Some(TABLE_TYPE) {
                if config.include_tables {
                    let table = table_summary(element, &ctx);
                    info!(table = table.name.as_str(), owner = table.owner.as_deref(), "Table view");
                    report.tables.push(table);
                }
                continue;
            }

            let Some(plugin) = self.best_plugin(&signals) else {
                let err = ExtractError::UnrecognizedDiagramKind {
                    name: container_name(element),
                    stereotype: signals.stereotype.unwrap_or("none").to_string(),
                    declared_type: signals.declared_type.unwrap_or("none").to_string(),
                };
                warn!(error = %err, "Skipping container");
                report.skipped.push(SkippedContainer {
                    name: container_name(element),
                    reason: err.to_string(),
                });
                report.diagnostics.push(err);
                continue;
            };

            let kind = plugin.extractor.kind();
            let descriptor = DiagramDescriptor::new(kind, element);
            let outcome = plugin.extractor.extract(&descriptor, &ctx);

            if let Some(err) = outcome
                .diagnostics
                .iter()
                .find(|d| matches!(d, ExtractError::MissingInteraction { .. }))
            {
                report.skipped.push(SkippedContainer {
                    name: descriptor.name.to_string(),
                    reason: err.to_string(),
                });
            } else {
                report.diagrams.push(DiagramSummary {
                    kind,
                    name: descriptor.name.to_string(),
                    nodes: outcome.nodes,
                    triples: outcome.triples.len(),
                });
            }
            report.diagnostics.extend(outcome.diagnostics);
            graph.append(outcome.triples);
        }

        info!(
            diagrams = report.diagrams.len(),
            skipped = report.skipped.len(),
            tables = report.tables.len(),
            triples = graph.len(),
            diagnostics = report.diagnostics.len(),
            "Extraction completed"
        );
        (graph, report)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::with_all_plugins()
    }
}

fn containers<'d>(
    document: &'d Document,
    config: &'d ExtractConfig,
) -> impl Iterator<Item = &'d RawElement> + 'd {
    document
        .iter()
        .filter(move |element| config.is_container_tag(&element.local))
}

fn container_name(element: &RawElement) -> String {
    element
        .non_empty_attr(NAME_ATTR)
        .unwrap_or(DiagramDescriptor::UNNAMED)
        .to_string()
}

/// Name of a referenced element, or a placeholder naming the dangling ID
fn reference_name(ctx: &ExtractContext<'_>, id: Option<&str>, role: &str) -> Option<String> {
    id.map(|id| match ctx.index.get(id) {
        Some(name) => name.to_string(),
        None => format!("unknown {role} (id: {id})"),
    })
}

fn table_summary(element: &RawElement, ctx: &ExtractContext<'_>) -> TableSummary {
    TableSummary {
        name: element
            .non_empty_attr(NAME_ATTR)
            .unwrap_or("unnamed table")
            .to_string(),
        id: ctx.document.keys.id_of(element).map(str::to_string),
        owner: reference_name(ctx, element.non_empty_attr(OWNER_ATTR), "owner"),
        row_scope: reference_name(ctx, element.non_empty_attr("rowScopes"), "scope"),
        table_define_id: element.non_empty_attr("tableDefineID").map(str::to_string),
        editor_id: element.non_empty_attr("editorID").map(str::to_string),
    }
}
