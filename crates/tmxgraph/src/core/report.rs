//! Run report: what was extracted, skipped and diagnosed

use serde::Serialize;

use super::error::ExtractError;
use super::types::DiagramKind;

/// One extracted diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramSummary {
    pub kind: DiagramKind,
    pub name: String,
    pub nodes: usize,
    pub triples: usize,
}

/// A container that was not extracted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedContainer {
    pub name: String,
    pub reason: String,
}

/// Metadata of a table view; tables carry no triples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub id: Option<String>,
    pub owner: Option<String>,
    pub row_scope: Option<String>,
    pub table_define_id: Option<String>,
    pub editor_id: Option<String>,
}

/// Everything a run produced besides the triples themselves
#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub diagrams: Vec<DiagramSummary>,
    pub skipped: Vec<SkippedContainer>,
    pub tables: Vec<TableSummary>,
    /// Non-fatal conditions, in traversal order
    pub diagnostics: Vec<ExtractError>,
}

impl ExtractionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triple_count(&self) -> usize {
        self.diagrams.iter().map(|d| d.triples).sum()
    }

    /// Number of diagnostics of one variant, matched by predicate
    pub fn count_where(&self, predicate: impl Fn(&ExtractError) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| predicate(d)).count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.count_where(|d| matches!(d, ExtractError::UnresolvedReference { .. }))
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
