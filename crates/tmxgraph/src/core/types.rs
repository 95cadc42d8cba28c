//! Core type definitions: diagram kinds and descriptors

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::document::RawElement;

/// The ten supported diagram kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramKind {
    Requirement,
    Block,
    InternalBlock,
    UseCase,
    Activity,
    Class,
    StateMachine,
    Sequence,
    Package,
    Parametric,
}

impl DiagramKind {
    /// All kinds, in classifier tie-break order
    pub const ALL: [DiagramKind; 10] = [
        DiagramKind::Requirement,
        DiagramKind::InternalBlock,
        DiagramKind::Block,
        DiagramKind::UseCase,
        DiagramKind::Activity,
        DiagramKind::Package,
        DiagramKind::Parametric,
        DiagramKind::Class,
        DiagramKind::StateMachine,
        DiagramKind::Sequence,
    ];

    /// Stable machine name
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramKind::Requirement => "requirement",
            DiagramKind::Block => "block",
            DiagramKind::InternalBlock => "internal-block",
            DiagramKind::UseCase => "use-case",
            DiagramKind::Activity => "activity",
            DiagramKind::Class => "class",
            DiagramKind::StateMachine => "state-machine",
            DiagramKind::Sequence => "sequence",
            DiagramKind::Package => "package",
            DiagramKind::Parametric => "parametric",
        }
    }

    /// Human readable description
    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::Requirement => "Requirements and their derive/satisfy/trace relations",
            DiagramKind::Block => "Block definitions and their structural relations",
            DiagramKind::InternalBlock => "Parts and ports of a block and their connectors",
            DiagramKind::UseCase => "Actors, use cases and their associations",
            DiagramKind::Activity => "Actions, pins and partitions with control/object flows",
            DiagramKind::Class => "Classes and their associations and generalizations",
            DiagramKind::StateMachine => "States, regions and pseudo-states with transitions",
            DiagramKind::Sequence => "Lifelines and the messages exchanged between them",
            DiagramKind::Package => "Packages and their import relations",
            DiagramKind::Parametric => "Constraint properties bound to value properties",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        DiagramKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown diagram kind: {}", s))
    }
}

/// A classified diagram container
#[derive(Debug, Clone, Copy)]
pub struct DiagramDescriptor<'d> {
    pub kind: DiagramKind,
    pub name: &'d str,
    pub root: &'d RawElement,
}

impl<'d> DiagramDescriptor<'d> {
    /// Fallback name for containers without a `name` attribute
    pub const UNNAMED: &'static str = "unnamed diagram";

    pub fn new(kind: DiagramKind, root: &'d RawElement) -> Self {
        let name = root
            .non_empty_attr(super::vocabulary::NAME_ATTR)
            .unwrap_or(Self::UNNAMED);
        Self { kind, name, root }
    }
}
