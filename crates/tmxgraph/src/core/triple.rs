//! Triples and the append-only collector

use std::fmt;

/// One extracted fact: subject, relation label, object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.relation, self.object)
    }
}

impl<S: Into<String>, R: Into<String>, O: Into<String>> From<(S, R, O)> for Triple {
    fn from((subject, relation, object): (S, R, O)) -> Self {
        Self::new(subject, relation, object)
    }
}

/// Ordered, append-only list of triples for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleGraph {
    triples: Vec<Triple>,
}

impl TripleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one triple
    pub fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Append the triples of another graph, preserving their order
    pub fn append(&mut self, other: TripleGraph) {
        self.triples.extend(other.triples);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn as_slice(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl<'a> IntoIterator for &'a TripleGraph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for TripleGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut graph = TripleGraph::new();
        graph.push(Triple::new("A", "Derive", "B"));
        let other: TripleGraph = vec![Triple::from(("B", "Satisfy", "C"))].into_iter().collect();
        graph.append(other);

        let relations: Vec<&str> = graph.iter().map(|t| t.relation.as_str()).collect();
        assert_eq!(relations, vec!["Derive", "Satisfy"]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Triple::new("R1", "Derive", "R2").to_string(), "(R1, Derive, R2)");
    }
}
