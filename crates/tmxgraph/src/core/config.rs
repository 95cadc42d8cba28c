//! Extraction settings

use super::vocabulary::CONTAINER_TAG;

/// Entity label used when the caller does not supply one
pub const DEFAULT_LABEL: &str = "tmx";
/// Default bound on nested-node traversal depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Entity label stamped on every head and tail
    pub label: String,
    /// Maximum element depth below a diagram root that is still named
    pub max_depth: usize,
    /// Local tag names treated as diagram containers
    pub container_tags: Vec<String>,
    /// Whether table views are summarized in the report
    pub include_tables: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            container_tags: vec![CONTAINER_TAG.to_string()],
            include_tables: true,
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_container_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.container_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tables(mut self, include_tables: bool) -> Self {
        self.include_tables = include_tables;
        self
    }

    /// Whether an element with this local tag is a diagram container
    pub fn is_container_tag(&self, local: &str) -> bool {
        self.container_tags.iter().any(|tag| tag == local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.label, "tmx");
        assert_eq!(config.max_depth, 256);
        assert!(config.is_container_tag("contents"));
        assert!(!config.is_container_tag("nodes"));
        assert!(config.include_tables);
    }

    #[test]
    fn test_builders() {
        let config = ExtractConfig::new()
            .with_label("sysml")
            .with_max_depth(8)
            .with_container_tags(["diagram", "contents"])
            .with_tables(false);
        assert_eq!(config.label, "sysml");
        assert_eq!(config.max_depth, 8);
        assert!(config.is_container_tag("diagram"));
        assert!(!config.include_tables);
    }
}
