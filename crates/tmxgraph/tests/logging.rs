//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations.

use std::str::FromStr;
use tmxgraph::core::logging::{init_logging, resolve_settings, LogFormat};
use tmxgraph::{run, ExtractConfig};

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("COMPACT").unwrap(), LogFormat::Compact);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert_eq!(variants, &["compact", "pretty", "json"]);
}

#[test]
fn test_explicit_settings_override_environment() {
    let settings = resolve_settings(Some("tmxgraph::plugins=trace"), Some("pretty")).unwrap();
    assert_eq!(settings.directive, "tmxgraph::plugins=trace");
    assert_eq!(settings.format, LogFormat::Pretty);
}

#[test]
fn test_init_logging_with_levels() {
    // Only the first call can install the global subscriber
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("off"), Some("compact"));
}

#[test]
fn test_init_logging_rejects_bad_format() {
    assert!(init_logging(Some("info"), Some("xml")).is_err());
}

#[test]
fn test_extraction_with_subscriber_installed() {
    let _ = init_logging(Some("trace"), Some("json"));
    let input = r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI">
        <contents name="States" xmi:type="trufun:TStateMachineDiagram">
            <nodes xmi:id="i" xmi:type="trufun:TInitialStateNode"/>
            <connections source="i" target="gone"/>
        </contents>
    </xmi:XMI>"#;
    let extraction = run(input, &ExtractConfig::default()).unwrap();
    assert_eq!(extraction.triples.len(), 1);
    assert_eq!(extraction.report.unresolved_count(), 1);
}
