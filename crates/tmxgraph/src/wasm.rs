//! WebAssembly bindings for tmxgraph
//!
//! Browser-friendly wrappers that take the XML export as a string and
//! return JSON.

use wasm_bindgen::prelude::*;

use crate::core::{DiagramKind, ExtractConfig};
use crate::plugins::orchestrator::{ContainerClass, Orchestrator};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Extract the graph document as pretty-printed JSON
///
/// # Arguments
/// * `input` - XML export text
/// * `label` - Entity label for every head and tail
///
/// # Returns
/// * The graph document as JSON
/// * Throws a JavaScript error if the input is malformed
#[wasm_bindgen]
pub fn extract_graph(input: &str, label: &str) -> Result<String, JsValue> {
    let config = ExtractConfig::new().with_label(label);
    let document = crate::extract_with_config(input, &config)
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    document
        .to_json_pretty()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))
}

/// Extract and return JSON with the graph, the report and any error
///
/// # Returns
/// * JSON string with fields: graph, diagrams, skipped, diagnostics, error
#[wasm_bindgen]
pub fn extract_graph_json(input: &str, label: &str) -> String {
    let config = ExtractConfig::new().with_label(label);
    match crate::run(input, &config) {
        Ok(extraction) => {
            let diagnostics: Vec<String> = extraction
                .report
                .diagnostics
                .iter()
                .map(|d| d.to_string())
                .collect();
            serde_json::json!({
                "graph": extraction.to_document(),
                "diagrams": extraction.report.diagrams,
                "skipped": extraction.report.skipped,
                "tables": extraction.report.tables,
                "diagnostics": diagnostics,
                "error": null
            })
            .to_string()
        }
        Err(e) => serde_json::json!({
            "graph": null,
            "diagrams": [],
            "skipped": [],
            "tables": [],
            "diagnostics": [],
            "error": format!("{}", e)
        })
        .to_string(),
    }
}

/// Classify every diagram container; returns a JSON array
#[wasm_bindgen]
pub fn detect_diagrams(input: &str) -> Result<String, JsValue> {
    let document = crate::core::Document::parse(input)
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let detections = Orchestrator::with_all_plugins().detect(&document, &ExtractConfig::default());
    let rows: Vec<serde_json::Value> = detections
        .iter()
        .map(|detection| {
            let kind = match detection.class {
                ContainerClass::Diagram(kind) => kind.as_str(),
                ContainerClass::Table => "table",
                ContainerClass::Unrecognized => "unrecognized",
            };
            serde_json::json!({ "name": detection.name, "id": detection.id, "kind": kind })
        })
        .collect();
    Ok(serde_json::Value::Array(rows).to_string())
}

/// Supported diagram kinds, as a JSON array of names
#[wasm_bindgen]
pub fn diagram_kinds() -> String {
    let kinds: Vec<&str> = DiagramKind::ALL.iter().map(|kind| kind.as_str()).collect();
    serde_json::json!(kinds).to_string()
}
