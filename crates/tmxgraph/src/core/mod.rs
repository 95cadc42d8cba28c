//! Core abstractions for triple extraction
//!
//! The document model, identity index, naming utilities and triple
//! serializer shared by every diagram kind, plus the traits each kind's
//! plugin implements.

mod config;
mod context;
mod detector;
mod diagram;
mod document;
mod error;
mod extractor;
mod graph;
mod identity;
pub mod logging;
mod namespace;
pub mod naming;
mod report;
mod triple;
mod types;
pub mod vocabulary;

pub use config::*;
pub use context::*;
pub use detector::*;
pub use diagram::*;
pub use document::*;
pub use error::*;
pub use extractor::*;
pub use graph::*;
pub use identity::*;
pub use logging::*;
pub use namespace::*;
pub use report::*;
pub use triple::*;
pub use types::*;
