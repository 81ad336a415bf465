//! Metadata as seen through the runtime.
//!
//! Module records do not parse metadata themselves; they query the importer the runtime hands
//! out and decode the few well-known values they need.
//!
//! # Key Components
//!
//! - [`token::Token`] - Metadata tokens and row matching
//! - [`import::MetadataImport`] - Queries against a module's metadata
//! - [`debuggable::DebuggingModes`] - Decoded `DebuggableAttribute` flags

pub mod debuggable;
pub mod import;
pub mod token;
