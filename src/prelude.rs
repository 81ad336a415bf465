//! # dotinspect Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotinspect library. Import this module to get quick access to the module record,
//! its collaborators, and the types its queries return.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotinspect operations
pub use crate::Error;

/// The result type used throughout dotinspect
pub use crate::Result;

/// Configuration for module records
pub use crate::ModuleConfig;

// ================================================================================================
// Module Records
// ================================================================================================

/// The module record and its construction facts
pub use crate::runtime::{ClrModule, ClrModuleRc, ModuleInfo, ModuleTypes};

/// Application domains and per-domain addresses
pub use crate::runtime::{AppDomain, AppDomainRc, DomainMap};

/// Type entities handed out by the catalog
pub use crate::runtime::{ClrType, ClrTypeRc};

/// Cache inspection
pub use crate::runtime::{CacheField, CacheState};

// ================================================================================================
// Collaborators
// ================================================================================================

/// Traits the embedding inspector implements
pub use crate::runtime::{DataReader, MethodTableToken, RuntimeHost, TypeCatalog};

/// Metadata importer handed out by the runtime
pub use crate::metadata::import::{MetadataImport, MetadataImportRc};

/// Symbol-file extraction
pub use crate::file::debug::{PdbInfo, PeDebugReader, SymbolFileReader};

// ================================================================================================
// Metadata
// ================================================================================================

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

/// Decoded `DebuggableAttribute` flags
pub use crate::metadata::debuggable::DebuggingModes;
