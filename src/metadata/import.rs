//! The metadata importer a runtime hands out for a module.
//!
//! The importer answers metadata queries against the module's own metadata blob as the runtime
//! sees it. Implementations wrap whatever the host uses to read metadata (a native importer
//! interface, or an in-process parser over the metadata bytes read from the target). Queries
//! may fault when the backing memory is unreadable; those faults come back as
//! [`crate::Error::MetadataFault`] and are never escalated by [`crate::ClrModule`].

use std::sync::Arc;

use crate::{metadata::token::Token, Result};

/// A reference-counted metadata importer
pub type MetadataImportRc = Arc<dyn MetadataImport>;

/// Metadata queries a module record needs from its importer
pub trait MetadataImport: Send + Sync {
    /// Looks up a custom attribute by its fully qualified type name on the metadata item `scope`.
    ///
    /// Returns the raw attribute blob (prolog included) of the first matching attribute, or
    /// `None` if the item carries no such attribute.
    ///
    /// # Arguments
    ///
    /// * `scope` - Token of the metadata item that owns the attribute
    /// * `name` - Fully qualified attribute type name, e.g. `System.Diagnostics.DebuggableAttribute`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MetadataFault`] if the underlying query faulted.
    fn custom_attribute_by_name(&self, scope: Token, name: &str) -> Result<Option<Vec<u8>>>;
}
