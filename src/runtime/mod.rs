//! Runtime-facing collaborators and the module records built on top of them.
//!
//! A [`ClrModule`] never reads the target on its own. Everything it knows comes through three
//! collaborator traits that the embedding inspector implements:
//!
//! - [`DataReader`] - random access to the target's memory, live process or minidump
//! - [`RuntimeHost`] - the runtime handle: revision counter, per-module loader facts and
//!   method-table lists
//! - [`TypeCatalog`] - the heap's type catalog, turning method tables into shared [`ClrType`]s
//!
//! # Key Components
//!
//! - [`ClrModule`] - One loaded module, with lazily fetched and cached facts
//! - [`DomainMap`] - The module's address in each application domain
//! - [`RemoteCache`] - Three-state fetch-once slot backing every cached fact
//! - [`ModuleTypes`] - Iterator over the types the catalog attributes to a module
//!
//! # Revisions
//!
//! The runtime's revision counter advances every time a live target resumes and stops again.
//! A module record captures the revision it was built at; reads backed by live handles check
//! that stamp first and fail with [`crate::Error::StaleSnapshot`] once the target has moved.

mod cache;
mod domain;
mod module;
mod types;

pub use cache::{CacheField, CacheState, RemoteCache};
pub use domain::{AppDomain, AppDomainRc, DomainMap};
pub use module::{ClrModule, ClrModuleRc, ModuleInfo, ModuleTypes};
pub use types::{ClrType, ClrTypeRc};

use crate::{
    metadata::{import::MetadataImportRc, token::Token},
    Result,
};

/// Random access to the inspected process's memory
pub trait DataReader: Send + Sync {
    /// Returns true if the target is a reduced snapshot (minidump) rather than a live process
    fn is_minidump(&self) -> bool;

    /// Reads target memory at `address` into `buffer`.
    ///
    /// Returns the number of bytes read, which may be less than `buffer.len()` if the range
    /// crosses into unreadable memory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadFailure`] if nothing at `address` could be read.
    fn read(&self, address: u64, buffer: &mut [u8]) -> Result<usize>;
}

/// A method table paired with the metadata token of the type it was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodTableToken {
    /// Address of the method table
    pub method_table: u64,
    /// Token of the type definition
    pub token: Token,
}

impl MethodTableToken {
    /// Creates a new pair
    #[must_use]
    pub fn new(method_table: u64, token: impl Into<Token>) -> Self {
        MethodTableToken {
            method_table,
            token: token.into(),
        }
    }
}

/// The runtime handle a module record queries
pub trait RuntimeHost: Send + Sync {
    /// The runtime's current revision
    fn revision(&self) -> u32;

    /// The reader over the target's memory
    fn data_reader(&self) -> &dyn DataReader;

    /// The heap's type catalog
    fn catalog(&self) -> &dyn TypeCatalog;

    /// Materializes the metadata importer of the module at `module`.
    ///
    /// Returns `None` if the runtime cannot provide one (dynamic modules, missing metadata).
    fn metadata_import(&self, module: u64) -> Option<MetadataImportRc>;

    /// Computes the image size of the module at `module` from the loader's records.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader's records cannot be read.
    fn image_size(&self, module: u64) -> Result<u64>;

    /// Lists the method tables the runtime has built for the (domain-local) module at `module`.
    fn method_tables(&self, module: u64) -> Vec<MethodTableToken>;

    /// Address of the method table shared by all generic array instantiations
    fn array_method_table(&self) -> u64;
}

/// The heap's type catalog
pub trait TypeCatalog: Send + Sync {
    /// Resolves a method table to its type, registering the type with the catalog.
    ///
    /// Resolving a type may load further types, e.g. the element type of an array.
    ///
    /// # Arguments
    ///
    /// * `method_table` - Address of the method table
    /// * `array_rank` - Rank of the array type, if `method_table` is an array method table
    /// * `depth` - Element-type depth to resolve eagerly
    fn get_type(
        &self,
        method_table: u64,
        array_rank: Option<u32>,
        depth: Option<u32>,
    ) -> Option<ClrTypeRc>;

    /// Enumerates every type the catalog currently knows, in catalog order
    fn types(&self) -> Box<dyn Iterator<Item = ClrTypeRc> + '_>;
}
