//! The module record.
//!
//! A [`ClrModule`] is created once per loaded module when the host enumerates the runtime's
//! modules. Its identity never changes afterwards; what fills in over its lifetime are the
//! [`RemoteCache`] slots for expensive facts, the [`DomainMap`] and the type-materialization
//! latch.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dotinspect::prelude::*;
//!
//! fn describe(runtime: Arc<dyn RuntimeHost>, info: ModuleInfo) -> dotinspect::Result<()> {
//!     let module = ClrModule::new(runtime, info, ModuleConfig::default());
//!
//!     println!("{} at 0x{:x}, {} bytes", module, module.image_base(), module.image_size());
//!     println!("debugging modes: {:?}", module.debugging_mode()?);
//!     if let Some(pdb) = module.pdb_info() {
//!         println!("symbols: {}", pdb);
//!     }
//!     for ty in module.enumerate_types() {
//!         println!("  {}", ty);
//!     }
//!     Ok(())
//! }
//! ```

mod catalog;
mod resolver;

pub use catalog::ModuleTypes;

use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use tracing::{debug, trace, warn};

use crate::{
    config::ModuleConfig,
    file::{
        debug::{PdbInfo, PeDebugReader, SymbolFileReaderRc},
        Image,
    },
    metadata::{
        debuggable::{DebuggingModes, DEBUGGABLE_ATTRIBUTE, DEBUGGABLE_ATTRIBUTE_SCOPE},
        import::{MetadataImport, MetadataImportRc},
    },
    runtime::{AppDomain, AppDomainRc, CacheField, CacheState, DomainMap, RemoteCache, RuntimeHost},
    Error, Result,
};

/// A reference-counted module record
pub type ClrModuleRc = Arc<ClrModule>;

/// Identity and addressing facts the host reads while enumerating modules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Address of the module in the default domain
    pub address: u64,
    /// The runtime's opaque module id
    pub id: u64,
    /// The runtime's opaque module index
    pub index: u64,
    /// Address of the owning assembly
    pub assembly_address: Option<u64>,
    /// Display name of the owning assembly
    pub assembly_name: Option<String>,
    /// Display name (file path) of the module; `None` for in-memory modules
    pub name: Option<String>,
    /// The module has an on-disk PE image
    pub is_pe_file: bool,
    /// The module was generated at runtime (reflection emit)
    pub is_dynamic: bool,
    /// Base address of the loaded image
    pub image_base: u64,
    /// Start of the metadata blob
    pub metadata_address: u64,
    /// Length of the metadata blob
    pub metadata_length: u64,
}

/// One module loaded into the inspected runtime
pub struct ClrModule {
    runtime: Arc<dyn RuntimeHost>,
    config: ModuleConfig,
    symbols: SymbolFileReaderRc,
    info: ModuleInfo,
    /// Runtime revision at construction
    revision: u32,
    image_size: RemoteCache<u64>,
    debugging_mode: RemoteCache<DebuggingModes>,
    pdb: RemoteCache<PdbInfo>,
    metadata: RemoteCache<MetadataImportRc>,
    domains: DomainMap,
    /// Set once a full method-table walk registered this module's types with the catalog
    types_materialized: AtomicBool,
}

impl ClrModule {
    /// Creates the record for the module described by `info`.
    ///
    /// The record captures the runtime's current revision. On a live target, and unless
    /// `config` asks for lazy construction, the metadata importer is fetched right away.
    ///
    /// # Arguments
    ///
    /// * `runtime` - The runtime handle the module was enumerated from
    /// * `info` - Identity and addressing facts read by the host
    /// * `config` - Tunables for this record
    pub fn new(runtime: Arc<dyn RuntimeHost>, mut info: ModuleInfo, config: ModuleConfig) -> Self {
        if info.name.as_deref().is_some_and(str::is_empty) {
            info.name = None;
        }

        let revision = runtime.revision();
        let module = ClrModule {
            runtime,
            config,
            symbols: Arc::new(PeDebugReader),
            info,
            revision,
            image_size: RemoteCache::new(),
            debugging_mode: RemoteCache::new(),
            pdb: RemoteCache::new(),
            metadata: RemoteCache::new(),
            domains: DomainMap::new(),
            types_materialized: AtomicBool::new(false),
        };

        if config.eager_metadata && !module.runtime.data_reader().is_minidump() {
            let import = module.runtime.metadata_import(module.info.address);
            trace!(
                module = module.info.address,
                present = import.is_some(),
                "eager metadata import fetch"
            );
            module.metadata.fill(import);
        }

        module
    }

    /// Replaces the reader used to extract the symbol-file descriptor
    #[must_use]
    pub fn with_symbol_reader(mut self, reader: SymbolFileReaderRc) -> Self {
        self.symbols = reader;
        self
    }

    /// Address of the module in the default domain
    #[must_use]
    pub fn address(&self) -> u64 {
        self.info.address
    }

    /// The runtime's opaque module id
    #[must_use]
    pub fn id(&self) -> u64 {
        self.info.id
    }

    /// The runtime's opaque module index
    #[must_use]
    pub fn index(&self) -> u64 {
        self.info.index
    }

    /// Address of the owning assembly
    #[must_use]
    pub fn assembly_address(&self) -> Option<u64> {
        self.info.assembly_address
    }

    /// Display name of the owning assembly
    #[must_use]
    pub fn assembly_name(&self) -> Option<&str> {
        self.info.assembly_name.as_deref()
    }

    /// Display name of the module, `None` for in-memory modules
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    /// Returns true if the module has an on-disk PE image
    #[must_use]
    pub fn is_pe_file(&self) -> bool {
        self.info.is_pe_file
    }

    /// Returns true if the module was generated at runtime
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.info.is_dynamic
    }

    /// Base address of the loaded image
    #[must_use]
    pub fn image_base(&self) -> u64 {
        self.info.image_base
    }

    /// Start of the metadata blob
    #[must_use]
    pub fn metadata_address(&self) -> u64 {
        self.info.metadata_address
    }

    /// Length of the metadata blob
    #[must_use]
    pub fn metadata_length(&self) -> u64 {
        self.info.metadata_length
    }

    /// The runtime revision this record was built at
    #[must_use]
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Returns true if the runtime has moved past this record's revision
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.runtime.revision() != self.revision
    }

    /// The configuration this record was built with
    #[must_use]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// State of one of the lazily fetched facts
    #[must_use]
    pub fn cache_state(&self, field: CacheField) -> CacheState {
        match field {
            CacheField::ImageSize => self.image_size.state(),
            CacheField::DebuggingMode => self.debugging_mode.state(),
            CacheField::SymbolFile => self.pdb.state(),
            CacheField::MetadataImport => self.metadata.state(),
        }
    }

    /// Size of the loaded image, `0` if the loader's records could not be read.
    ///
    /// Computed on first use and cached.
    pub fn image_size(&self) -> u64 {
        self.image_size
            .get_or_fetch(|| match self.runtime.image_size(self.info.address) {
                Ok(size) => {
                    trace!(module = self.info.address, size, "fetched image size");
                    Some(size)
                }
                Err(error) => {
                    debug!(module = self.info.address, %error, "image size unavailable");
                    None
                }
            })
            .copied()
            .unwrap_or(0)
    }

    /// The module's metadata importer.
    ///
    /// Returns the importer fetched at construction if there is one, otherwise asks the
    /// runtime for one and caches the outcome. `Ok(None)` means the runtime has no importer for
    /// this module.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleSnapshot`] if the runtime's revision differs from the revision
    /// this record was built at.
    pub fn metadata_import(&self) -> Result<Option<MetadataImportRc>> {
        self.check_revision()?;

        let import = self.metadata.get_or_fetch(|| {
            let import = self.runtime.metadata_import(self.info.address);
            trace!(
                module = self.info.address,
                present = import.is_some(),
                "fetched metadata import"
            );
            import
        });

        Ok(import.cloned())
    }

    /// The module's debugging modes, decoded from its `DebuggableAttribute`.
    ///
    /// [`DebuggingModes::NONE`] if the module has no importer, no attribute, a truncated
    /// attribute blob, or if the metadata query faulted. Computed once and cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleSnapshot`] if the importer has to be fetched while the snapshot
    /// is stale. Nothing is cached in that case.
    pub fn debugging_mode(&self) -> Result<DebuggingModes> {
        let modes = self.debugging_mode.get_or_try_fetch(|| {
            let modes = match self.metadata_import()? {
                Some(import) => self.read_debugging_mode(import.as_ref()),
                None => DebuggingModes::NONE,
            };
            trace!(module = self.info.address, modes = modes.bits(), "decoded debugging modes");
            Ok(Some(modes))
        })?;

        Ok(modes.copied().unwrap_or(DebuggingModes::NONE))
    }

    fn read_debugging_mode(&self, import: &dyn MetadataImport) -> DebuggingModes {
        match import.custom_attribute_by_name(DEBUGGABLE_ATTRIBUTE_SCOPE, DEBUGGABLE_ATTRIBUTE) {
            Ok(Some(blob)) => {
                DebuggingModes::from_attribute_blob(&blob).unwrap_or(DebuggingModes::NONE)
            }
            Ok(None) => DebuggingModes::NONE,
            Err(error) => {
                debug!(module = self.info.address, %error, "debuggable attribute query failed");
                DebuggingModes::NONE
            }
        }
    }

    /// The symbol-file descriptor from the image's debug directory.
    ///
    /// The image is read from the target at the image base, using the image size, or
    /// [`ModuleConfig::fallback_image_window`] bytes when the size is zero. Read and parse
    /// failures are remembered as absent and not retried.
    pub fn pdb_info(&self) -> Option<&PdbInfo> {
        self.pdb.get_or_fetch(|| self.read_pdb_info())
    }

    fn read_pdb_info(&self) -> Option<PdbInfo> {
        if self.info.image_base == 0 {
            return None;
        }

        let window = self.config.image_window(self.image_size());
        let image = match Image::read_from(self.runtime.data_reader(), self.info.image_base, window)
        {
            Ok(image) => image,
            Err(error) => {
                debug!(module = self.info.address, %error, "image unreadable");
                return None;
            }
        };

        match self.symbols.read_pdb_info(&image) {
            Ok(info) => {
                trace!(module = self.info.address, present = info.is_some(), "read pdb info");
                info
            }
            Err(error) => {
                debug!(module = self.info.address, %error, "image debug directory unreadable");
                None
            }
        }
    }

    /// Records that this module is loaded at `address` in `domain`
    pub fn add_mapping(&self, domain: AppDomainRc, address: u64) {
        self.domains.add_mapping(domain, address);
    }

    /// The module's address in `domain`, or in any mapped domain for `None`
    #[must_use]
    pub fn domain_module(&self, domain: Option<&AppDomain>) -> Option<u64> {
        self.domains.domain_module(domain)
    }

    /// Domains this module is loaded in, sorted by domain id
    #[must_use]
    pub fn domains(&self) -> &[AppDomainRc] {
        self.domains.domains()
    }

    fn check_revision(&self) -> Result<()> {
        let runtime_revision = self.runtime.revision();
        if runtime_revision != self.revision {
            warn!(
                module = self.info.address,
                module_revision = self.revision,
                runtime_revision,
                "stale module snapshot"
            );
            return Err(Error::StaleSnapshot {
                module_revision: self.revision,
                runtime_revision,
            });
        }

        Ok(())
    }

    fn set_materialized(&self) {
        self.types_materialized.store(true, Ordering::Release);
    }

    /// Returns true once this module's types have been registered with the catalog
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.types_materialized.load(Ordering::Acquire)
    }
}

impl fmt::Display for ClrModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.info.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "<dynamic module 0x{:x}>", self.info.address),
        }
    }
}

impl fmt::Debug for ClrModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClrModule")
            .field("info", &self.info)
            .field("revision", &self.revision)
            .field("image_size", &self.image_size)
            .field("debugging_mode", &self.debugging_mode)
            .field("pdb", &self.pdb)
            .field("metadata", &self.metadata)
            .field("domains", &self.domains)
            .field("types_materialized", &self.is_materialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use uguid::guid;

    use super::*;
    use crate::test::{
        module_info, pe_image, CountingSymbolReader, MockMetadataImport, MockRuntime,
        MODULE_ADDRESS, PE_IMAGE_SIZE, PE_PDB_AGE, PE_PDB_PATH, PE_PDB_SIGNATURE,
    };

    fn module(runtime: &Arc<MockRuntime>, config: ModuleConfig) -> ClrModule {
        ClrModule::new(runtime.clone(), module_info(), config)
    }

    #[test]
    fn test_identity() {
        let runtime = Arc::new(MockRuntime::new());
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(module.address(), MODULE_ADDRESS);
        assert_eq!(module.name(), Some("C:\\app\\Lib.dll"));
        assert_eq!(module.assembly_name(), Some("Lib"));
        assert!(module.is_pe_file());
        assert!(!module.is_dynamic());
        assert_eq!(module.to_string(), "C:\\app\\Lib.dll");
    }

    #[test]
    fn test_empty_name_is_dynamic_display() {
        let runtime = Arc::new(MockRuntime::new());
        let info = ModuleInfo {
            address: 0x5000,
            name: Some(String::new()),
            is_dynamic: true,
            ..ModuleInfo::default()
        };
        let module = ClrModule::new(runtime, info, ModuleConfig::default());

        assert_eq!(module.name(), None);
        assert_eq!(module.to_string(), "<dynamic module 0x5000>");
        assert!(module.pdb_info().is_none());
    }

    #[test]
    fn test_image_size_fetched_once() {
        let runtime = Arc::new(MockRuntime::new().with_image_size(0x4000));
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(module.cache_state(CacheField::ImageSize), CacheState::Unfetched);
        for _ in 0..4 {
            assert_eq!(module.image_size(), 0x4000);
        }
        assert_eq!(runtime.image_size_calls.load(Ordering::SeqCst), 1);
        assert_eq!(module.cache_state(CacheField::ImageSize), CacheState::Present);
    }

    #[test]
    fn test_image_size_failure_is_zero() {
        let runtime = Arc::new(MockRuntime::new());
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(module.image_size(), 0);
        assert_eq!(module.image_size(), 0);
        assert_eq!(runtime.image_size_calls.load(Ordering::SeqCst), 1);
        assert_eq!(module.cache_state(CacheField::ImageSize), CacheState::Absent);
    }

    #[test]
    fn test_eager_metadata_on_live_target() {
        let import = Arc::new(MockMetadataImport::absent());
        let runtime = Arc::new(MockRuntime::new().with_import(import));
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(runtime.import_calls.load(Ordering::SeqCst), 1);
        assert_eq!(module.cache_state(CacheField::MetadataImport), CacheState::Present);

        for _ in 0..3 {
            assert!(module.metadata_import().unwrap().is_some());
        }
        assert_eq!(runtime.import_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_metadata_on_minidump() {
        let import = Arc::new(MockMetadataImport::absent());
        let runtime = Arc::new(MockRuntime::minidump().with_import(import));
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(runtime.import_calls.load(Ordering::SeqCst), 0);
        assert_eq!(module.cache_state(CacheField::MetadataImport), CacheState::Unfetched);

        assert!(module.metadata_import().unwrap().is_some());
        assert!(module.metadata_import().unwrap().is_some());
        assert_eq!(runtime.import_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_config_skips_eager_fetch() {
        let runtime = Arc::new(MockRuntime::new());
        let module = module(&runtime, ModuleConfig::lazy());

        assert_eq!(runtime.import_calls.load(Ordering::SeqCst), 0);
        assert!(module.metadata_import().unwrap().is_none());
        assert!(module.metadata_import().unwrap().is_none());
        assert_eq!(runtime.import_calls.load(Ordering::SeqCst), 1);
        assert_eq!(module.cache_state(CacheField::MetadataImport), CacheState::Absent);
    }

    #[test]
    fn test_stale_snapshot() {
        let import = Arc::new(MockMetadataImport::absent());
        let runtime = Arc::new(MockRuntime::new().with_import(import));
        let module = module(&runtime, ModuleConfig::default());

        assert!(module.metadata_import().is_ok());
        assert!(!module.is_stale());

        runtime.advance_revision();

        assert!(module.is_stale());
        match module.metadata_import() {
            Err(Error::StaleSnapshot {
                module_revision,
                runtime_revision,
            }) => {
                assert_eq!(module_revision, 1);
                assert_eq!(runtime_revision, 2);
            }
            other => panic!("expected stale snapshot, got {:?}", other.map(|i| i.is_some())),
        }
    }

    #[test]
    fn test_debugging_mode_decoded_once() {
        let import = Arc::new(MockMetadataImport::with_blob(vec![0x01, 0x00, 0x02, 0x01]));
        let runtime = Arc::new(MockRuntime::new().with_import(import.clone()));
        let module = module(&runtime, ModuleConfig::default());

        for _ in 0..3 {
            assert_eq!(module.debugging_mode().unwrap().bits(), 0x0102);
        }
        assert_eq!(import.calls.load(Ordering::SeqCst), 1);
        assert_eq!(module.cache_state(CacheField::DebuggingMode), CacheState::Present);
    }

    #[test]
    fn test_debugging_mode_without_import() {
        let runtime = Arc::new(MockRuntime::new());
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(module.debugging_mode().unwrap(), DebuggingModes::NONE);
    }

    #[test]
    fn test_debugging_mode_fault_is_none() {
        let import = Arc::new(MockMetadataImport::faulting());
        let runtime = Arc::new(MockRuntime::new().with_import(import.clone()));
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(module.debugging_mode().unwrap(), DebuggingModes::NONE);
        assert_eq!(module.debugging_mode().unwrap(), DebuggingModes::NONE);
        assert_eq!(import.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debugging_mode_short_blob_is_none() {
        let import = Arc::new(MockMetadataImport::with_blob(vec![0x01, 0x00, 0x02]));
        let runtime = Arc::new(MockRuntime::new().with_import(import));
        let module = module(&runtime, ModuleConfig::default());

        assert_eq!(module.debugging_mode().unwrap(), DebuggingModes::NONE);
    }

    #[test]
    fn test_debugging_mode_stale_is_not_cached() {
        let import = Arc::new(MockMetadataImport::with_blob(vec![0x01, 0x00, 0x00, 0x01]));
        let runtime = Arc::new(MockRuntime::minidump().with_import(import));
        let module = module(&runtime, ModuleConfig::default());

        runtime.advance_revision();
        assert!(matches!(
            module.debugging_mode(),
            Err(Error::StaleSnapshot { .. })
        ));
        assert_eq!(module.cache_state(CacheField::DebuggingMode), CacheState::Unfetched);
    }

    #[test]
    fn test_pdb_info_fetched_once() {
        let info = PdbInfo {
            path: "Lib.pdb".to_string(),
            guid: guid!("01234567-89ab-cdef-0123-456789abcdef"),
            age: 1,
        };
        let runtime = Arc::new(
            MockRuntime::new()
                .with_image_size(0x200)
                .with_memory(module_info().image_base, vec![0u8; 0x200]),
        );
        let symbols = Arc::new(CountingSymbolReader::returning(Some(info.clone())));
        let module = module(&runtime, ModuleConfig::default()).with_symbol_reader(symbols.clone());

        for _ in 0..3 {
            assert_eq!(module.pdb_info(), Some(&info));
        }
        assert_eq!(symbols.calls.load(Ordering::SeqCst), 1);
        assert_eq!(symbols.last_len.load(Ordering::SeqCst), 0x200);
    }

    #[test]
    fn test_pdb_info_uses_fallback_window() {
        let runtime = Arc::new(
            MockRuntime::new().with_memory(module_info().image_base, vec![0u8; 0x2000]),
        );
        let symbols = Arc::new(CountingSymbolReader::returning(None));
        let module = module(&runtime, ModuleConfig::default()).with_symbol_reader(symbols.clone());

        assert!(module.pdb_info().is_none());
        assert_eq!(symbols.last_len.load(Ordering::SeqCst), 4096);
        assert_eq!(module.cache_state(CacheField::SymbolFile), CacheState::Absent);
    }

    #[test]
    fn test_pdb_info_failure_is_cached() {
        let runtime = Arc::new(
            MockRuntime::new().with_memory(module_info().image_base, vec![0u8; 0x1000]),
        );
        let symbols = Arc::new(CountingSymbolReader::failing());
        let module = module(&runtime, ModuleConfig::default()).with_symbol_reader(symbols.clone());

        assert!(module.pdb_info().is_none());
        assert!(module.pdb_info().is_none());
        assert_eq!(symbols.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pdb_info_unreadable_image() {
        let runtime = Arc::new(MockRuntime::new());
        let symbols = Arc::new(CountingSymbolReader::returning(None));
        let module = module(&runtime, ModuleConfig::default()).with_symbol_reader(symbols.clone());

        assert!(module.pdb_info().is_none());
        assert!(module.pdb_info().is_none());
        assert_eq!(symbols.calls.load(Ordering::SeqCst), 0);
        assert_eq!(module.cache_state(CacheField::SymbolFile), CacheState::Absent);
    }

    #[test]
    fn test_pdb_info_default_reader_on_garbage() {
        let runtime = Arc::new(
            MockRuntime::new().with_memory(module_info().image_base, vec![0xCC; 0x1000]),
        );
        let module = module(&runtime, ModuleConfig::default());

        assert!(module.pdb_info().is_none());
        assert_eq!(module.cache_state(CacheField::SymbolFile), CacheState::Absent);
    }

    #[test]
    fn test_pdb_info_default_reader_signed_image() {
        let runtime = Arc::new(
            MockRuntime::new()
                .with_image_size(PE_IMAGE_SIZE as u64)
                .with_memory(module_info().image_base, pe_image(true)),
        );
        let module = module(&runtime, ModuleConfig::default());

        let info = module.pdb_info().unwrap();
        assert_eq!(info.path, PE_PDB_PATH);
        assert_eq!(info.age, PE_PDB_AGE);
        assert_eq!(info.guid, uguid::Guid::from_bytes(PE_PDB_SIGNATURE));
        assert_eq!(module.cache_state(CacheField::SymbolFile), CacheState::Present);
        assert_eq!(runtime.image_size_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_domains_through_module() {
        let runtime = Arc::new(MockRuntime::new());
        let module = module(&runtime, ModuleConfig::default());
        let shared = Arc::new(AppDomain::new(0xd2, 2, Some("Shared".into())));
        let default = Arc::new(AppDomain::new(0xd1, 1, Some("Default".into())));

        module.add_mapping(shared.clone(), 0x2_0000);
        module.add_mapping(default.clone(), MODULE_ADDRESS);

        assert_eq!(module.domain_module(Some(&default)), Some(MODULE_ADDRESS));
        assert_eq!(module.domain_module(Some(&shared)), Some(0x2_0000));
        assert_eq!(module.domain_module(None), Some(0x2_0000));
        let ids: Vec<u32> = module.domains().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
