//! Test doubles for the runtime collaborators
//!
//! Every double counts the calls it receives, so tests can check that cached facts are fetched
//! at most once.


pub use pe::{pe_image, PE_IMAGE_SIZE, PE_PDB_AGE, PE_PDB_PATH, PE_PDB_SIGNATURE};
pub use runtime::{MockCatalog, MockReader, MockRuntime};
pub use symbols::{CountingSymbolReader, MockMetadataImport};

use crate::runtime::ModuleInfo;

/// Default-domain address of the module built by [`module_info`]
pub const MODULE_ADDRESS: u64 = 0x0001_0000;

/// Image base of the module built by [`module_info`]
pub const IMAGE_BASE: u64 = 0x1000_0000;

/// Method table the mock runtime reports for generic arrays
pub const ARRAY_METHOD_TABLE: u64 = 0x0005_0000;

// Helper function to create the facts of a file-backed module
pub fn module_info() -> ModuleInfo {
    ModuleInfo {
        address: MODULE_ADDRESS,
        id: 7,
        index: 1,
        assembly_address: Some(0x0003_0000),
        assembly_name: Some("Lib".to_string()),
        name: Some("C:\\app\\Lib.dll".to_string()),
        is_pe_file: true,
        is_dynamic: false,
        image_base: IMAGE_BASE,
        metadata_address: IMAGE_BASE + 0x2000,
        metadata_length: 0x800,
    }
}
