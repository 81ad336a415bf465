//! Symbol-file descriptors from a module's debug directory.
//!
//! Images built with symbols carry a CodeView (`RSDS`) record in their debug directory naming
//! the PDB path together with the GUID and age a symbol server keys the file by. Fetching the
//! PDB itself is out of scope; this module only extracts the descriptor.

use std::{fmt, sync::Arc};

use goblin::pe::{options::ParseOptions, PE};

use crate::{file::Image, Result};

/// A reference-counted symbol-file reader
pub type SymbolFileReaderRc = Arc<dyn SymbolFileReader>;

/// Identifies the PDB that belongs to an image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdbInfo {
    /// Path of the PDB as recorded by the linker
    pub path: String,
    /// Signature GUID of the PDB
    pub guid: uguid::Guid,
    /// Age of the PDB
    pub age: u32,
}

impl fmt::Display for PdbInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.path, self.guid, self.age)
    }
}

/// Extracts a [`PdbInfo`] from image bytes
pub trait SymbolFileReader: Send + Sync {
    /// Reads the symbol-file descriptor of `image`.
    ///
    /// Returns `Ok(None)` if the image parses but has no CodeView record.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be parsed.
    fn read_pdb_info(&self, image: &Image) -> Result<Option<PdbInfo>>;
}

/// [`SymbolFileReader`] backed by goblin's PE parser
///
/// The image is expected in loaded layout, so RVAs are used as offsets directly. Only the
/// headers and the debug directory are parsed: the loader does not map the certificate table,
/// and import, resource and TLS data may lie past a truncated window.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeDebugReader;

impl SymbolFileReader for PeDebugReader {
    fn read_pdb_info(&self, image: &Image) -> Result<Option<PdbInfo>> {
        if image.is_empty() {
            return Err(malformed_error!("Empty image window"));
        }

        if image.data_slice(0, 2)? != b"MZ" {
            return Err(malformed_error!("Missing DOS signature"));
        }

        let mut options = ParseOptions::default()
            .with_parse_imports(false)
            .with_parse_resources(false)
            .with_parse_tls_data(false);
        options.resolve_rva = false;
        options.parse_attribute_certificates = false;

        let pe = PE::parse_with_opts(image.data(), &options)?;
        let Some(codeview) = pe
            .debug_data
            .and_then(|debug| debug.codeview_pdb70_debug_info)
        else {
            return Ok(None);
        };

        let filename = codeview
            .filename
            .split(|byte| *byte == 0)
            .next()
            .unwrap_or_default();

        Ok(Some(PdbInfo {
            path: String::from_utf8_lossy(filename).into_owned(),
            guid: uguid::Guid::from_bytes(codeview.signature),
            age: codeview.age,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{pe_image, PE_PDB_AGE, PE_PDB_PATH, PE_PDB_SIGNATURE};

    #[test]
    fn test_read_codeview_record() {
        let image = Image::from_mem(pe_image(false));
        let info = PeDebugReader.read_pdb_info(&image).unwrap().unwrap();

        assert_eq!(info.path, PE_PDB_PATH);
        assert_eq!(info.age, PE_PDB_AGE);
        assert_eq!(info.guid, uguid::Guid::from_bytes(PE_PDB_SIGNATURE));
        assert_eq!(
            info.guid,
            uguid::guid!("03020100-0504-0706-0809-0a0b0c0d0e0f")
        );
    }

    #[test]
    fn test_read_codeview_record_signed() {
        // Certificate table offset lies past the end of the loaded image
        let image = Image::from_mem(pe_image(true));
        let info = PeDebugReader.read_pdb_info(&image).unwrap().unwrap();

        assert_eq!(info.path, PE_PDB_PATH);
        assert_eq!(info.age, PE_PDB_AGE);
    }

    #[test]
    fn test_no_debug_directory() {
        let mut data = pe_image(false);
        // Clear the debug data directory
        let debug_directory = 0x84 + 20 + 96 + 6 * 8;
        data[debug_directory..debug_directory + 8].fill(0);

        let image = Image::from_mem(data);
        assert_eq!(PeDebugReader.read_pdb_info(&image).unwrap(), None);
    }

    #[test]
    fn test_one_byte_is_error() {
        let image = Image::from_mem(vec![b'M']);
        assert!(matches!(
            PeDebugReader.read_pdb_info(&image),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn test_garbage_is_error() {
        let image = Image::from_mem(vec![0xCC; 512]);
        assert!(PeDebugReader.read_pdb_info(&image).is_err());
    }

    #[test]
    fn test_empty_is_error() {
        let image = Image::from_mem(Vec::new());
        assert!(matches!(
            PeDebugReader.read_pdb_info(&image),
            Err(crate::Error::Malformed { .. })
        ));
    }

    #[test]
    fn test_headers_only_is_error() {
        // A DOS header pointing at a PE signature past the end of the window
        let mut data = vec![0u8; 0x40];
        data[0] = b'M';
        data[1] = b'Z';
        data[0x3C] = 0x80;
        let image = Image::from_mem(data);
        assert!(PeDebugReader.read_pdb_info(&image).is_err());
    }

    #[test]
    fn test_pdb_info_display() {
        let info = PdbInfo {
            path: "C:\\build\\Lib.pdb".to_string(),
            guid: uguid::guid!("01234567-89ab-cdef-0123-456789abcdef"),
            age: 3,
        };
        assert_eq!(
            info.to_string(),
            "C:\\build\\Lib.pdb 01234567-89ab-cdef-0123-456789abcdef 3"
        );
    }
}
