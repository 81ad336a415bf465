//! `DebuggableAttribute` decoding.
//!
//! Compilers stamp assemblies with `System.Diagnostics.DebuggableAttribute`. Its serialized form
//! is a two byte prolog (`0x0001`) followed by the constructor arguments. For the common
//! `(bool, bool)` constructor the two argument bytes land at offsets 2 and 3 of the blob; the
//! runtime reads them as raw optimization and debug flag bytes and combines them into a
//! [`DebuggingModes`] value.

use bitflags::bitflags;

use crate::metadata::token::Token;

/// Fully qualified name of the attribute carrying the debugging modes
pub const DEBUGGABLE_ATTRIBUTE: &str = "System.Diagnostics.DebuggableAttribute";

/// Metadata scope the attribute is looked up on (`Assembly` table, row 1)
pub const DEBUGGABLE_ATTRIBUTE_SCOPE: Token = Token(0x2000_0001);

/// Shortest blob that holds both flag bytes
pub const DEBUGGABLE_BLOB_MIN_LEN: usize = 4;

const OPTIMIZATION_FLAGS_OFFSET: usize = 2;
const DEBUG_FLAGS_OFFSET: usize = 3;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Debugging modes of a module, as encoded by `DebuggableAttribute.DebuggingModes`
    pub struct DebuggingModes: u32 {
        /// Runtime default behavior, JIT tracking enabled
        const DEFAULT = 0x0000_0001;
        /// Sequence points from the symbol store are ignored
        const IGNORE_SYMBOL_STORE_SEQUENCE_POINTS = 0x0000_0002;
        /// Edit and continue is enabled
        const ENABLE_EDIT_AND_CONTINUE = 0x0000_0004;
        /// The JIT optimizer is disabled
        const DISABLE_OPTIMIZATIONS = 0x0000_0100;
    }
}

impl DebuggingModes {
    /// No debugging support
    pub const NONE: DebuggingModes = DebuggingModes::empty();

    /// Decode the modes from a serialized `DebuggableAttribute` blob
    ///
    /// Returns `None` if the blob is shorter than [`DEBUGGABLE_BLOB_MIN_LEN`]. Bits outside the
    /// known flags are retained.
    ///
    /// # Arguments
    ///
    /// * `blob` - The raw attribute blob, prolog included
    #[must_use]
    pub fn from_attribute_blob(blob: &[u8]) -> Option<Self> {
        if blob.len() < DEBUGGABLE_BLOB_MIN_LEN {
            return None;
        }

        let optimization = u32::from(*blob.get(OPTIMIZATION_FLAGS_OFFSET)?);
        let debug = u32::from(*blob.get(DEBUG_FLAGS_OFFSET)?);

        Some(Self::from_bits_retain((debug << 8) | optimization))
    }

    /// Returns true unless the JIT optimizer is disabled
    #[must_use]
    pub fn is_optimized(&self) -> bool {
        !self.contains(Self::DISABLE_OPTIMIZATIONS)
    }
}
