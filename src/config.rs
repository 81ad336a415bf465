//! Tunables for module records
//!
//! A [`ModuleConfig`] is handed to every [`crate::ClrModule`] at construction. It controls how much
//! of the target's memory the record is willing to pull for symbol extraction, whether live targets
//! fetch their metadata importer up front, and the element depth used while materializing types.

/// Number of bytes read from the image base when the image size is unknown.
pub const DEFAULT_IMAGE_WINDOW: u64 = 0x1000;

/// Upper bound on the image bytes read for symbol extraction (256 MiB).
pub const MAX_IMAGE_WINDOW: u64 = 0x1000_0000;

/// Configuration for module records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Bytes read from the image base when the loader reports no image size (default: 4096)
    pub fallback_image_window: u64,

    /// Maximum number of image bytes read for symbol extraction (default: 256 MiB)
    pub max_image_window: u64,

    /// Fetch the metadata importer while constructing the record when the target is a live
    /// process. Minidump targets always fetch lazily.
    pub eager_metadata: bool,

    /// Element-type depth passed to the type catalog while walking method tables (default: 0)
    pub prefetch_depth: u32,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            fallback_image_window: DEFAULT_IMAGE_WINDOW,
            max_image_window: MAX_IMAGE_WINDOW,
            eager_metadata: true,
            prefetch_depth: 0,
        }
    }
}

impl ModuleConfig {
    /// Creates a configuration that never touches the target during construction
    ///
    /// Every remote fact, the metadata importer included, is fetched on first use.
    #[must_use]
    pub fn lazy() -> Self {
        Self {
            eager_metadata: false,
            ..Self::default()
        }
    }

    /// Number of bytes to read from the image base, given the image size the loader reported
    #[must_use]
    pub fn image_window(&self, image_size: u64) -> u64 {
        let window = if image_size == 0 {
            self.fallback_image_window
        } else {
            image_size
        };

        window.min(self.max_image_window)
    }
}
