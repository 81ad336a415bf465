//! Windows of image bytes copied out of the inspected process.
//!
//! Module images are never opened from disk here: a module's PE image is read through the
//! target's [`crate::runtime::DataReader`] starting at the image base, so the bytes come in the
//! loaded (section-aligned) layout the loader produced. The [`Image`] type owns such a window and
//! gives bounds-checked access to it; [`debug`] extracts the symbol-file descriptor from it.
//!
//! # Key Components
//!
//! - [`Image`] - Owned, bounds-checked view over image bytes
//! - [`debug::PdbInfo`] - Symbol-file descriptor (path, GUID, age)
//! - [`debug::SymbolFileReader`] - Extracts a [`debug::PdbInfo`] from image bytes
//!
//! # Examples
//!
//! ```rust
//! use dotinspect::file::Image;
//!
//! let image = Image::from_mem(vec![0x4D, 0x5A, 0x90, 0x00]);
//! assert_eq!(image.len(), 4);
//! assert_eq!(image.data_slice(0, 2)?, b"MZ");
//! # Ok::<(), dotinspect::Error>(())
//! ```

pub mod debug;

use tracing::trace;

use crate::{runtime::DataReader, Error, Result};

/// Image bytes read from the inspected process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
}

impl Image {
    /// Wraps an owned buffer
    ///
    /// # Arguments
    ///
    /// * `data` - The image bytes, in loaded layout
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> Image {
        Image { data }
    }

    /// Reads up to `len` bytes of image starting at `base` through `reader`.
    ///
    /// Short reads are accepted: the image is truncated to the bytes the reader produced,
    /// which is common for images whose tail is not captured in a minidump.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailure`] if `base` is zero, if `len` does not fit in memory, or
    /// if the reader produced no bytes at all.
    pub fn read_from(reader: &dyn DataReader, base: u64, len: u64) -> Result<Image> {
        let failure = |len: usize| Error::ReadFailure { address: base, len };

        let Ok(size) = usize::try_from(len) else {
            return Err(failure(usize::MAX));
        };

        if base == 0 || size == 0 {
            return Err(failure(size));
        }

        let mut buffer = vec![0u8; size];
        let read = reader.read(base, &mut buffer)?;
        if read == 0 {
            return Err(failure(size));
        }

        trace!(base, requested = size, read, "read image window");
        buffer.truncate(read);
        Ok(Image::from_mem(buffer))
    }

    /// Returns the total number of bytes in the image window
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image window is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw image bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a bounds-checked slice of the image
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the range exceeds the image window.
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let Some(end) = offset.checked_add(len) else {
            return Err(Error::OutOfBounds);
        };

        self.data.get(offset..end).ok_or(Error::OutOfBounds)
    }
}
