use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only one variant, [`Error::StaleSnapshot`], ever leaves a [`crate::ClrModule`]: every other
/// failure produced by a collaborator is recovered locally and degrades to an empty or absent
/// result, so a module with partially unreadable data stays usable.
///
/// # Error Categories
///
/// ## Snapshot Errors
/// - [`Error::StaleSnapshot`] - The target resumed since the module record was built
///
/// ## Collaborator Errors
/// - [`Error::ReadFailure`] - The data reader could not supply the requested bytes
/// - [`Error::MetadataFault`] - A metadata query faulted inside the metadata importer
///
/// ## Image Parsing Errors
/// - [`Error::OutOfBounds`] - Attempted to read beyond a buffer
/// - [`Error::Malformed`] - Corrupted or invalid image structure
/// - [`Error::GoblinErr`] - PE parsing errors from goblin crate
///
/// # Examples
///
/// ```rust,no_run
/// use dotinspect::{ClrModule, Error};
///
/// fn import_or_report(module: &ClrModule) {
///     match module.metadata_import() {
///         Ok(Some(_)) => println!("metadata available"),
///         Ok(None) => println!("no metadata for {}", module),
///         Err(Error::StaleSnapshot { module_revision, runtime_revision }) => {
///             eprintln!("re-enumerate: {} != {}", module_revision, runtime_revision);
///         }
///         Err(e) => eprintln!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The runtime's revision moved past the revision the module record was built at.
    ///
    /// The inspected process resumed and stopped again, so live handles held by the record
    /// may point at memory that no longer belongs to its module. The caller has to
    /// re-enumerate the runtime's modules.
    #[error("Stale snapshot - module built at revision {module_revision}, runtime is at revision {runtime_revision}")]
    StaleSnapshot {
        /// Revision captured when the module record was created
        module_revision: u32,
        /// Revision the runtime reports now
        runtime_revision: u32,
    },

    /// Reading target memory failed.
    #[error("Failed to read {len} bytes at 0x{address:x}")]
    ReadFailure {
        /// Start address of the failed read
        address: u64,
        /// Number of bytes requested
        len: usize,
    },

    /// A metadata query faulted.
    ///
    /// Raised by [`crate::metadata::import::MetadataImport`] implementations when the
    /// underlying importer hits an access violation or returns a failure code.
    #[error("Metadata query failed - {0}")]
    MetadataFault(String),

    /// The image is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Error from the goblin crate during PE parsing.
    #[error("{0}")]
    GoblinErr(#[from] goblin::error::Error),
}

/// The result type used throughout dotinspect
pub type Result<T> = std::result::Result<T, Error>;
