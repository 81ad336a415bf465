// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotinspect
//!
//! Module resolution for out-of-process .NET runtime inspection.
//!
//! Given a snapshot of a process hosting the CLR (a live, stopped process or a minidump),
//! `dotinspect` models each loaded module as a [`ClrModule`] record and answers questions
//! about it (image size, debugging modes, symbol file, types, per-domain method tables)
//! without re-reading the whole process on every query.
//!
//! ## Features
//!
//! - **Fetch-once caching** - Expensive remote facts are fetched on first use and remembered,
//!   failed lookups included
//! - **Revision guard** - Reads backed by live handles fail with [`Error::StaleSnapshot`] once
//!   the target has resumed
//! - **Cross-domain resolution** - The same type is mapped to its method table in every
//!   application domain its module is loaded in
//! - **Type materialization** - A module's types are registered with the heap's type catalog on
//!   the first full enumeration
//!
//! ## Architecture
//!
//! `dotinspect` does not read process memory, enumerate domains or classify method tables on its
//! own. The embedding inspector provides those as collaborator traits:
//!
//! - [`runtime::DataReader`] - Random access to target memory
//! - [`runtime::RuntimeHost`] - Revision counter, loader facts, method-table lists
//! - [`runtime::TypeCatalog`] - Method table to type classification
//! - [`metadata::import::MetadataImport`] - Metadata queries for one module
//!
//! Modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`runtime`] - Module records and the collaborator traits
//! - [`metadata`] - Tokens, metadata importer, `DebuggableAttribute` decoding
//! - [`file`] - Image windows read from the target and symbol-file extraction
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dotinspect::prelude::*;
//!
//! fn list_types(runtime: Arc<dyn RuntimeHost>, modules: Vec<ModuleInfo>) -> dotinspect::Result<()> {
//!     for info in modules {
//!         let module = ClrModule::new(runtime.clone(), info, ModuleConfig::default());
//!         println!("{} ({:?})", module, module.debugging_mode()?);
//!
//!         if let Some(ty) = module.get_type_by_name("Program") {
//!             println!("  entry type at method table 0x{:x}", ty.method_table);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Cache fills, swallowed collaborator failures and stale snapshots are reported through the
//! [`tracing`](https://docs.rs/tracing) facade. The library never installs a subscriber.
//!
//! ## Error Handling
//!
//! Only [`Error::StaleSnapshot`] ever leaves a module record. Unreadable images, faulting
//! metadata queries and missing loader records degrade to absent or empty results.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use dotinspect::prelude::*;
///
/// fn revision_of(module: &ClrModule) -> u32 {
///     module.revision()
/// }
/// ```
pub mod prelude;

pub mod config;
pub mod file;
pub mod metadata;
pub mod runtime;

pub use config::ModuleConfig;
pub use error::{Error, Result};
pub use runtime::{ClrModule, ClrModuleRc, ModuleInfo};
