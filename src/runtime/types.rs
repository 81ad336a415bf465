use std::{fmt, sync::Arc};

use crate::metadata::token::Token;

/// A reference-counted type entity
///
/// The catalog hands out one shared instance per distinct type, so two `ClrTypeRc`s denote the
/// same type exactly when they point at the same allocation (see [`ClrType::is_same`]).
pub type ClrTypeRc = Arc<ClrType>;

/// A type entity as classified by the heap's type catalog
#[derive(Debug)]
pub struct ClrType {
    /// Fully qualified type name, `None` if the runtime could not name the type
    pub name: Option<String>,
    /// Metadata token of the type definition, nil for arrays and pointers
    pub token: Token,
    /// Method table the catalog resolved this type from
    pub method_table: u64,
    /// Address of the owning module, `0` if the type has none
    pub module: u64,
}

impl ClrType {
    /// Creates a new type entity
    #[must_use]
    pub fn new(name: Option<String>, token: Token, method_table: u64, module: u64) -> Self {
        ClrType {
            name,
            token,
            method_table,
            module,
        }
    }

    /// The type's name, if known
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if `a` and `b` are the same catalog entity
    #[must_use]
    pub fn is_same(a: &ClrTypeRc, b: &ClrTypeRc) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl fmt::Display for ClrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "<unknown type 0x{:x}>", self.method_table),
        }
    }
}
