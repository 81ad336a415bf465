//! Enumerating a module's types through the heap's type catalog.
//!
//! Until a module's types have been registered with the catalog, enumeration walks the
//! module's own method-table list and resolves every entry, which registers the type (and
//! whatever element types resolving it pulls in) as a side effect. Once a walk has run to the
//! end the module is marked materialized, and from then on enumeration only filters the
//! catalog's view. Types loaded into the module after that point are visible only if the
//! catalog learned about them some other way.

use std::vec;

use tracing::debug;

use crate::runtime::{ClrModule, ClrTypeRc, MethodTableToken};

impl ClrModule {
    /// Enumerates the types belonging to this module.
    ///
    /// Method-table entries the catalog cannot resolve are skipped, as is the runtime's shared
    /// generic-array method table.
    #[must_use]
    pub fn enumerate_types(&self) -> ModuleTypes<'_> {
        let walk = if self.is_materialized() {
            TypeWalk::Catalog(self.runtime.catalog().types())
        } else {
            TypeWalk::MethodTables {
                entries: self.runtime.method_tables(self.address()).into_iter(),
                array_method_table: self.runtime.array_method_table(),
                resolved: 0,
            }
        };

        ModuleTypes { module: self, walk }
    }

    /// Finds the first type, in enumeration order, whose name is exactly `name`
    #[must_use]
    pub fn get_type_by_name(&self, name: &str) -> Option<ClrTypeRc> {
        self.enumerate_types().find(|ty| ty.name() == Some(name))
    }
}

enum TypeWalk<'a> {
    /// Filtering the catalog's view of all types
    Catalog(Box<dyn Iterator<Item = ClrTypeRc> + 'a>),
    /// Resolving the module's method tables one by one
    MethodTables {
        entries: vec::IntoIter<MethodTableToken>,
        array_method_table: u64,
        resolved: usize,
    },
    Done,
}

/// Iterator over the types of one module, see [`ClrModule::enumerate_types`]
pub struct ModuleTypes<'a> {
    module: &'a ClrModule,
    walk: TypeWalk<'a>,
}

impl Iterator for ModuleTypes<'_> {
    type Item = ClrTypeRc;

    fn next(&mut self) -> Option<ClrTypeRc> {
        match &mut self.walk {
            TypeWalk::Catalog(types) => {
                let module = self.module.address();
                types.find(|ty| ty.module == module)
            }
            TypeWalk::MethodTables {
                entries,
                array_method_table,
                resolved,
            } => {
                let catalog = self.module.runtime.catalog();
                let depth = self.module.config().prefetch_depth;

                for entry in entries.by_ref() {
                    if entry.method_table == *array_method_table {
                        continue;
                    }

                    if let Some(ty) = catalog.get_type(entry.method_table, None, Some(depth)) {
                        *resolved += 1;
                        return Some(ty);
                    }
                }

                debug!(
                    module = self.module.address(),
                    resolved = *resolved,
                    "module types materialized"
                );
                self.module.set_materialized();
                self.walk = TypeWalk::Done;
                None
            }
            TypeWalk::Done => None,
        }
    }
}
