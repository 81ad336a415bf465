//! Method-table resolution across domains.
//!
//! The same logical type is backed by a different method table in every domain its module is
//! loaded in. Types with a usable metadata token are matched against the domain's method-table
//! list by token row; types without one (arrays, pointers) fall back to resolving each
//! candidate through the catalog and comparing identities.

use tracing::trace;

use crate::{
    metadata::token::Token,
    runtime::{AppDomain, ClrModule, ClrType, ClrTypeRc},
};

impl ClrModule {
    /// Finds the method table backing `ty` in `domain`.
    ///
    /// With `None` for `domain`, any domain the module is mapped in is searched. Returns `None`
    /// if the module is not mapped in the domain or the domain has no method table for the
    /// type; both are ordinary outcomes.
    ///
    /// # Arguments
    ///
    /// * `domain` - Domain to search, or `None` for any mapped domain
    /// * `ty` - A type previously resolved through the catalog
    #[must_use]
    pub fn find_method_table(&self, domain: Option<&AppDomain>, ty: &ClrTypeRc) -> Option<u64> {
        let domain_module = self.domain_module(domain)?;
        let entries = self.runtime.method_tables(domain_module);

        let found = if ty.token.is_usable() {
            entries
                .iter()
                .find(|entry| entry.token.same_row(ty.token))
                .map(|entry| entry.method_table)
        } else {
            let catalog = self.runtime.catalog();
            entries
                .iter()
                .find(|entry| {
                    catalog
                        .get_type(entry.method_table, None, Some(0))
                        .is_some_and(|candidate| ClrType::is_same(&candidate, ty))
                })
                .map(|entry| entry.method_table)
        };

        trace!(
            module = self.address(),
            domain_module,
            token = ty.token.value(),
            found = ?found,
            "find method table"
        );
        found
    }

    /// Resolves a type-definition token of this module to its type.
    ///
    /// The module's default-domain method-table list is searched by token row and the match
    /// is resolved through the catalog. Returns `None` for nil or invalid tokens and for tokens
    /// the runtime has not built a method table for.
    #[must_use]
    pub fn resolve_token(&self, token: Token) -> Option<ClrTypeRc> {
        if !token.is_usable() {
            return None;
        }

        let entry = self
            .runtime
            .method_tables(self.address())
            .into_iter()
            .find(|entry| entry.token.same_row(token))?;

        self.runtime
            .catalog()
            .get_type(entry.method_table, None, Some(self.config().prefetch_depth))
    }
}
