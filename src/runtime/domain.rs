//! Per-domain addresses of a module.
//!
//! A module shared by several application domains is loaded once per domain, at a
//! domain-specific address. The host discovers those loads while enumerating each domain's
//! modules and records them on the module's [`DomainMap`]. Mappings are never removed for the
//! lifetime of the record.
//!
//! The sorted domain list is built once, from whatever mappings exist at the first query that
//! finds at least one mapping. Domains mapped after that are still resolvable through
//! [`DomainMap::domain_module`] but do not show up in [`DomainMap::domains`].

use std::{
    fmt,
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;
use tracing::trace;

/// A reference-counted application domain
pub type AppDomainRc = Arc<AppDomain>;

/// An application domain of the inspected runtime
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppDomain {
    /// Address of the runtime's domain object, identifies the domain
    pub address: u64,
    /// The runtime's numeric domain id
    pub id: u32,
    /// Friendly name of the domain, if the runtime recorded one
    pub name: Option<String>,
}

impl AppDomain {
    /// Creates a new domain
    #[must_use]
    pub fn new(address: u64, id: u32, name: Option<String>) -> Self {
        AppDomain { address, id, name }
    }
}

impl fmt::Display for AppDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.id),
            None => write!(f, "domain {} at 0x{:x}", self.id, self.address),
        }
    }
}

/// Mapping from application domain to the module's address within that domain
#[derive(Default)]
pub struct DomainMap {
    /// Keyed by domain address
    mappings: DashMap<u64, (AppDomainRc, u64)>,
    /// Domain address of the first mapping ever added
    first: OnceLock<u64>,
    /// Sorted by domain id, built on first query
    sorted: OnceLock<Vec<AppDomainRc>>,
}

impl DomainMap {
    /// Creates an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the module is loaded at `address` in `domain`.
    ///
    /// Adding the same domain again replaces its address.
    pub fn add_mapping(&self, domain: AppDomainRc, address: u64) {
        let key = domain.address;
        trace!(domain = domain.id, address, "add domain mapping");

        self.mappings.insert(key, (domain, address));
        let _ = self.first.set(key);
    }

    /// The module's address in `domain`.
    ///
    /// With `None`, any mapped address is returned (the first one added); this serves callers
    /// that only need a valid address for domain-agnostic queries. Returns `None` if no mapping
    /// exists.
    #[must_use]
    pub fn domain_module(&self, domain: Option<&AppDomain>) -> Option<u64> {
        let key = match domain {
            Some(domain) => domain.address,
            None => *self.first.get()?,
        };

        self.mappings.get(&key).map(|entry| entry.value().1)
    }

    /// The mapped domains, sorted ascending by domain id.
    ///
    /// Empty until at least one mapping exists. The list is built once; see the module
    /// documentation.
    #[must_use]
    pub fn domains(&self) -> &[AppDomainRc] {
        if let Some(sorted) = self.sorted.get() {
            return sorted;
        }

        if self.mappings.is_empty() {
            return &[];
        }

        self.sorted.get_or_init(|| {
            let mut domains: Vec<AppDomainRc> = self
                .mappings
                .iter()
                .map(|entry| entry.value().0.clone())
                .collect();
            domains.sort_by_key(|domain| domain.id);
            domains
        })
    }

    /// Number of mapped domains
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns `true` if no domain is mapped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl fmt::Debug for DomainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainMap")
            .field("mappings", &self.mappings.len())
            .field("sorted", &self.sorted.get().is_some())
            .finish()
    }
}
