use crate::errors::{Error, Result};
use std::collections::HashMap;

/// The address given to the first identifier registered
pub const DEFAULT_BASE_ADDRESS: usize = 1000;

/// The number of bytes reserved for each identifier
pub const DEFAULT_STRIDE: usize = 4;

/// An identifier and the storage address assigned to it
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Entry {
    pub name: String,
    pub address: usize,
}

/// Assigns storage addresses to identifiers. Each distinct identifier gets
/// an address once, on first sight, and keeps it for the lifetime of the
/// register.
pub struct SymbolRegister {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    /// None once the address space is used up
    next_address: Option<usize>,
    stride: usize,
}

impl Default for SymbolRegister {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ADDRESS, DEFAULT_STRIDE)
    }
}

impl SymbolRegister {
    /// Returns a new, empty register which will assign base to the first
    /// identifier and step each subsequent address by stride
    pub fn new(base: usize, stride: usize) -> SymbolRegister {
        SymbolRegister {
            entries: Vec::new(),
            index: HashMap::new(),
            next_address: Some(base),
            stride,
        }
    }

    /// Registers an identifier and returns its address. If the identifier
    /// is already registered, its existing address is returned. Returns an
    /// error if a new identifier has no address left to take.
    pub fn register(&mut self, name: &str) -> Result<usize> {
        if let Some(i) = self.index.get(name) {
            return Ok(self.entries[*i].address);
        }

        let Some(address) = self.next_address else {
            return Err(Error::AddressOverflow(name.to_string()));
        };
        self.next_address = address.checked_add(self.stride);

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(Entry {
            name: name.to_string(),
            address,
        });

        Ok(address)
    }

    /// Returns the address of an identifier, if it has been registered
    pub fn address(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|i| self.entries[*i].address)
    }

    /// Returns the number of registered identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no identifiers have been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all registered identifiers. They currently come back in the
    /// order they were first registered, but callers shouldn't depend on it.
    pub fn dump(&self) -> &[Entry] {
        &self.entries
    }
}
