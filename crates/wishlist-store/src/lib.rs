pub mod access;
pub mod error;
pub mod models;
pub mod queries;
pub mod tables;

use std::sync::RwLock;

use tracing::info;

pub use access::Access;
pub use error::{Result, StoreError};
pub use tables::Tables;

/// In-memory store. All four maps sit behind one lock: reads share it,
/// every mutation takes it exclusively.
#[derive(Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        info!("In-memory store initialised");
        Self::default()
    }

    /// Run `f` under the shared lock.
    pub fn with_tables<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Tables) -> std::result::Result<T, E>,
        E: From<StoreError>,
    {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        f(&tables)
    }

    /// Run `f` under the exclusive lock. Checks and mutations made inside one
    /// call are atomic with respect to every other store operation.
    pub fn with_tables_mut<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Tables) -> std::result::Result<T, E>,
        E: From<StoreError>,
    {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        f(&mut tables)
    }
}
