//! # Huddle Storage Layer
//!
//! The SQLite master database handle and the data-store port exposing it.
//!
//! The services facade hands the master handle to products that need raw
//! database access. Connection lifecycle stays with the data-store
//! subsystem: the facade never opens, pools, or closes connections.

mod database;

pub use database::{Database, SQLITE_DRIVER};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared ownership of the master database across products.
pub type SharedDatabase = Arc<Mutex<Database>>;

/// Data-store subsystem port.
pub trait StoreService: Send + Sync {
    /// The master database handle. Read-only access to the handle itself;
    /// callers synchronize through the contained mutex.
    fn master_db(&self) -> SharedDatabase;
}

/// Wrap a database for shared use.
pub fn shared(db: Database) -> SharedDatabase {
    Arc::new(Mutex::new(db))
}
