//! Record store implementations.
//!
//! Concrete implementations of the repository traits from
//! `folio_core::storage`, selected at compile time via feature flags:
//!
//! - `sqlite` (default): durable storage via rusqlite/tokio-rusqlite
//! - `inmemory`: volatile storage for tests and local development
//!
//! The features are mutually exclusive.

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!("Must enable exactly one storage feature: 'sqlite' or 'inmemory'");

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "inmemory")]
mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
