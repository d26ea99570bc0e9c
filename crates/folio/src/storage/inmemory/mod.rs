//! Volatile in-process storage backend.

mod repository;

pub use repository::InMemoryRepository;
