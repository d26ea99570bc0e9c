//! Core library for the folio book catalog service.
//!
//! This crate contains the storage- and transport-agnostic pieces:
//!
//! - [`catalog`] - domain types (`Book`, `Review`) and input validation
//! - [`cache`] - the cache backend contract and the cache-aside client
//! - [`storage`] - repository traits, pagination, and the store error taxonomy
//! - [`service`] - the read-through services composing cache and storage
//!
//! Concrete backends (SQLite, Redis, in-memory) live in the `folio` binary
//! crate and plug in through the traits defined here.

pub mod cache;
pub mod catalog;
pub mod service;
pub mod storage;
