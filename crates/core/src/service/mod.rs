//! Read-through services.
//!
//! One service per entity kind, each composing the cache-aside client with
//! the record store. Reads go cache first, store on miss, then repopulate
//! the cache; writes persist durably first, then invalidate the affected
//! cache family. Cache outcomes never change a request's result.

mod books;
mod reviews;

pub use books::BookService;
pub use reviews::ReviewService;
