// Application layer - use cases over the ledger and its store.
// Every mutating use case rewrites the store once the ledger has changed.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
