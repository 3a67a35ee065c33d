//! [`Catalog`]-related implementations.

pub mod in_memory;

pub use self::in_memory::InMemory;

/// Catalog operation.
pub use common::Handler as Catalog;

/// [`Catalog`] error.
///
/// [`InMemory`] lookups never fail.
pub type Error = std::convert::Infallible;
