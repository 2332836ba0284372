//! # droplink-ledger
//!
//! Ownership ledger access for Droplink: PostgreSQL connection pool,
//! embedded migrations, and the repository implementing the
//! [`OwnershipLedger`](droplink_core::traits::OwnershipLedger) trait.

pub mod connection;
pub mod migration;
pub mod repository;

pub use repository::OwnershipRepository;
