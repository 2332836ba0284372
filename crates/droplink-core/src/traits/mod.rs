//! Collaborator traits defined in `droplink-core` and implemented by other
//! crates. Handlers depend only on these trait objects, so every external
//! system can be replaced by an in-memory fake in tests.

pub mod auth;
pub mod ledger;
pub mod storage;

pub use auth::TokenVerifier;
pub use ledger::OwnershipLedger;
pub use storage::ObjectStore;
