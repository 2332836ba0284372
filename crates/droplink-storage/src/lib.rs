//! # droplink-storage
//!
//! Storage gateway for Droplink: a `reqwest`-based client for the remote
//! object-storage provider's REST API, implementing the
//! [`ObjectStore`](droplink_core::traits::ObjectStore) trait from
//! `droplink-core`.

pub mod http_store;

pub use http_store::HttpObjectStore;
