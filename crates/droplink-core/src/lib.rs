//! # droplink-core
//!
//! Core crate for Droplink. Contains the collaborator traits, configuration
//! schemas, domain models, the object-identifier normalizer, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Droplink crates.

pub mod config;
pub mod error;
pub mod model;
pub mod object_id;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
