//! HTTP handlers.

pub mod delete;
pub mod files;
pub mod health;
pub mod upload;
