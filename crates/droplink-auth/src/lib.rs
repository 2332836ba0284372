//! # droplink-auth
//!
//! Bearer-token verification for Droplink: validates identity-provider JWTs
//! and implements the [`TokenVerifier`](droplink_core::traits::TokenVerifier)
//! trait from `droplink-core`.

pub mod verifier;

pub use verifier::JwtVerifier;
