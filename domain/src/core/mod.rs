//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated natural-language query
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod query;
