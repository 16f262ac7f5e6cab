//! Application-level configuration.
//!
//! - [`GenerationParams`]: model and sampling parameters for each request

pub mod generation_params;

pub use generation_params::GenerationParams;
