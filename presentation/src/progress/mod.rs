//! Progress reporting for reasoning runs

pub mod reporter;
