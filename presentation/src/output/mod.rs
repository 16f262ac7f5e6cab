//! Output formatting for reasoning results

pub mod console;
pub mod formatter;
