//! CLI library components for the base16 GTK generator.

pub mod logging;
pub mod pipeline;
pub mod types;
