//! CLI command implementations

pub mod detect;
pub mod render;
pub mod vars;
