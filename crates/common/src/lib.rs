//! Pieces shared by the workspace crates: wire types and tracing setup.

pub mod types;
pub mod utils;
