//! Command implementations for Packline CLI

pub mod check;
pub mod completions;
pub mod emit;
pub mod helpers;
pub mod show;
pub mod version;
