//! Terminal presentation layer
//!
//! This module handles:
//! - Styled headings and field lines for the show and check summaries
//! - Pipeline rule rendering
//! - Warnings for recoverable configuration surprises

pub mod display;

pub use display::{field, heading, print_rule, warn};
