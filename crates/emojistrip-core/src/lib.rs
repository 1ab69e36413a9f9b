//! Shared building blocks for emoji and pictograph removal.
//!
//! - [`symbols`] -- Static Unicode block table and code point classification
//! - [`whitespace`] -- Cleanup of the whitespace left behind after deletion

pub mod symbols;
pub mod whitespace;
