//! Emoji and pictograph removal for text cleaning pipelines.
//!
//! Strips decorative symbol content ("emojipasta") from text while keeping
//! the words, then tidies the whitespace the deleted symbols leave behind.
//!
//! # Architecture
//!
//! - [`remover`] -- The two-stage pipeline ([`SymbolRemover`]) and the
//!   [`SymbolStrategy`] trait every deletion strategy implements
//! - [`blocks`] -- Deletion driven by an explicit table of Unicode blocks
//! - [`detector`] -- Deletion delegated to a symbol detection engine
//!
//! ```
//! use emojistrip::SymbolRemover;
//!
//! let remover = SymbolRemover::explicit_unicode_blocks();
//! assert_eq!(
//!     remover.remove_symbols("The French \u{1F956}\u{1F950}  People"),
//!     "The French People"
//! );
//! ```

pub mod blocks;
pub mod detector;
pub mod remover;

pub use blocks::{ExplicitUnicodeBlocksRemover, UnicodeBlocks};
pub use detector::{
    DemojiRemover, DetectorError, DetectorStrategy, EmojiDatabase, SymbolDetector,
};
pub use remover::{RemoverOptions, SymbolRemover, SymbolStrategy};

pub use emojistrip_core::whitespace::normalize_whitespace;
