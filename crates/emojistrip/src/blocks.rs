// Range-based symbol removal using the explicit Unicode block table

use emojistrip_core::symbols::strip_symbols;

use crate::remover::{SymbolRemover, SymbolStrategy};

/// Deletes every character that falls in one of the blocks listed in
/// [`emojistrip_core::symbols::SYMBOL_RANGES`], plus the joiner, keycap and
/// variation selector code points.
///
/// Needs no emoji database. Symbols that a future Unicode release assigns
/// outside the listed blocks are left in the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBlocks;

impl SymbolStrategy for UnicodeBlocks {
    fn remove_symbols_implementation(&self, text: &str) -> String {
        strip_symbols(text)
    }
}

/// Remover backed by the explicit Unicode block table.
pub type ExplicitUnicodeBlocksRemover = SymbolRemover<UnicodeBlocks>;

impl SymbolRemover<UnicodeBlocks> {
    pub fn explicit_unicode_blocks() -> Self {
        Self::new(UnicodeBlocks)
    }
}
