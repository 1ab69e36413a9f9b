// Unicode symbol classification
//
// A hand-maintained table of Unicode blocks that hold emoji, pictographs and
// decorative symbols, plus the handful of combining code points that glue
// emoji sequences together.

use std::cmp::Ordering;
use std::ops::Range;

/// An inclusive code point interval belonging to one Unicode block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRange {
    pub start: char,
    pub end: char,
    /// Unicode block name, for diagnostics.
    pub block: &'static str,
}

impl SymbolRange {
    const fn new(start: char, end: char, block: &'static str) -> Self {
        Self { start, end, block }
    }

    /// Check whether `c` falls inside this interval.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

// ---------------------------------------------------------------------------
// Range table
//
// Sorted by start, non-overlapping. `find_range` relies on both.
// ---------------------------------------------------------------------------

/// Blocks whose every code point is treated as a symbol.
pub const SYMBOL_RANGES: &[SymbolRange] = &[
    SymbolRange::new('\u{2000}', '\u{206F}', "General Punctuation"),
    SymbolRange::new('\u{2190}', '\u{21FF}', "Arrows"),
    SymbolRange::new('\u{2300}', '\u{23FF}', "Miscellaneous Technical"),
    SymbolRange::new('\u{2400}', '\u{243F}', "Control Pictures"),
    SymbolRange::new('\u{2440}', '\u{245F}', "Optical Character Recognition"),
    SymbolRange::new('\u{2460}', '\u{249F}', "Enclosed Alphanumerics"),
    // 24A0..24AF (parenthesized small Latin letters) is left alone
    SymbolRange::new('\u{24B0}', '\u{24FF}', "Enclosed Alphanumerics"),
    SymbolRange::new('\u{2500}', '\u{257F}', "Box Drawing"),
    SymbolRange::new('\u{2580}', '\u{25FF}', "Block Elements"),
    SymbolRange::new('\u{2600}', '\u{26FF}', "Miscellaneous Symbols"),
    SymbolRange::new('\u{2700}', '\u{27BF}', "Dingbats"),
    SymbolRange::new('\u{27C0}', '\u{27EF}', "Miscellaneous Mathematical Symbols-A"),
    SymbolRange::new('\u{27F0}', '\u{27FF}', "Supplemental Arrows-A"),
    SymbolRange::new('\u{2800}', '\u{28FF}', "Braille Patterns"),
    SymbolRange::new('\u{2900}', '\u{297F}', "Supplemental Arrows-B"),
    SymbolRange::new('\u{2980}', '\u{29FF}', "Miscellaneous Mathematical Symbols-B"),
    SymbolRange::new('\u{2A00}', '\u{2AFF}', "Supplemental Mathematical Operators"),
    SymbolRange::new('\u{2B00}', '\u{2BFF}', "Miscellaneous Symbols and Arrows"),
    SymbolRange::new('\u{3200}', '\u{32FF}', "Enclosed CJK Letters and Months"),
    SymbolRange::new('\u{1F000}', '\u{1F02F}', "Mahjong Tiles"),
    SymbolRange::new('\u{1F0A0}', '\u{1F0FF}', "Playing Cards"),
    SymbolRange::new('\u{1F100}', '\u{1F1FF}', "Enclosed Alphanumeric Supplement"),
    SymbolRange::new('\u{1F200}', '\u{1F2FF}', "Enclosed Ideographic Supplement"),
    SymbolRange::new('\u{1F300}', '\u{1F5FF}', "Miscellaneous Symbols and Pictographs"),
    SymbolRange::new('\u{1F600}', '\u{1F64F}', "Emoticons"),
    SymbolRange::new('\u{1F680}', '\u{1F6FF}', "Transport and Map Symbols"),
    SymbolRange::new('\u{1F700}', '\u{1F77F}', "Alchemical Symbols"),
    SymbolRange::new('\u{1F780}', '\u{1F7FF}', "Geometric Shapes Extended"),
    SymbolRange::new('\u{1F800}', '\u{1F8FF}', "Supplemental Arrows-C"),
    SymbolRange::new('\u{1F900}', '\u{1F9FF}', "Supplemental Symbols and Pictographs"),
    SymbolRange::new('\u{1FA00}', '\u{1FA6F}', "Chess Symbols"),
    SymbolRange::new('\u{1FA70}', '\u{1FAFF}', "Symbols and Pictographs Extended-A"),
    SymbolRange::new('\u{1FB00}', '\u{1FBFF}', "Symbols for Legacy Computing"),
    SymbolRange::new('\u{E0000}', '\u{E007F}', "Tags"),
];

/// Zero Width Joiner: glues symbols into compound glyphs (family, professions).
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Variation Selector-15: requests text presentation.
pub const TEXT_VARIATION_SELECTOR: char = '\u{FE0E}';

/// Variation Selector-16: requests emoji presentation.
pub const EMOJI_VARIATION_SELECTOR: char = '\u{FE0F}';

/// Combining Enclosing Keycap, the tail of `#️⃣`, `1️⃣` and friends.
pub const COMBINING_ENCLOSING_KEYCAP: char = '\u{20E3}';

/// Joiner, selector and keycap code points removed regardless of the block
/// table. Sorted, so it can be binary searched.
pub const STANDALONE_SYMBOLS: &[char] = &[
    ZERO_WIDTH_JOINER,
    COMBINING_ENCLOSING_KEYCAP,
    '\u{3030}', // WAVY DASH
    '\u{303D}', // PART ALTERNATION MARK
    TEXT_VARIATION_SELECTOR,
    EMOJI_VARIATION_SELECTOR,
];

/// Look up the table entry covering `c`.
pub fn find_range(c: char) -> Option<&'static SymbolRange> {
    SYMBOL_RANGES
        .binary_search_by(|range| {
            if range.end < c {
                Ordering::Less
            } else if range.start > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| &SYMBOL_RANGES[idx])
}

/// Check whether a character is removed by the block table.
#[inline]
pub fn is_symbol(c: char) -> bool {
    // Fast path: nothing below U+2000 is in the table.
    if c < '\u{2000}' {
        return false;
    }
    STANDALONE_SYMBOLS.binary_search(&c).is_ok() || find_range(c).is_some()
}

/// Unicode block name of a symbol character, or `None` for anything that
/// `is_symbol` rejects or that only matches as a standalone code point.
pub fn block_name(c: char) -> Option<&'static str> {
    find_range(c).map(|range| range.block)
}

// ---------------------------------------------------------------------------
// Symbol runs
// ---------------------------------------------------------------------------

/// Iterator over the byte ranges of maximal runs of symbol characters.
///
/// Created by [`symbol_runs`]. Ranges are yielded in order and never touch:
/// two consecutive runs are always separated by at least one non-symbol.
#[derive(Debug, Clone)]
pub struct SymbolRuns<'a> {
    text: &'a str,
    pos: usize,
}

/// Find the maximal runs of symbol characters in `text`.
pub fn symbol_runs(text: &str) -> SymbolRuns<'_> {
    SymbolRuns { text, pos: 0 }
}

impl Iterator for SymbolRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let rest = &self.text[self.pos..];
        let (offset, _) = rest.char_indices().find(|&(_, c)| is_symbol(c))?;
        let start = self.pos + offset;

        let end = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !is_symbol(c))
            .map_or(self.text.len(), |(i, _)| start + i);

        self.pos = end;
        Some(start..end)
    }
}

/// Delete every symbol character from `text`, copying the untouched slices
/// between runs.
pub fn strip_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for run in symbol_runs(text) {
        out.push_str(&text[last..run.start]);
        last = run.end;
    }
    out.push_str(&text[last..]);
    out
}
