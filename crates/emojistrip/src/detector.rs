// Detector-based symbol removal
//
// Instead of a block table, this strategy asks a detection engine which
// substrings are emoji and deletes them. The bundled engine, `EmojiDatabase`,
// matches the exact sequences listed in an emoji database. Anything the
// database does not list survives, which includes unknown ZWJ compounds:
// their known parts are removed but the joiners stay behind.

use regex::{Regex, RegexBuilder};

use crate::remover::{SymbolRemover, SymbolStrategy};

/// Compiled size limit for the database alternation, which holds a few
/// thousand literals.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Error type for building a detector.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    /// The sequence alternation could not be compiled.
    #[error("failed to compile symbol pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A symbol detection engine.
///
/// Given text, replace every symbol it recognizes with `replacement`.
pub trait SymbolDetector {
    fn replace_all(&self, text: &str, replacement: &str) -> String;
}

impl<D: SymbolDetector + ?Sized> SymbolDetector for &D {
    fn replace_all(&self, text: &str, replacement: &str) -> String {
        (**self).replace_all(text, replacement)
    }
}

impl<D: SymbolDetector + ?Sized> SymbolDetector for Box<D> {
    fn replace_all(&self, text: &str, replacement: &str) -> String {
        (**self).replace_all(text, replacement)
    }
}

// ---------------------------------------------------------------------------
// EmojiDatabase
// ---------------------------------------------------------------------------

/// Detector matching a fixed list of emoji sequences.
///
/// Sequences are tried longest first, so a ZWJ compound is removed as a
/// whole rather than piece by piece.
#[derive(Debug, Clone)]
pub struct EmojiDatabase {
    pattern: Option<Regex>,
    len: usize,
}

impl EmojiDatabase {
    /// Build a detector from every emoji in the bundled `emojis` database,
    /// skin tone variants included.
    #[cfg(feature = "detector")]
    pub fn new() -> Result<Self, DetectorError> {
        let sequences = emojis::iter().flat_map(|emoji| {
            let base = std::iter::once(emoji.as_str());
            let tones = emoji
                .skin_tones()
                .into_iter()
                .flatten()
                .map(|variant| variant.as_str());
            base.chain(tones)
        });
        Self::from_sequences(sequences)
    }

    /// Build a detector from an arbitrary list of sequences.
    ///
    /// Duplicates and empty strings are ignored. An empty list gives a
    /// detector that never matches.
    pub fn from_sequences<I, T>(sequences: I) -> Result<Self, DetectorError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut sequences: Vec<String> = sequences
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        // Longest first: the regex takes the first alternative that matches.
        sequences.sort_unstable_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        sequences.dedup();

        let len = sequences.len();
        if len == 0 {
            return Ok(Self { pattern: None, len });
        }

        let alternation = sequences
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .size_limit(PATTERN_SIZE_LIMIT)
            .dfa_size_limit(PATTERN_SIZE_LIMIT)
            .build()?;

        tracing::debug!(sequences = len, "compiled emoji detector");
        Ok(Self {
            pattern: Some(pattern),
            len,
        })
    }

    /// Number of distinct sequences the detector knows.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the recognized sequences in `text`, in order of appearance.
    pub fn detect<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.pattern {
            Some(pattern) => pattern.find_iter(text).map(|m| m.as_str()).collect(),
            None => Vec::new(),
        }
    }
}

impl SymbolDetector for EmojiDatabase {
    fn replace_all(&self, text: &str, replacement: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(text, regex::NoExpand(replacement))
                .into_owned(),
            None => text.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Stage-one deletion delegated to a [`SymbolDetector`].
#[derive(Debug, Clone)]
pub struct DetectorStrategy<D> {
    detector: D,
}

impl<D: SymbolDetector> DetectorStrategy<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}

impl<D: SymbolDetector> SymbolStrategy for DetectorStrategy<D> {
    fn remove_symbols_implementation(&self, text: &str) -> String {
        self.detector.replace_all(text, "")
    }
}

/// Remover backed by the bundled emoji database.
pub type DemojiRemover = SymbolRemover<DetectorStrategy<EmojiDatabase>>;

impl<D: SymbolDetector> SymbolRemover<DetectorStrategy<D>> {
    /// Build a remover around any detection engine.
    pub fn with_detector(detector: D) -> Self {
        Self::new(DetectorStrategy::new(detector))
    }
}

#[cfg(feature = "detector")]
impl SymbolRemover<DetectorStrategy<EmojiDatabase>> {
    /// Build a remover backed by the bundled emoji database.
    pub fn demoji() -> Result<Self, DetectorError> {
        Ok(Self::with_detector(EmojiDatabase::new()?))
    }
}
