// Symbol removal pipeline
//
// Every remover runs the same two stages:
// 1. strategy-specific deletion of symbols (`SymbolStrategy`)
// 2. whitespace cleanup shared by all strategies (skippable)
//
// The sequencing lives on `SymbolRemover`, not on the trait, so a strategy
// can only change what gets deleted, never how the stages are chained.

use std::sync::Arc;

use emojistrip_core::whitespace::normalize_whitespace;

/// Stage-one symbol deletion.
///
/// Implementations return `text` with every symbol they recognize removed.
/// They must not insert characters or reorder the surviving ones.
pub trait SymbolStrategy {
    fn remove_symbols_implementation(&self, text: &str) -> String;
}

impl<S: SymbolStrategy + ?Sized> SymbolStrategy for &S {
    fn remove_symbols_implementation(&self, text: &str) -> String {
        (**self).remove_symbols_implementation(text)
    }
}

impl<S: SymbolStrategy + ?Sized> SymbolStrategy for Box<S> {
    fn remove_symbols_implementation(&self, text: &str) -> String {
        (**self).remove_symbols_implementation(text)
    }
}

impl<S: SymbolStrategy + ?Sized> SymbolStrategy for Arc<S> {
    fn remove_symbols_implementation(&self, text: &str) -> String {
        (**self).remove_symbols_implementation(text)
    }
}

/// Options controlling the removal pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RemoverOptions {
    /// Return the stage-one output as is, without collapsing spaces or
    /// trimming. Defaults to `false`.
    pub skip_postprocessing: bool,
}

/// A symbol remover: one deletion strategy plus fixed options.
///
/// Options are set when the remover is built and cannot change afterwards,
/// so a remover can be shared between threads whenever its strategy can.
#[derive(Debug, Clone, Default)]
pub struct SymbolRemover<S> {
    strategy: S,
    options: RemoverOptions,
}

impl<S: SymbolStrategy> SymbolRemover<S> {
    /// Create a remover with default options (postprocessing enabled).
    pub fn new(strategy: S) -> Self {
        Self::with_options(strategy, RemoverOptions::default())
    }

    pub fn with_options(strategy: S, options: RemoverOptions) -> Self {
        Self { strategy, options }
    }

    /// Builder-style toggle for [`RemoverOptions::skip_postprocessing`].
    #[must_use]
    pub fn skip_postprocessing(mut self, skip: bool) -> Self {
        self.options.skip_postprocessing = skip;
        self
    }

    pub fn options(&self) -> &RemoverOptions {
        &self.options
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Remove symbols from `text`, then normalize whitespace unless
    /// postprocessing is skipped.
    ///
    /// Never fails: any string, including the empty one, yields a string.
    pub fn remove_symbols(&self, text: &str) -> String {
        let without_symbols = self.strategy.remove_symbols_implementation(text);
        let result = if self.options.skip_postprocessing {
            without_symbols
        } else {
            normalize_whitespace(&without_symbols)
        };
        tracing::trace!(
            input_len = text.len(),
            output_len = result.len(),
            skip_postprocessing = self.options.skip_postprocessing,
            "removed symbols"
        );
        result
    }
}
