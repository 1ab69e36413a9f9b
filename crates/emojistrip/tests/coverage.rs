//! Coverage of the emoji database.
//!
//! The `emojis` crate bundles the fully-qualified emoji list published with
//! the Unicode emoji data files. `emoji-test.txt` also lists the
//! minimally-qualified and unqualified forms, which drop U+FE0F; those are
//! derived here. Every entry (and every skin tone variant) must vanish,
//! except for the bare characters keycap and text-style sequences are built
//! on.

use emojistrip::{SymbolRemover, SymbolStrategy};
#[cfg(feature = "detector")]
use emojistrip::{EmojiDatabase, SymbolDetector};

/// Characters allowed to survive: they are components of keycap sequences
/// or text-default symbols, not emoji by themselves.
const ACCEPTABLE_REMAINDERS: &[&str] = &[
    "*", "#", "\u{00A9}", "\u{00AE}", "\u{2122}", "\u{203C}", "\u{2047}", "\u{2048}", "\u{2049}",
    "\u{2139}", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
];

fn is_acceptable(remainder: &str) -> bool {
    remainder.is_empty() || ACCEPTABLE_REMAINDERS.contains(&remainder)
}

const EMOJI_VARIATION_SELECTOR: char = '\u{FE0F}';

/// Fully-qualified sequences plus their forms with every U+FE0F removed.
fn all_emojis() -> Vec<String> {
    let mut qualified: Vec<&'static str> = Vec::new();
    for emoji in emojis::iter() {
        qualified.push(emoji.as_str());
        if let Some(tones) = emoji.skin_tones() {
            qualified.extend(tones.map(|variant| variant.as_str()));
        }
    }

    let mut all = Vec::with_capacity(qualified.len() * 2);
    for emoji in qualified {
        all.push(emoji.to_string());
        if emoji.contains(EMOJI_VARIATION_SELECTOR) {
            let unqualified: String = emoji.chars().filter(|&c| c != EMOJI_VARIATION_SELECTOR).collect();
            if !unqualified.is_empty() {
                all.push(unqualified);
            }
        }
    }
    all
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collect every emoji the remover fails to clear, with what it left behind.
fn failures<S: SymbolStrategy>(remover: &SymbolRemover<S>) -> Vec<String> {
    all_emojis()
        .into_iter()
        .enumerate()
        .filter_map(|(i, emoji)| {
            let remainder = remover.remove_symbols(&emoji);
            (!is_acceptable(&remainder)).then(|| {
                format!("#{i} {emoji} ({}) yields {remainder:?} ({})", escape(&emoji), escape(&remainder))
            })
        })
        .collect()
}

#[test]
fn database_is_not_empty() {
    assert!(all_emojis().len() > 1800);
}

#[test]
fn database_includes_unqualified_forms() {
    let all = all_emojis();
    for emoji in [
        "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", // 🏳️‍🌈
        "\u{1F3F3}\u{200D}\u{1F308}",
        "\u{2764}\u{200D}\u{1F525}",
        "\u{263A}",
    ] {
        assert!(all.iter().any(|e| e == emoji), "missing {}", escape(emoji));
    }
}

#[test]
fn unicode_blocks_removes_every_emoji() {
    let failures = failures(&SymbolRemover::explicit_unicode_blocks());
    assert!(failures.is_empty(), "{} emoji survived:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn unicode_blocks_removes_every_emoji_without_postprocessing() {
    let remover = SymbolRemover::explicit_unicode_blocks().skip_postprocessing(true);
    let failures = failures(&remover);
    assert!(failures.is_empty(), "{} emoji survived:\n{}", failures.len(), failures.join("\n"));
}

#[cfg(feature = "detector")]
#[test]
fn detector_misses_unqualified_zwj_sequences() {
    let remover = SymbolRemover::demoji().expect("bundled database compiles");
    let failures = failures(&remover);
    assert!(failures.iter().any(|f| f.contains("U+200D")), "no ZWJ sequence survived");

    // Only the fully-qualified forms are in the database, so the parts
    // written without U+FE0F stay behind along with the joiner.
    let database = remover.strategy().detector();
    let rainbow_flag = "\u{1F3F3}\u{200D}\u{1F308}";
    let heart_on_fire = "\u{2764}\u{200D}\u{1F525}";
    assert_eq!(database.replace_all(rainbow_flag, ""), "\u{1F3F3}\u{200D}");
    assert_eq!(database.replace_all(heart_on_fire, ""), "\u{2764}\u{200D}");
    assert_eq!(database.replace_all("\u{263A}", ""), "\u{263A}");

    let blocks = SymbolRemover::explicit_unicode_blocks();
    for emoji in [rainbow_flag, heart_on_fire, "\u{263A}"] {
        assert_eq!(blocks.remove_symbols(emoji), "");
    }
}

#[cfg(feature = "detector")]
#[test]
fn detector_misses_unknown_zwj_compounds() {
    // 🦀‍🦀 is not a recommended sequence, so no database lists it. The
    // detector removes both crabs but leaves the joiner, which the block
    // table does not.
    let compound = "\u{1F980}\u{200D}\u{1F980}";

    let database = EmojiDatabase::new().expect("bundled database compiles");
    let remainder = database.replace_all(compound, "");
    assert_eq!(remainder, "\u{200D}");
    assert!(!is_acceptable(&SymbolRemover::with_detector(database).remove_symbols(compound)));

    assert_eq!(SymbolRemover::explicit_unicode_blocks().remove_symbols(compound), "");
}
