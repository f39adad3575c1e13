//! Answer normalization.
//!
//! A guess is correct when its token equals the token of the asset on
//! screen. Tokens keep only ASCII letters, lowercased, so spacing,
//! punctuation and case never matter. There is no fuzzy matching.

/// Length of the extension suffix on asset identifiers (`".png"`).
const EXTENSION_LEN: usize = 4;

/// Drop the trailing extension from an asset identifier.
///
/// Identifiers shorter than the extension yield the empty string.
pub fn strip_extension(asset_id: &str) -> &str {
    match asset_id.char_indices().rev().nth(EXTENSION_LEN - 1) {
        Some((idx, _)) => &asset_id[..idx],
        None => "",
    }
}

/// Token for an asset identifier such as `"ThankYou.png"`.
pub fn normalize_answer(asset_id: &str) -> String {
    letters_lowercase(strip_extension(asset_id))
}

/// Token for a raw guess. No extension stripping.
pub fn normalize_guess(raw: &str) -> String {
    letters_lowercase(raw)
}

/// Whether `guess` names the asset.
pub fn is_match(asset_id: &str, guess: &str) -> bool {
    normalize_answer(asset_id) == normalize_guess(guess)
}

fn letters_lowercase(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
