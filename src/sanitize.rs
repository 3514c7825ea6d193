//! Text cleanup applied to model output before it is cached or returned.

use once_cell::sync::Lazy;
use regex::Regex;

/// Emoji blocks: emoticons, pictographs, transport, regional indicator flags,
/// dingbats, misc symbols, enclosed alphanumerics, supplemental symbols,
/// plus VS16 and ZWJ so composed sequences leave no residue.
static EMOJI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}",
        r"\x{2700}-\x{27BF}",
        r"\x{2600}-\x{26FF}",
        r"\x{24C2}",
        r"\x{1F100}-\x{1F251}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{FE0F}\x{200D}",
        "]+"
    ))
    .expect("emoji pattern is valid")
});

/// Removes emoji code points and trims surrounding whitespace.
pub fn strip_emojis(text: &str) -> String {
    EMOJI_PATTERN.replace_all(text, "").trim().to_string()
}

/// Removes leading and trailing `"` characters.
pub fn trim_quotes(text: &str) -> &str {
    text.trim_matches('"')
}

/// Cleanup applied to a generated answer: quotes first, then emoji.
pub fn clean_answer(text: &str) -> String {
    strip_emojis(trim_quotes(text))
}
