//! Code-fence extraction from model completions.
//!
//! Rewrite prompts ask for code only, but models habitually wrap it in a
//! markdown fence and sometimes add chatter around it. The extractor takes
//! everything between the first opening fence and the last closing fence,
//! so interior fences inside the code survive.

use std::sync::OnceLock;

use regex::Regex;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy body: spans to the LAST closing fence in the text.
    RE.get_or_init(|| Regex::new(r"(?s)```[A-Za-z0-9_+-]*\n(.*)```").unwrap())
}

/// Strip one surrounding markdown code fence, if present.
///
/// Accepts any language tag after the opening backticks. Returns the
/// trimmed input unchanged when no fence is found.
pub fn extract_code(raw: &str) -> String {
    let trimmed = raw.trim();
    match fence_re().captures(trimmed) {
        Some(caps) => caps[1].trim().to_string(),
        None => trimmed.to_string(),
    }
}
