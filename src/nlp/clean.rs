//! Markup cleanup for text handed over by the fetch layer
//!
//! Search snippets arrive with inline HTML highlighting and forum posts
//! arrive as markdown. Both are reduced to plain text before they are
//! summarized or condensed.

use std::sync::OnceLock;

use regex::Regex;

/// Default character cap for cleaned markdown posts
pub const DEFAULT_POST_CHARS: usize = 500;

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"))
}

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link pattern is valid"))
}

fn bold_regex() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"))
}

fn whitespace_regex() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Remove every `<...>` tag, keeping the text between tags
pub fn clean_html(text: &str) -> String {
    tag_regex().replace_all(text, "").into_owned()
}

/// Flatten markdown links and bold, collapse whitespace, cap at `max_chars`
pub fn clean_markdown(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = link_regex().replace_all(text, "$1");
    let text = bold_regex().replace_all(&text, "$1");
    let text = whitespace_regex().replace_all(&text, " ");
    truncate_chars(text.trim(), max_chars).to_string()
}

/// The first `max_chars` characters of `text`
///
/// Counts `char`s, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
