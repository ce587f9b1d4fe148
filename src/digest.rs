//! Multi-source answer composition
//!
//! A chatbot answer is a primary article summary followed by short digests
//! of secondary sources (forum threads, web results). This module condenses
//! already-fetched snippets into capped blocks and stitches the blocks
//! together. It does no fetching itself.

use serde::{Deserialize, Serialize};

use crate::nlp::clean::truncate_chars;

/// Default cap for a condensed web-results block
pub const WEB_DIGEST_CHARS: usize = 600;

/// Default cap for a condensed forum-posts block
pub const POST_DIGEST_CHARS: usize = 800;

/// A forum post reduced to the fields a digest needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Community the post belongs to, without the `r/` prefix
    pub community: String,
    pub snippet: String,
}

/// A labelled secondary block appended to the primary summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub body: String,
}

impl Section {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

/// Join non-empty snippets with single spaces, capped at `max_chars`
pub fn condense_snippets<S: AsRef<str>>(snippets: &[S], max_chars: usize) -> String {
    let joined = snippets
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&joined, max_chars).to_string()
}

/// Render posts as `From r/<community>: <snippet>`, joined and capped
pub fn condense_posts(posts: &[Post], max_chars: usize) -> String {
    let parts: Vec<String> = posts
        .iter()
        .filter(|p| !p.snippet.is_empty())
        .map(|p| format!("From r/{}: {}", p.community, p.snippet))
        .collect();
    condense_snippets(&parts, max_chars)
}

/// Primary summary followed by ` **<label>:** <body>` per non-empty section
pub fn compose_answer(primary: &str, sections: &[Section]) -> String {
    let mut answer = primary.to_string();
    for section in sections.iter().filter(|s| !s.body.is_empty()) {
        answer.push_str(&format!(" **{}:** {}", section.label, section.body));
    }
    answer.trim().to_string()
}
