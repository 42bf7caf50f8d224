use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static TRAILING_PARTIAL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\S*$").unwrap());

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());

static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").unwrap());

/// Plain-text excerpt of raw CMS markup, for meta descriptions and card
/// summaries. Tags become spaces, whitespace collapses, and anything longer
/// than `max_length` characters is cut back to the previous word boundary and
/// given a literal `...` suffix.
pub fn extract_excerpt(html: &str, max_length: usize) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = TAG_RE.replace_all(html, " ");
    let text = WHITESPACE_RUN_RE.replace_all(&text, " ");
    let text = text.trim();

    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_length).collect();
    let truncated = TRAILING_PARTIAL_WORD_RE.replace(&truncated, "");
    format!("{truncated}...")
}

/// First `<h1>` inner text, falling back to the first `<h2>`. Nested tags are
/// stripped from the match. `None` when the content has no such heading.
pub fn extract_first_heading(html: &str) -> Option<String> {
    for heading_re in [&*H1_RE, &*H2_RE] {
        if let Some(caps) = heading_re.captures(html) {
            let inner = TAG_RE.replace_all(&caps[1], "");
            return Some(inner.trim().to_string());
        }
    }
    None
}
