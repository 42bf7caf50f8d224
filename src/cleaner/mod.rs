//! Content cleaning pipeline for raw CMS markup.
//!
//! The upstream CMS embeds presentation-layer styling that must not leak
//! into this site's markup, so everything it returns passes through an
//! allow-list sanitizer followed by an ordered rewrite chain before it is
//! embedded in a page. The excerpt and heading extractors work on the raw
//! markup directly and are independent of the cleaning passes.

pub mod excerpt;
pub mod rewrite;
pub mod sanitize;

pub use excerpt::{extract_excerpt, extract_first_heading};

pub const DEFAULT_EXCERPT_MAX_LEN: usize = 160;

/// Tags the sanitizer keeps. Everything else is dropped (its text content is
/// retained, except for script/style whose content goes too).
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "strong", "em", "b", "i", "u", "span", "ul",
    "ol", "li", "a", "img", "blockquote", "pre", "code", "div", "section", "article", "table",
    "thead", "tbody", "tr", "th", "td",
];

/// Attributes the sanitizer keeps, on any tag.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] =
    &["href", "title", "alt", "src", "width", "height", "id"];

/// Pipeline configuration. Explicit rather than baked-in constants so tests
/// can run against alternate origins or allow-lists.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub allowed_tags: Vec<String>,
    pub allowed_attributes: Vec<String>,
    /// Origin prefixed onto site-relative image sources, no trailing slash
    /// required.
    pub cms_origin: String,
    pub excerpt_max_len: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES
                .iter()
                .map(|a| a.to_string())
                .collect(),
            cms_origin: "https://campusify.io".to_string(),
            excerpt_max_len: DEFAULT_EXCERPT_MAX_LEN,
        }
    }
}

/// The two-stage cleaning pipeline. Pure and synchronous; every operation is
/// a total function over its input string and never errors.
#[derive(Debug, Clone)]
pub struct Cleaner {
    config: CleanerConfig,
}

impl Cleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Allow-list pass only. See [`sanitize::sanitize`].
    pub fn sanitize(&self, raw: &str) -> String {
        sanitize::sanitize(&self.config, raw)
    }

    /// Rewrite chain only. See [`rewrite::post_process`].
    pub fn post_process(&self, sanitized: &str) -> String {
        rewrite::post_process(&self.config.cms_origin, sanitized)
    }

    /// Full pipeline: sanitize, then post-process. This is what page content
    /// goes through before being embedded verbatim in rendered markup.
    pub fn clean(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        self.post_process(&self.sanitize(raw))
    }

    /// Excerpt of the raw markup at the configured default length.
    pub fn excerpt(&self, html: &str) -> String {
        extract_excerpt(html, self.config.excerpt_max_len)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}
