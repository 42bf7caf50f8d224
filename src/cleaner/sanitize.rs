use std::collections::HashMap;

use ammonia::{Builder, UrlRelative};

use crate::cleaner::CleanerConfig;

/// Structural allow-list pass over the raw CMS markup.
///
/// Removes `<script>`/`<style>` elements together with their content, drops
/// every tag outside the configured allow-list, and strips every attribute
/// outside the configured attribute list (including `style`, `class` and all
/// `data-*` attributes). Relative URLs pass through untouched; image src
/// absolutization happens later in the rewrite chain.
pub fn sanitize(config: &CleanerConfig, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut builder = Builder::default();
    builder
        .tags(config.allowed_tags.iter().map(String::as_str).collect())
        .generic_attributes(
            config
                .allowed_attributes
                .iter()
                .map(String::as_str)
                .collect(),
        )
        // Clear ammonia's per-tag defaults so the generic list is the whole
        // attribute vocabulary.
        .tag_attributes(HashMap::new())
        .clean_content_tags(["script", "style"].into_iter().collect())
        .url_relative(UrlRelative::PassThrough)
        // ammonia injects rel="noopener noreferrer" on links by default,
        // which would put an attribute outside the allow-list back in.
        .link_rel(None)
        .strip_comments(true);

    builder.clean(raw).to_string()
}
