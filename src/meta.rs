//! SEO metadata derived from a fetched page.

use crate::cleaner::Cleaner;
use crate::cms::BlogPage;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Document title, "{page title} | {site name}".
    pub title: String,
    /// Meta description, excerpted from the page.
    pub description: String,
    pub canonical_url: String,
    pub og_image: Option<String>,
}

/// Builds the metadata block for a single page.
///
/// The rendered excerpt is preferred for the description; when the CMS
/// supplies none, the description is excerpted from the content itself. A
/// Yoast canonical wins over the synthesized `{site_base_url}/{slug}` form.
pub fn build_page_metadata(page: &BlogPage, config: &Config, cleaner: &Cleaner) -> PageMetadata {
    let title = format!("{} | {}", page.title.rendered, config.site_name());

    let description = match &page.excerpt {
        Some(excerpt) if !excerpt.rendered.trim().is_empty() => cleaner.excerpt(&excerpt.rendered),
        _ => cleaner.excerpt(&page.content.rendered),
    };

    let canonical_url = page
        .yoast_head_json
        .as_ref()
        .and_then(|yoast| yoast.canonical.clone())
        .unwrap_or_else(|| {
            format!(
                "{}/{}",
                config.site_base_url().trim_end_matches('/'),
                page.slug
            )
        });

    let og_image = page
        .yoast_head_json
        .as_ref()
        .and_then(|yoast| yoast.og_image.first())
        .map(|image| image.url.clone());

    PageMetadata {
        title,
        description,
        canonical_url,
        og_image,
    }
}
