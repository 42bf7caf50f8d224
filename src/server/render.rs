//! HTML page rendering.
//!
//! Plain string templates, no templating engine: the markup is small and the
//! only dynamic HTML is the cleaned CMS content, which is embedded verbatim
//! after the cleaning pipeline has run. Everything else is escaped.

use crate::cleaner::Cleaner;
use crate::cms::BlogPage;
use crate::config::Config;
use crate::meta::PageMetadata;

/// Escape a value for a text or attribute position.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, head_extra: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{head_extra}
</head>
<body>
{body}
</body>
</html>"#
    )
}

fn header(config: &Config) -> String {
    format!(
        r#"<header><nav><a href="/">{site_name}</a></nav></header>"#,
        site_name = escape_html(config.site_name())
    )
}

fn footer(config: &Config) -> String {
    format!(
        "<footer><p>© {site_name}. All Rights Reserved.</p></footer>",
        site_name = escape_html(config.site_name())
    )
}

/// The list page: every page as a card with a linked title, publish date and
/// excerpt.
pub fn render_index(pages: &[BlogPage], config: &Config, cleaner: &Cleaner) -> String {
    let cards = if pages.is_empty() {
        "<p>No blog posts found.</p>".to_string()
    } else {
        pages
            .iter()
            .map(|page| {
                let excerpt_source = page
                    .excerpt
                    .as_ref()
                    .filter(|e| !e.rendered.trim().is_empty())
                    .map(|e| e.rendered.as_str())
                    .unwrap_or(page.content.rendered.as_str());
                format!(
                    r#"<article><h2><a href="/{slug}">{title}</a></h2><time datetime="{date}">{display_date}</time><p>{excerpt}</p></article>"#,
                    slug = escape_html(&page.slug),
                    title = escape_html(&page.title.rendered),
                    date = page.date.format("%Y-%m-%dT%H:%M:%S"),
                    display_date = page.date.format("%B %-d, %Y"),
                    excerpt = escape_html(&cleaner.excerpt(excerpt_source)),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "{header}\n<main><h1>Blog Posts</h1>\n{cards}\n</main>\n{footer}",
        header = header(config),
        footer = footer(config),
    );
    layout(config.site_name(), "", &body)
}

/// A single post: SEO tags in the head, cleaned content embedded verbatim.
pub fn render_post(
    page: &BlogPage,
    metadata: &PageMetadata,
    cleaned_content: &str,
    config: &Config,
) -> String {
    let mut head_extra = format!(
        r#"<meta name="description" content="{description}">
<link rel="canonical" href="{canonical}">
<meta property="og:title" content="{og_title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{canonical}">
<meta property="og:type" content="article">"#,
        description = escape_html(&metadata.description),
        canonical = escape_html(&metadata.canonical_url),
        og_title = escape_html(&page.title.rendered),
    );
    if let Some(og_image) = &metadata.og_image {
        head_extra.push_str(&format!(
            "\n<meta property=\"og:image\" content=\"{}\">",
            escape_html(og_image)
        ));
    }

    let body = format!(
        r#"{header}
<main>
<article>
<h1>{title}</h1>
<time datetime="{date}">{display_date}</time>
<div class="blog-content">{content}</div>
</article>
<p><a href="/">&larr; Back to Blog</a></p>
</main>
{footer}"#,
        header = header(config),
        title = escape_html(&page.title.rendered),
        date = page.date.format("%Y-%m-%dT%H:%M:%S"),
        display_date = page.date.format("%B %-d, %Y"),
        content = cleaned_content,
        footer = footer(config),
    );
    layout(&metadata.title, &head_extra, &body)
}

pub fn render_not_found(config: &Config) -> String {
    let body = format!(
        r#"{header}
<main><h1>Page Not Found</h1><p>The post you are looking for does not exist.</p><p><a href="/">&larr; Back to Blog</a></p></main>
{footer}"#,
        header = header(config),
        footer = footer(config),
    );
    layout(
        &format!("Page Not Found | {}", config.site_name()),
        "",
        &body,
    )
}

pub fn render_upstream_error(config: &Config) -> String {
    let body = format!(
        r#"{header}
<main><h1>Something went wrong</h1><p>The blog is temporarily unavailable. Please try again shortly.</p></main>
{footer}"#,
        header = header(config),
        footer = footer(config),
    );
    layout(
        &format!("Unavailable | {}", config.site_name()),
        "",
        &body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{Rendered, RenderedContent};
    use crate::meta::build_page_metadata;
    use chrono::NaiveDateTime;

    fn page() -> BlogPage {
        BlogPage {
            id: 7,
            date: NaiveDateTime::parse_from_str("2024-01-15T10:30:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            slug: "first-post".to_string(),
            title: Rendered {
                rendered: "First Post".to_string(),
            },
            content: RenderedContent {
                rendered: "<p>Hello <b>there</b></p>".to_string(),
                protected: false,
            },
            excerpt: None,
            yoast_head_json: None,
        }
    }

    #[test]
    fn index_links_every_page() {
        let out = render_index(&[page()], &Config::default(), &Cleaner::default());
        assert!(out.contains(r#"<a href="/first-post">First Post</a>"#));
        assert!(out.contains("Hello there"));
        assert!(out.contains("January 15, 2024"));
    }

    #[test]
    fn empty_index_says_so() {
        let out = render_index(&[], &Config::default(), &Cleaner::default());
        assert!(out.contains("No blog posts found."));
    }

    #[test]
    fn post_page_carries_metadata_and_content() {
        let config = Config::default();
        let cleaner = Cleaner::default();
        let page = page();
        let metadata = build_page_metadata(&page, &config, &cleaner);
        let cleaned = cleaner.clean(&page.content.rendered);
        let out = render_post(&page, &metadata, &cleaned, &config);

        assert!(out.contains("<title>First Post | Campusify Blog</title>"));
        assert!(out.contains(r#"<meta name="description" content="Hello there">"#));
        assert!(out.contains(
            r#"<link rel="canonical" href="https://blog.campusify.io/first-post">"#
        ));
        assert!(out.contains("<p>Hello <b>there</b></p>"));
    }

    #[test]
    fn description_is_attribute_escaped() {
        let config = Config::default();
        let cleaner = Cleaner::default();
        let mut page = page();
        page.content.rendered = r#"<p>Quotes "inside" &amp; more</p>"#.to_string();
        let metadata = build_page_metadata(&page, &config, &cleaner);
        let out = render_post(&page, &metadata, "", &config);
        assert!(out.contains("&quot;inside&quot;"));
    }

    #[test]
    fn untrusted_title_is_escaped() {
        let config = Config::default();
        let cleaner = Cleaner::default();
        let mut page = page();
        page.title.rendered = "<script>steal()</script>Breaking & Entering".to_string();

        let index = render_index(&[page.clone()], &config, &cleaner);
        assert!(!index.contains("<script>"));
        assert!(index.contains("&lt;script&gt;steal()&lt;/script&gt;Breaking &amp; Entering"));

        let metadata = build_page_metadata(&page, &config, &cleaner);
        let post = render_post(&page, &metadata, "", &config);
        assert!(!post.contains("<script>"));
        // Escaped in the h1, the og:title and the document title alike.
        assert!(post.contains("<h1>&lt;script&gt;steal()&lt;/script&gt;Breaking &amp; Entering</h1>"));
        assert!(post.contains("<title>&lt;script&gt;steal()&lt;/script&gt;Breaking &amp; Entering | Campusify Blog</title>"));
    }

    #[test]
    fn not_found_page_offers_way_back() {
        let out = render_not_found(&Config::default());
        assert!(out.contains("Page Not Found"));
        assert!(out.contains(r#"<a href="/">"#));
    }
}
