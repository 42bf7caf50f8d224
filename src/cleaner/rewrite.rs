use std::sync::LazyLock;

use regex::{Captures, Regex};

static STYLE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s*style\s*=\s*["'][^"']*["']"#).unwrap());

static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s*class\s*=\s*["'][^"']*["']"#).unwrap());

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static INTER_TAG_WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

static EMPTY_PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p>\s*</p>").unwrap());

static IMG_RELATIVE_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img([^>]*)\ssrc=["'](/[^"']+)["']"#).unwrap());

static IMG_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img([^>]*?)>").unwrap());

static LOADING_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)loading\s*=").unwrap());

static DATA_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s*data-[^=]*=["'][^"']*["']"#).unwrap());

/// Ordered rewrite chain applied after the structural allow-list pass.
///
/// Every step is a best-effort textual transformation over whatever markup
/// survived sanitization; none of them requires well-formed input or can
/// fail. Whitespace collapse has to run before empty-paragraph removal, and
/// the image rewrites target disjoint attributes so their relative order is
/// free.
pub fn post_process(cms_origin: &str, sanitized: &str) -> String {
    let html = STYLE_BLOCK_RE.replace_all(sanitized, "");
    let html = STYLE_ATTR_RE.replace_all(&html, "");
    let html = CLASS_ATTR_RE.replace_all(&html, "");
    let html = WHITESPACE_RUN_RE.replace_all(&html, " ");
    let html = INTER_TAG_WHITESPACE_RE.replace_all(&html, "><");
    let html = EMPTY_PARAGRAPH_RE.replace_all(&html, "");
    let html = absolutize_image_sources(cms_origin, &html);
    let html = inject_lazy_loading(&html);
    let html = DATA_ATTR_RE.replace_all(&html, "");
    html.trim().to_string()
}

/// Site-relative image sources get the CMS origin prefixed; anything not
/// starting with `/` is left byte-for-byte unchanged.
fn absolutize_image_sources(cms_origin: &str, html: &str) -> String {
    let origin = cms_origin.trim_end_matches('/');
    IMG_RELATIVE_SRC_RE
        .replace_all(html, |caps: &Captures| {
            format!(r#"<img{} src="{}{}""#, &caps[1], origin, &caps[2])
        })
        .to_string()
}

/// Adds `loading="lazy"` to images that do not already declare a `loading`
/// attribute. An explicit author value wins, whatever it is.
fn inject_lazy_loading(html: &str) -> String {
    IMG_TAG_RE
        .replace_all(html, |caps: &Captures| {
            let attrs = &caps[1];
            if LOADING_ATTR_RE.is_match(attrs) {
                caps[0].to_string()
            } else {
                format!(r#"<img{attrs} loading="lazy">"#)
            }
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://cms.example.com";

    #[test]
    fn strips_residual_style_blocks() {
        let out = post_process(ORIGIN, "<style>p { color: red }</style><p>Hi</p>");
        assert_eq!(out, "<p>Hi</p>");
    }

    #[test]
    fn strips_residual_style_blocks_across_lines() {
        let out = post_process(ORIGIN, "<style>\np { color: red }\n</style><p>Hi</p>");
        assert_eq!(out, "<p>Hi</p>");
    }

    #[test]
    fn strips_residual_inline_styles_and_classes() {
        let out = post_process(
            ORIGIN,
            r#"<p style="margin: 0" class="wp-block-paragraph">Text</p>"#,
        );
        assert_eq!(out, "<p>Text</p>");
    }

    #[test]
    fn collapses_whitespace_runs() {
        let out = post_process(ORIGIN, "<p>Hello     world\n\t and   more</p>");
        assert_eq!(out, "<p>Hello world and more</p>");
    }

    #[test]
    fn collapses_whitespace_between_tags() {
        let out = post_process(ORIGIN, "<p>a</p>   \n   <p>b</p>");
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn removes_empty_paragraphs() {
        let out = post_process(ORIGIN, "<p></p><p>Keep</p><p>   </p>");
        assert_eq!(out, "<p>Keep</p>");
    }

    #[test]
    fn absolutizes_relative_image_sources() {
        let out = post_process(ORIGIN, r#"<img alt="a" src="/wp-content/a.jpg">"#);
        assert!(
            out.contains(r#"src="https://cms.example.com/wp-content/a.jpg""#),
            "got {out}"
        );
    }

    #[test]
    fn trailing_slash_on_origin_does_not_double() {
        let out = post_process("https://cms.example.com/", r#"<img src="/a.jpg">"#);
        assert!(out.contains(r#"src="https://cms.example.com/a.jpg""#));
    }

    #[test]
    fn absolute_image_sources_are_untouched() {
        let src = r#"src="https://cdn.example.net/pic.png""#;
        let out = post_process(ORIGIN, &format!("<img alt=\"x\" {src}>"));
        assert!(out.contains(src));
        assert!(!out.contains(ORIGIN));
    }

    #[test]
    fn injects_lazy_loading() {
        let out = post_process(ORIGIN, r#"<img src="https://x.test/a.jpg" alt="a">"#);
        assert!(out.contains(r#"loading="lazy""#));
    }

    #[test]
    fn existing_loading_attribute_wins() {
        let raw = r#"<img src="https://x.test/a.jpg" loading="eager">"#;
        let out = post_process(ORIGIN, raw);
        assert!(out.contains(r#"loading="eager""#));
        assert!(!out.contains("lazy"));
    }

    #[test]
    fn relative_src_gets_both_rewrites() {
        let out = post_process(ORIGIN, r#"<img alt="a" src="/a.jpg">"#);
        assert!(out.contains(r#"src="https://cms.example.com/a.jpg""#));
        assert!(out.contains(r#"loading="lazy""#));
    }

    #[test]
    fn strips_residual_data_attributes() {
        let out = post_process(ORIGIN, r#"<div data-id="1" data-track="x">c</div>"#);
        assert_eq!(out, "<div>c</div>");
    }

    #[test]
    fn trims_result() {
        assert_eq!(post_process(ORIGIN, "   <p>x</p>  "), "<p>x</p>");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(post_process(ORIGIN, ""), "");
    }

    #[test]
    fn chain_is_idempotent() {
        let raw = r#"<p></p>  <p style="x: y">Hello   world</p> <img src="/a.jpg"> "#;
        let once = post_process(ORIGIN, raw);
        let twice = post_process(ORIGIN, &once);
        assert_eq!(once, twice);
    }
}
