use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A rendered field as the WordPress REST API returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// Rendered content field, optionally password-protected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedContent {
    pub rendered: String,
    #[serde(default)]
    pub protected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
}

/// SEO metadata emitted by the Yoast plugin, when installed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoastHead {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub og_image: Vec<OgImage>,
}

/// A page object from `/wp-json/wp/v2/pages`. Only the fields the site
/// consumes are modeled; everything else in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPage {
    pub id: u64,
    /// WordPress dates carry no offset ("2024-01-15T10:30:00").
    pub date: NaiveDateTime,
    pub slug: String,
    pub title: Rendered,
    pub content: RenderedContent,
    #[serde(default)]
    pub excerpt: Option<RenderedContent>,
    #[serde(default)]
    pub yoast_head_json: Option<YoastHead>,
}
