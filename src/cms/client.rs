use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use tracing::instrument;
use url::Url;

use crate::cms::{errors::CmsError, types::BlogPage};

const PAGES_PATH: &str = "/wp-json/wp/v2/pages";
const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "blogfront/0.1 (+https://blog.campusify.io)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(reqwest::header::ACCEPT, "application/json".parse().unwrap());
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Client for the WordPress pages endpoint of the configured CMS origin.
///
/// Listing failures are surfaced as errors since the list page cannot render
/// without data; a missing slug is an expected outcome and comes back as
/// `Ok(None)`.
#[derive(Debug, Clone)]
pub struct CmsClient {
    origin: Url,
}

impl CmsClient {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    fn pages_endpoint(&self) -> Result<Url, CmsError> {
        Ok(self.origin.join(PAGES_PATH)?)
    }

    /// Fetch every page from the CMS.
    #[instrument(skip(self), fields(origin = %self.origin))]
    pub async fn fetch_all_pages(&self) -> Result<Vec<BlogPage>, CmsError> {
        self.fetch_pages(None).await
    }

    /// Fetch a single page by slug. `Ok(None)` when no page matches.
    #[instrument(skip(self), fields(origin = %self.origin, slug = %slug))]
    pub async fn fetch_page_by_slug(&self, slug: &str) -> Result<Option<BlogPage>, CmsError> {
        let pages = self.fetch_pages(Some(slug)).await?;
        Ok(pages.into_iter().next())
    }

    /// Slugs of every page, for static-path generation.
    pub async fn get_all_page_slugs(&self) -> Result<Vec<String>, CmsError> {
        let pages = self.fetch_all_pages().await?;
        Ok(pages.into_iter().map(|page| page.slug).collect())
    }

    async fn fetch_pages(&self, slug: Option<&str>) -> Result<Vec<BlogPage>, CmsError> {
        let url = self.pages_endpoint()?;

        let mut request = HTTP_CLIENT.get(url);
        if let Some(slug) = slug {
            request = request.query(&[("slug", slug)]);
        }

        let response = request.send().await.map_err(CmsError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(CmsError::BodyTooLarge(content_length));
        }

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Http {
                status,
                retriable: status.is_server_error(),
            });
        }

        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| CmsError::Io(e.to_string()))?;

        // Check body size after download (in case Content-Length was missing)
        if body_bytes.len() as u64 > MAX_BODY_SIZE {
            return Err(CmsError::BodyTooLarge(body_bytes.len() as u64));
        }

        serde_json::from_slice(&body_bytes).map_err(|e| CmsError::Decode(e.to_string()))
    }
}
