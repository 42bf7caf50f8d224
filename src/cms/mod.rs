pub mod client;
pub mod errors;
pub mod types;

pub use client::CmsClient;
pub use errors::CmsError;
pub use types::{BlogPage, OgImage, Rendered, RenderedContent, YoastHead};
