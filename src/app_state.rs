use std::sync::Arc;

use crate::cleaner::{Cleaner, CleanerConfig};
use crate::cms::CmsClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cms: CmsClient,
    pub cleaner: Cleaner,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cms = CmsClient::new(config.cms_origin().clone());
        let cleaner = Cleaner::new(CleanerConfig {
            cms_origin: config
                .cms_origin()
                .as_str()
                .trim_end_matches('/')
                .to_string(),
            excerpt_max_len: config.excerpt_max_len(),
            ..CleanerConfig::default()
        });
        Self {
            config: Arc::new(config),
            cms,
            cleaner,
        }
    }
}
