pub mod app_state;
pub mod cleaner;
pub mod cms;
pub mod config;
pub mod meta;
pub mod server;
