pub mod api;
pub mod capability;
pub mod config;
pub mod error;
pub mod i18n;
pub mod langs;
pub mod page;
pub mod product;
pub mod registry;
pub mod render;
pub mod serialize;

pub use error::{CfResult, ConfigError};
pub use page::ConfigPage;
pub use product::Generation;
