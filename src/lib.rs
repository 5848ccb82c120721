pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{export::ZipDocumentExporter, gemini::GeminiClient};
pub use app::{health::HealthRecommender, storybook::StorybookGenerator};
pub use config::{cli::LocalStorage, toml_config::AppConfig};
pub use utils::error::{BazaiError, Result};
