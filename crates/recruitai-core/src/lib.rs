// Everything the dashboard and CLI share: config, page models and the backend seam
pub mod backend;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pages;
pub mod scope;
pub mod score;
pub mod search;
pub mod settings;
pub mod skills;
pub mod theme;

pub use backend::ScreeningBackend;
pub use config::Config;
pub use error::Error;
pub use export::{ExportFormat, Exporter};
pub use scope::{ScopeToken, ViewScope};
pub use score::ScoreBucket;
pub use settings::{MatchWeights, Settings, ThemeMode};
pub use theme::Theme;

pub type Result<T> = std::result::Result<T, Error>;
