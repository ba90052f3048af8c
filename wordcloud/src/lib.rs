pub mod cli;
pub mod config;
pub mod core;
pub mod models;

pub use crate::cli::{Args, generate, run};
pub use crate::config::{Config, StopwordsConfig, load_config, read_config_file};
pub use crate::core::cloud::{WordCloud, build_cloud};
pub use crate::core::filter::ReportFilter;
pub use crate::core::input::resolve_input;
pub use crate::core::report::write_report;
pub use crate::core::stopwords::Stopwords;
pub use crate::core::tokenize::tokenize;
pub use crate::models::ReportLine;
