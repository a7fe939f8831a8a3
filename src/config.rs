//! Runtime configuration: where the dataset lives and how charts look.

use crate::viz::ChartConfig;
use std::fmt;
use std::path::PathBuf;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_SOURCE: &str = "assets/mock/olympic.json";

/// Environment variable consulted by the CLI for the dataset location.
pub const DATA_SOURCE_ENV: &str = "OLYMPICS_DATA_SOURCE";

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local JSON file.
    File(PathBuf),
    /// `http://` or `https://` URL serving the JSON document.
    Url(String),
}

impl DataSource {
    /// Interpret a user-provided location. URLs are recognized by scheme; everything
    /// else is treated as a file path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(t.to_string())
        } else {
            DataSource::File(PathBuf::from(t))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_SOURCE))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => f.write_str(u),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: DataSource,
    /// Locale tag for number formatting (`en`, `de`, `fr`, ...).
    pub locale: String,
    pub chart: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            locale: "en".into(),
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    pub fn with_source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }
}
