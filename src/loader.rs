//! One-shot dataset loader.
//!
//! Reads the Olympic dataset from a local file or an HTTP(S) URL and publishes the
//! outcome to a [`DataStore`]. Failures never escape [`Loader::load_initial_data`]:
//! they are logged and the store moves to `LoadState::Failed`. There is no retry.
//!
//! Typical usage:
//! ```no_run
//! # use olympic_stats::{DataSource, DataStore, Loader};
//! let store = DataStore::new();
//! let loader = Loader::new(DataSource::parse("assets/mock/olympic.json"));
//! loader.load_initial_data(&store);
//! assert!(store.state().is_loaded());
//! ```
use crate::config::DataSource;
use crate::error::LoadError;
use crate::models::{Dataset, LoadState};
use crate::store::DataStore;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Loader {
    source: DataSource,
    http: HttpClient,
}

fn build_http_client() -> Result<HttpClient, reqwest::Error> {
    HttpClient::builder()
        .timeout(Duration::from_secs(30)) // total request timeout
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(5))
        .user_agent(concat!("olympic_stats/", env!("CARGO_PKG_VERSION")))
        .build()
}

impl Loader {
    pub fn new(source: DataSource) -> Self {
        // Builder only fails on TLS backend init; fall back to reqwest's defaults then.
        let http = build_http_client().unwrap_or_else(|e| {
            log::warn!("http client setup failed ({e}), using defaults");
            HttpClient::new()
        });
        Self { source, http }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Read and parse the dataset, surfacing the failure reason.
    pub fn fetch(&self) -> Result<Dataset, LoadError> {
        let text = match &self.source {
            DataSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            DataSource::Url(url) => self.get_text(url)?,
        };
        Ok(Dataset::from_json(&text)?)
    }

    fn get_text(&self, url: &str) -> Result<String, LoadError> {
        let http_err = |source: reqwest::Error| LoadError::Http {
            url: url.to_string(),
            source,
        };
        let resp = self.http.get(url).send().map_err(http_err)?;
        if !resp.status().is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        resp.text().map_err(http_err)
    }

    /// Load the dataset once and publish the outcome to `store`.
    ///
    /// The store only ever sees the final state: `Loaded` with the full dataset, or
    /// `Failed`. Calling this again re-runs the fetch and overwrites the state.
    pub fn load_initial_data(&self, store: &DataStore) {
        match self.fetch() {
            Ok(dataset) => {
                log::info!(
                    "loaded {} countries from {}",
                    dataset.len(),
                    self.source
                );
                store.set(LoadState::Loaded(Rc::new(dataset)));
            }
            Err(e) => {
                log::error!("failed to load dataset from {}: {}", self.source, error_chain(&e));
                store.set(LoadState::Failed);
            }
        }
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut out = e.to_string();
    let mut cur = e.source();
    while let Some(src) = cur {
        out.push_str(": ");
        out.push_str(&src.to_string());
        cur = src.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_marks_store_failed() {
        let store = DataStore::new();
        let loader = Loader::new(DataSource::parse("/nonexistent/olympic.json"));
        loader.load_initial_data(&store);
        assert_eq!(store.state(), LoadState::Failed);
        assert!(matches!(loader.fetch(), Err(LoadError::Io { .. })));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"{\"not\": \"an array\"}").unwrap();
        let loader = Loader::new(DataSource::File(f.path().to_path_buf()));
        assert!(matches!(loader.fetch(), Err(LoadError::Parse(_))));

        let store = DataStore::new();
        loader.load_initial_data(&store);
        assert_eq!(store.state(), LoadState::Failed);
    }

    #[test]
    fn reload_overwrites_previous_state() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(br#"[{"id": 1, "country": "France", "participations": []}]"#)
            .unwrap();
        let store = DataStore::new();
        store.set(LoadState::Failed);
        let loader = Loader::new(DataSource::File(f.path().to_path_buf()));
        loader.load_initial_data(&store);
        loader.load_initial_data(&store);
        assert_eq!(store.dataset().map(|d| d.len()), Some(1));
    }
}
