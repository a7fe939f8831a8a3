//! olympic_stats
//!
//! A small Rust library for loading Olympic Games participation data and deriving the
//! figures shown on an overview page (medals per country) and a per-country detail page
//! (medals per Games edition). Pairs with the `olympics` CLI.
//!
//! ### Features
//! - One-shot dataset load from a JSON file or an HTTP(S) URL into a shared store
//! - Overview: number of countries, number of Games editions, pie slices
//! - Detail: participations, total medals, total athletes, year-ordered line series
//! - SVG/PNG pie and line charts, CSV/JSON export
//!
//! ### Example
//! ```no_run
//! use olympic_stats::{App, Config, compute_detail, compute_overview};
//!
//! let app = App::start(Config::default());
//! if let Some(dataset) = app.store().dataset() {
//!     let overview = compute_overview(&dataset);
//!     println!("{} countries, {} Games", overview.number_of_countries, overview.number_of_games);
//!     let detail = compute_detail(&dataset, "France")?;
//!     olympic_stats::viz::plot_line(&detail.line_series, "france.svg", &app.config().chart, "en")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod config;
pub mod detail;
pub mod error;
pub mod loader;
pub mod models;
pub mod overview;
pub mod selection;
pub mod storage;
pub mod store;
pub mod views;
pub mod viz;

pub use app::App;
pub use config::{Config, DataSource};
pub use detail::{CountryDetail, compute_detail};
pub use error::{CountryNotFound, LoadError};
pub use loader::Loader;
pub use models::{Country, Dataset, LineSeries, LoadState, Participation, PieSlice, SeriesPoint};
pub use overview::{Overview, compute_overview};
pub use selection::resolve;
pub use store::{DataStore, Subscription};
pub use views::{DetailState, DetailView, OverviewView};
