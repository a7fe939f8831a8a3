use crate::config::Config;
use crate::loader::Loader;
use crate::models::LoadState;
use crate::store::DataStore;
use crate::views::{DetailView, OverviewView};

/// Application wiring: one store, one loader, loaded once at startup.
#[derive(Debug)]
pub struct App {
    config: Config,
    store: DataStore,
    loader: Loader,
}

impl App {
    /// Build the store and loader and run the single startup load.
    pub fn start(config: Config) -> Self {
        let store = DataStore::new();
        let loader = Loader::new(config.source.clone());
        loader.load_initial_data(&store);
        Self {
            config,
            store,
            loader,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Re-run the dataset load, overwriting the current state.
    pub fn reload(&self) {
        self.loader.load_initial_data(&self.store);
    }

    pub fn state(&self) -> LoadState {
        self.store.state()
    }

    pub fn overview_view(&self) -> OverviewView {
        OverviewView::attach(&self.store)
    }

    pub fn detail_view(&self, country: impl Into<String>) -> DetailView {
        DetailView::attach(&self.store, country)
    }
}
