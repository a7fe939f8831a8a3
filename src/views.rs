//! Store-backed views: recompute derived figures whenever the data store publishes a
//! dataset, and release their subscription when dropped.

use crate::detail::{CountryDetail, compute_detail};
use crate::models::LoadState;
use crate::overview::{Overview, compute_overview};
use crate::store::{DataStore, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Overview page model.
pub struct OverviewView {
    current: Rc<RefCell<Option<Overview>>>,
    _subscription: Subscription,
}

impl OverviewView {
    pub fn attach(store: &DataStore) -> Self {
        let current = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&current);
        let subscription = store.subscribe(move |state: &LoadState| {
            *sink.borrow_mut() = state.dataset().map(|d| compute_overview(d));
        });
        Self {
            current,
            _subscription: subscription,
        }
    }

    /// Latest overview, or `None` while nothing is loaded (or loading failed).
    pub fn current(&self) -> Option<Overview> {
        self.current.borrow().clone()
    }
}

/// What the detail page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// No dataset published yet, or the load failed.
    Pending,
    Ready(CountryDetail),
    /// Unknown country; the caller should navigate back to the overview.
    NotFound(String),
}

/// Detail page model for one selected country.
pub struct DetailView {
    country: String,
    current: Rc<RefCell<DetailState>>,
    _subscription: Subscription,
}

impl DetailView {
    pub fn attach(store: &DataStore, country: impl Into<String>) -> Self {
        let country = country.into();
        let current = Rc::new(RefCell::new(DetailState::Pending));
        let sink = Rc::clone(&current);
        let selected = country.clone();
        let subscription = store.subscribe(move |state: &LoadState| {
            let next = match state.dataset() {
                None => DetailState::Pending,
                Some(d) => match compute_detail(d, &selected) {
                    Ok(detail) => DetailState::Ready(detail),
                    Err(e) => {
                        log::warn!("{e}");
                        DetailState::NotFound(e.0)
                    }
                },
            };
            *sink.borrow_mut() = next;
        });
        Self {
            country,
            current,
            _subscription: subscription,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> DetailState {
        self.current.borrow().clone()
    }
}
