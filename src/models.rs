use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One country's appearance at one Games edition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: u32,
    /// Edition year; distinct years identify distinct Games.
    pub year: i32,
    pub city: String,
    pub medals_count: u32,
    pub athlete_count: u32,
}

/// One participating nation as stored in the dataset file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: u32,
    /// Display name, also used as the external selection key.
    #[serde(rename = "country")]
    pub name: String,
    #[serde(default)]
    pub participations: Vec<Participation>,
}

impl Country {
    /// Sum of medals over all participations.
    pub fn total_medals(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.medals_count))
            .sum()
    }

    /// Sum of athletes over all participations.
    pub fn total_athletes(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.athlete_count))
            .sum()
    }
}

/// The full, ordered collection of countries as loaded from the source.
///
/// Serialized as a bare JSON array, matching the dataset file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Dataset {
    pub countries: Vec<Country>,
}

impl Dataset {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    /// Parse a dataset from its JSON representation.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}

/// Lifecycle of the single dataset load.
///
/// Starts at `NotLoaded`, moves to `Loaded` or `Failed` once the load attempt resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded(Rc<Dataset>),
    Failed,
}

impl LoadState {
    /// The dataset, if one has been published.
    pub fn dataset(&self) -> Option<&Rc<Dataset>> {
        match self {
            LoadState::Loaded(d) => Some(d),
            LoadState::NotLoaded | LoadState::Failed => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

/// Pie chart entry: a country and its total medal count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
}

/// A single labelled point of a line series (label is the edition year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesPoint {
    pub name: String,
    pub value: u32,
}

/// Medals per edition for one country, ordered by year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSeries {
    pub name: String,
    pub series: Vec<SeriesPoint>,
}
