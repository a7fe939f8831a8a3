use crate::models::{Dataset, PieSlice};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Figures shown on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Overview {
    pub number_of_countries: usize,
    /// Distinct Games editions, counted by year across all countries.
    pub number_of_games: usize,
    /// One slice per country, in dataset order.
    pub pie_slices: Vec<PieSlice>,
}

/// Compute the overview figures for a loaded dataset.
pub fn compute_overview(dataset: &Dataset) -> Overview {
    let years: BTreeSet<i32> = dataset
        .iter()
        .flat_map(|c| c.participations.iter().map(|p| p.year))
        .collect();

    let pie_slices = dataset
        .iter()
        .map(|c| PieSlice {
            name: c.name.clone(),
            value: c.total_medals(),
        })
        .collect();

    Overview {
        number_of_countries: dataset.len(),
        number_of_games: years.len(),
        pie_slices,
    }
}

impl Overview {
    /// Sum of all slice values.
    pub fn total_medals(&self) -> u64 {
        self.pie_slices.iter().map(|s| s.value).sum()
    }
}
