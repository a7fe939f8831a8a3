use crate::error::CountryNotFound;
use crate::models::{Country, Dataset, LineSeries, SeriesPoint};
use crate::selection::resolve;
use serde::{Deserialize, Serialize};

/// Figures shown on a country's detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryDetail {
    pub country: String,
    pub entries_count: usize,
    pub total_medals: u64,
    pub total_athletes: u64,
    pub line_series: LineSeries,
}

/// Compute the detail figures for the country named `name`.
///
/// Returns `CountryNotFound` when no country carries that exact name; callers are
/// expected to fall back to the overview in that case.
pub fn compute_detail(dataset: &Dataset, name: &str) -> Result<CountryDetail, CountryNotFound> {
    let country = resolve(dataset, name).ok_or_else(|| CountryNotFound(name.to_string()))?;
    Ok(detail_for(country))
}

/// Detail figures for an already resolved country.
pub fn detail_for(country: &Country) -> CountryDetail {
    let mut points: Vec<(i32, u32)> = country
        .participations
        .iter()
        .map(|p| (p.year, p.medals_count))
        .collect();
    // stable: same-year entries keep their order
    points.sort_by_key(|(year, _)| *year);

    CountryDetail {
        country: country.name.clone(),
        entries_count: country.participations.len(),
        total_medals: country.total_medals(),
        total_athletes: country.total_athletes(),
        line_series: LineSeries {
            name: country.name.clone(),
            series: points
                .into_iter()
                .map(|(year, medals)| SeriesPoint {
                    name: year.to_string(),
                    value: medals,
                })
                .collect(),
        },
    }
}
