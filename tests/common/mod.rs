#![allow(dead_code)]

use olympic_stats::{Country, Dataset, Participation};

pub fn participation(id: u32, year: i32, medals: u32, athletes: u32) -> Participation {
    Participation {
        id,
        year,
        city: format!("City{year}"),
        medals_count: medals,
        athlete_count: athletes,
    }
}

pub fn country(id: u32, name: &str, participations: Vec<Participation>) -> Country {
    Country {
        id,
        name: name.into(),
        participations,
    }
}

/// France (2012: 3/10, 2016: 5/12) and USA (2012: 7/20).
pub fn france_usa() -> Dataset {
    Dataset::new(vec![
        country(
            1,
            "France",
            vec![participation(1, 2012, 3, 10), participation(2, 2016, 5, 12)],
        ),
        country(2, "USA", vec![participation(1, 2012, 7, 20)]),
    ])
}

pub fn mock_dataset_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/mock/olympic.json")
}
