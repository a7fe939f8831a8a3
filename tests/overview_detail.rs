mod common;

use common::{country, france_usa, participation};
use olympic_stats::models::{LineSeries, PieSlice, SeriesPoint};
use olympic_stats::{CountryNotFound, Dataset, compute_detail, compute_overview, resolve};

#[test]
fn overview_counts_countries_games_and_medals() {
    let ds = france_usa();
    let ov = compute_overview(&ds);
    assert_eq!(ov.number_of_countries, 2);
    assert_eq!(ov.number_of_games, 2);
    assert_eq!(
        ov.pie_slices,
        vec![
            PieSlice {
                name: "France".into(),
                value: 8
            },
            PieSlice {
                name: "USA".into(),
                value: 7
            },
        ]
    );
    assert_eq!(ov.total_medals(), 15);
}

#[test]
fn detail_for_france() {
    let ds = france_usa();
    let d = compute_detail(&ds, "France").unwrap();
    assert_eq!(d.entries_count, 2);
    assert_eq!(d.total_medals, 8);
    assert_eq!(d.total_athletes, 22);
    assert_eq!(
        d.line_series,
        LineSeries {
            name: "France".into(),
            series: vec![
                SeriesPoint {
                    name: "2012".into(),
                    value: 3
                },
                SeriesPoint {
                    name: "2016".into(),
                    value: 5
                },
            ],
        }
    );
}

#[test]
fn detail_for_unknown_country_is_not_found() {
    let ds = france_usa();
    assert_eq!(
        compute_detail(&ds, "Germany"),
        Err(CountryNotFound("Germany".into()))
    );
    assert!(resolve(&ds, "Germany").is_none());
}

#[test]
fn country_without_participations_yields_zeros() {
    let ds = Dataset::new(vec![country(9, "Atlantis", vec![])]);
    let d = compute_detail(&ds, "Atlantis").unwrap();
    assert_eq!(d.entries_count, 0);
    assert_eq!(d.total_medals, 0);
    assert_eq!(d.total_athletes, 0);
    assert!(d.line_series.series.is_empty());

    let ov = compute_overview(&ds);
    assert_eq!(ov.number_of_countries, 1);
    assert_eq!(ov.number_of_games, 0);
    assert_eq!(ov.pie_slices[0].value, 0);
}

#[test]
fn shared_years_are_counted_once() {
    // Three countries, overlapping editions: distinct years {2008, 2012, 2016, 2020}.
    let ds = Dataset::new(vec![
        country(
            1,
            "A",
            vec![participation(1, 2012, 1, 1), participation(2, 2016, 1, 1)],
        ),
        country(
            2,
            "B",
            vec![participation(1, 2008, 1, 1), participation(2, 2012, 1, 1)],
        ),
        country(
            3,
            "C",
            vec![participation(1, 2020, 1, 1), participation(2, 2016, 1, 1)],
        ),
    ]);
    assert_eq!(compute_overview(&ds).number_of_games, 4);
}

#[test]
fn line_series_is_sorted_by_year_for_unsorted_input() {
    let ds = Dataset::new(vec![country(
        1,
        "Italy",
        vec![
            participation(1, 2020, 40, 381),
            participation(2, 2000, 34, 361),
            participation(3, 2012, 28, 372),
            participation(4, 1996, 35, 340),
        ],
    )]);
    let d = compute_detail(&ds, "Italy").unwrap();
    let years: Vec<&str> = d.line_series.series.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(years, vec!["1996", "2000", "2012", "2020"]);
    let medals: Vec<u32> = d.line_series.series.iter().map(|p| p.value).collect();
    assert_eq!(medals, vec![35, 34, 28, 40]);
}

#[test]
fn same_year_entries_keep_original_order() {
    let ds = Dataset::new(vec![country(
        1,
        "X",
        vec![
            participation(1, 2016, 9, 1),
            participation(2, 2012, 1, 1),
            participation(3, 2016, 4, 1),
        ],
    )]);
    let d = compute_detail(&ds, "X").unwrap();
    let medals: Vec<u32> = d.line_series.series.iter().map(|p| p.value).collect();
    assert_eq!(medals, vec![1, 9, 4]);
}

#[test]
fn sorting_is_numeric_not_lexical() {
    let ds = Dataset::new(vec![country(
        1,
        "Y",
        vec![participation(1, 2000, 1, 1), participation(2, 900, 2, 1)],
    )]);
    let d = compute_detail(&ds, "Y").unwrap();
    assert_eq!(d.line_series.series[0].name, "900");
}

#[test]
fn pie_slices_match_participation_sums() {
    let ds = common::france_usa();
    let ov = compute_overview(&ds);
    for (slice, c) in ov.pie_slices.iter().zip(ds.iter()) {
        assert_eq!(slice.name, c.name);
        let sum: u64 = c.participations.iter().map(|p| u64::from(p.medals_count)).sum();
        assert_eq!(slice.value, sum);
    }
}

#[test]
fn aggregations_are_idempotent() {
    let ds = france_usa();
    let before = ds.clone();
    assert_eq!(compute_overview(&ds), compute_overview(&ds));
    assert_eq!(compute_detail(&ds, "USA"), compute_detail(&ds, "USA"));
    assert_eq!(ds, before);
}

#[test]
fn duplicate_names_resolve_to_first_entry() {
    let ds = Dataset::new(vec![
        country(1, "France", vec![participation(1, 2012, 3, 10)]),
        country(2, "France", vec![participation(1, 2012, 99, 99)]),
    ]);
    let d = compute_detail(&ds, "France").unwrap();
    assert_eq!(d.total_medals, 3);
}
