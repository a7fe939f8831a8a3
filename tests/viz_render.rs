mod common;

use olympic_stats::viz::{self, ChartConfig, ColorScheme, LegendMode};
use olympic_stats::{LineSeries, compute_detail, compute_overview};
use std::fs;
use std::path::Path;

fn assert_nonempty(path: &Path) {
    let meta = fs::metadata(path).expect("file created");
    assert!(meta.len() > 0, "chart has content");
}

#[test]
fn pie_renders_for_each_legend_mode() {
    let ov = compute_overview(&common::france_usa());
    let dir = tempfile::tempdir().unwrap();
    for (i, legend) in [LegendMode::Right, LegendMode::Bottom, LegendMode::Hidden]
        .into_iter()
        .enumerate()
    {
        let path = dir.path().join(format!("pie_{i}.svg"));
        let cfg = ChartConfig::default().with_legend(legend);
        viz::plot_pie(&ov.pie_slices, &path, &cfg, "en").unwrap();
        assert_nonempty(&path);
    }
}

#[test]
fn pie_png_with_office_palette() {
    let ov = compute_overview(&common::france_usa());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pie.png");
    let cfg = ChartConfig {
        colors: ColorScheme::Office,
        ..ChartConfig::default().with_size(640, 480)
    };
    viz::plot_pie(&ov.pie_slices, &path, &cfg, "de").unwrap();
    assert_nonempty(&path);
}

#[test]
fn svg_pie_mentions_title_and_countries() {
    let ov = compute_overview(&common::france_usa());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pie_labels.svg");
    let cfg = ChartConfig::default().with_title("Medals per Country");
    viz::plot_pie(&ov.pie_slices, &path, &cfg, "en").unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Medals per Country"));
    assert!(svg.contains("France"));
}

#[test]
fn line_renders_svg_and_png() {
    let d = compute_detail(&common::france_usa(), "France").unwrap();
    let dir = tempfile::tempdir().unwrap();
    for name in ["line.svg", "line.png"] {
        let path = dir.path().join(name);
        viz::plot_line(&d.line_series, &path, &ChartConfig::default(), "en").unwrap();
        assert_nonempty(&path);
    }
}

#[test]
fn single_edition_line_still_renders() {
    let d = compute_detail(&common::france_usa(), "USA").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usa.svg");
    viz::plot_line(&d.line_series, &path, &ChartConfig::default(), "en").unwrap();
    assert_nonempty(&path);
}

#[test]
fn empty_inputs_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ChartConfig::default();
    assert!(viz::plot_pie(&[], dir.path().join("a.svg"), &cfg, "en").is_err());
    let empty = LineSeries {
        name: "Atlantis".into(),
        series: vec![],
    };
    assert!(viz::plot_line(&empty, dir.path().join("b.svg"), &cfg, "en").is_err());
}
