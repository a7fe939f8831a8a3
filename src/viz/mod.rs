//! Chart rendering for the overview and detail pages, to **SVG** or **PNG**.
//!
//! - `plot_pie`: medals per country, one slice per country
//! - `plot_line`: medals per Games edition for one country, with point markers
//! - Output format follows the file extension (`.svg`, anything else is a bitmap)
//! - Locale-aware counts in legends and tick labels

pub mod types;
pub mod util;

pub use types::{ChartConfig, ColorScheme, DEFAULT_LEGEND_MODE, LegendMode};

use crate::models::{LineSeries, PieSlice};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::series::LineSeries as PlotLine;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use util::{estimate_text_width_px, format_count, series_color, truncate_to_width};

const TITLE_FONT_PX: u32 = 24;
const LABEL_FONT_PX: u32 = 14;
const LEGEND_FONT_PX: u32 = 13;
const MARGIN: i32 = 16;

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        // src/viz/mod.rs -> project root -> assets/DejaVuSans.ttf
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        )
        .is_err()
        {
            log::warn!("bundled chart font could not be registered");
        }
    });
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// Render the overview pie chart (medals per country).
pub fn plot_pie<P: AsRef<Path>>(
    slices: &[PieSlice],
    out_path: P,
    config: &ChartConfig,
    locale_tag: &str,
) -> Result<()> {
    if slices.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    if slices.iter().all(|s| s.value == 0) {
        return Err(anyhow!("no medals to plot"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let size = (config.width, config.height);

    if is_svg(out_path) {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_pie(root, slices, config, locale_tag)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_pie(root, slices, config, locale_tag)?;
    }
    log::debug!("wrote pie chart with {} slices to {}", slices.len(), out_path.display());
    Ok(())
}

fn draw_pie<DB>(
    root: DrawingArea<DB, Shift>,
    slices: &[PieSlice],
    config: &ChartConfig,
    locale_tag: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let title = config.title.as_deref().unwrap_or("Medals per Country");
    let body = root
        .titled(title, ("sans-serif", f64::from(TITLE_FONT_PX)))
        .map_err(|e| anyhow!("{:?}", e))?;

    let legend_labels: Vec<String> = slices
        .iter()
        .map(|s| format!("{} ({})", s.name, format_count(s.value, locale_tag)))
        .collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| series_color(config.colors, i))
        .collect();

    let (w, h) = body.dim_in_pixel();
    let (pie_area, legend_area) = match config.legend {
        LegendMode::Right => {
            let widest = legend_labels
                .iter()
                .map(|l| estimate_text_width_px(l, LEGEND_FONT_PX))
                .max()
                .unwrap_or(0);
            let legend_w = (widest + 40).min(w / 3);
            let (a, b) = body.split_horizontally(w.saturating_sub(legend_w));
            (a, Some(b))
        }
        LegendMode::Bottom => {
            let rows = legend_rows(&legend_labels, w as i32).len() as u32;
            let band = rows * (LEGEND_FONT_PX + 8) + 12;
            let (a, b) = body.split_vertically(h.saturating_sub(band.min(h / 2)));
            (a, Some(b))
        }
        LegendMode::Hidden => (body, None),
    };

    let (pw, ph) = pie_area.dim_in_pixel();
    let center = (pw as i32 / 2, ph as i32 / 2);
    let ratio = config.pie_radius_ratio.clamp(0.1, 0.5);
    let radius = f64::from(pw.min(ph)) * ratio;
    let sizes: Vec<f64> = slices.iter().map(|s| s.value as f64).collect();
    let slice_labels: Vec<String> = if config.slice_labels {
        slices.iter().map(|s| s.name.clone()).collect()
    } else {
        vec![String::new(); slices.len()]
    };

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &slice_labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", f64::from(LABEL_FONT_PX)).into_font().color(&BLACK));
    pie.label_offset(radius * 0.25);
    pie_area.draw(&pie).map_err(|e| anyhow!("{:?}", e))?;

    if let Some(area) = legend_area {
        draw_legend(&area, &legend_labels, &colors, config.legend)?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Greedy flow of legend entries into rows that fit `total_w` pixels.
fn legend_rows(labels: &[String], total_w: i32) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut cur: Vec<usize> = Vec::new();
    let mut x = MARGIN;
    for (i, label) in labels.iter().enumerate() {
        let block = legend_block_width(label);
        if !cur.is_empty() && x + block > total_w - MARGIN {
            rows.push(std::mem::take(&mut cur));
            x = MARGIN;
        }
        cur.push(i);
        x += block;
    }
    if !cur.is_empty() {
        rows.push(cur);
    }
    rows
}

fn legend_block_width(label: &str) -> i32 {
    // swatch + gap + text + trailing gap
    12 + 8 + estimate_text_width_px(label, LEGEND_FONT_PX) as i32 + 16
}

fn draw_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    labels: &[String],
    colors: &[RGBColor],
    mode: LegendMode,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (w, _h) = area.dim_in_pixel();
    let font = ("sans-serif", f64::from(LEGEND_FONT_PX)).into_font().color(&BLACK);
    let line_h = LEGEND_FONT_PX as i32 + 8;

    let place = |label: &str, color: RGBColor, x: i32, y: i32| -> Result<()> {
        area.draw(&Rectangle::new([(x, y), (x + 12, y + 12)], color.filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        area.draw(&Text::new(label.to_string(), (x + 20, y), font.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    };

    match mode {
        LegendMode::Right => {
            let max_text = (w as i32 - 20 - MARGIN).max(40) as u32;
            for (i, label) in labels.iter().enumerate() {
                let text = truncate_to_width(label, LEGEND_FONT_PX, max_text);
                place(&text, colors[i], 0, MARGIN + i as i32 * line_h)?;
            }
        }
        LegendMode::Bottom => {
            for (row_idx, row) in legend_rows(labels, w as i32).iter().enumerate() {
                let mut x = MARGIN;
                let y = 6 + row_idx as i32 * line_h;
                for &i in row {
                    place(&labels[i], colors[i], x, y)?;
                    x += legend_block_width(&labels[i]);
                }
            }
        }
        LegendMode::Hidden => {}
    }
    Ok(())
}

/// Render a country's medals-per-edition line chart.
///
/// Point labels are edition years; points whose label is not a year are skipped.
pub fn plot_line<P: AsRef<Path>>(
    series: &LineSeries,
    out_path: P,
    config: &ChartConfig,
    locale_tag: &str,
) -> Result<()> {
    let points: Vec<(i32, f64)> = series
        .series
        .iter()
        .filter_map(|p| p.name.trim().parse::<i32>().ok().map(|y| (y, f64::from(p.value))))
        .collect();
    if points.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();

    let (mut min_year, mut max_year) = points
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), (y, _)| (lo.min(*y), hi.max(*y)));
    if min_year == max_year {
        min_year = min_year.saturating_sub(1);
        max_year = max_year.saturating_add(1);
    }
    let max_val = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let y_top = if max_val <= 0.0 { 1.0 } else { max_val * 1.1 };

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let size = (config.width, config.height);
    let ranges = (min_year, max_year, y_top);

    if is_svg(out_path) {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_line(root, &series.name, &points, ranges, config, locale_tag)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_line(root, &series.name, &points, ranges, config, locale_tag)?;
    }
    log::debug!("wrote line chart for {} to {}", series.name, out_path.display());
    Ok(())
}

/// One x tick per edition year, capped at 12.
fn x_label_count(min_year: i32, max_year: i32) -> usize {
    let span = max_year.abs_diff(min_year).saturating_add(1);
    usize::try_from(span).unwrap_or(usize::MAX).min(12)
}

fn draw_line<DB>(
    root: DrawingArea<DB, Shift>,
    name: &str,
    points: &[(i32, f64)],
    (min_year, max_year, y_top): (i32, i32, f64),
    config: &ChartConfig,
    locale_tag: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let title = config.title.as_deref().unwrap_or(name);
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(title, ("sans-serif", TITLE_FONT_PX))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(min_year..max_year, 0f64..y_top)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |y: &i32| y.to_string();
    let y_label_fmt = |v: &f64| format_count(v.max(0.0).round() as u64, locale_tag);
    let x_ticks = x_label_count(min_year, max_year);

    chart
        .configure_mesh()
        .x_desc(config.x_axis_label.as_str())
        .y_desc(config.y_axis_label.as_str())
        .x_labels(x_ticks)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", LABEL_FONT_PX))
        .axis_desc_style(("sans-serif", LABEL_FONT_PX + 2))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let color = series_color(config.colors, 0);
    chart
        .draw_series(PlotLine::new(points.iter().copied(), color.stroke_width(2)))
        .map_err(|e| anyhow!("{:?}", e))?
        .label(name.to_string())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)));
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
        .map_err(|e| anyhow!("{:?}", e))?;

    let position = match config.legend {
        LegendMode::Right => Some(SeriesLabelPosition::UpperRight),
        LegendMode::Bottom => Some(SeriesLabelPosition::LowerMiddle),
        LegendMode::Hidden => None,
    };
    if let Some(position) = position {
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .position(position)
            .background_style(&WHITE.mix(0.85))
            .label_font(("sans-serif", LEGEND_FONT_PX))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_rows_wrap_when_too_wide() {
        let labels: Vec<String> = (0..10).map(|i| format!("Country number {i} (100)")).collect();
        let rows = legend_rows(&labels, 400);
        assert!(rows.len() > 1);
        assert_eq!(rows.iter().map(|r| r.len()).sum::<usize>(), labels.len());
    }

    #[test]
    fn x_label_count_handles_extreme_year_spans() {
        assert_eq!(x_label_count(2012, 2020), 9);
        assert_eq!(x_label_count(2016, 2016), 1);
        assert_eq!(x_label_count(2020, 2012), 9);
        assert_eq!(x_label_count(i32::MIN, i32::MAX), 12);
    }

    #[test]
    fn single_short_label_fits_one_row() {
        let rows = legend_rows(&["France (8)".to_string()], 800);
        assert_eq!(rows, vec![vec![0]]);
    }
}
