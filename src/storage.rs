use crate::detail::CountryDetail;
use crate::overview::Overview;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix text cells that a spreadsheet would evaluate as a formula.
fn safe_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save the overview pie slices as CSV (`country,medals`).
pub fn save_overview_csv<P: AsRef<Path>>(overview: &Overview, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["country", "medals"])?;
    for s in &overview.pie_slices {
        wtr.write_record([safe_cell(&s.name), s.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the full overview (counts and slices) as pretty JSON.
pub fn save_overview_json<P: AsRef<Path>>(overview: &Overview, path: P) -> Result<()> {
    write_json(overview, path)
}

/// Save a country's medal series as CSV (`country,year,medals`).
pub fn save_detail_csv<P: AsRef<Path>>(detail: &CountryDetail, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["country", "year", "medals"])?;
    let country = safe_cell(&detail.line_series.name);
    for p in &detail.line_series.series {
        wtr.write_record([country.clone(), safe_cell(&p.name), p.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a country's detail figures and series as pretty JSON.
pub fn save_detail_json<P: AsRef<Path>>(detail: &CountryDetail, path: P) -> Result<()> {
    write_json(detail, path)
}

fn write_json<T: serde::Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_starters_are_quoted() {
        assert_eq!(safe_cell("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(safe_cell("@foo"), "'@foo");
        assert_eq!(safe_cell("France"), "France");
        assert_eq!(safe_cell(""), "");
    }
}
