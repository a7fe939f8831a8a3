//! Colors, locale mapping, and text sizing helpers for the chart renderers.

use super::types::ColorScheme;
use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // #4472C4
    RGBColor(237, 125, 49),  // #ED7D31
    RGBColor(165, 165, 165), // #A5A5A5
    RGBColor(255, 192, 0),   // #FFC000
    RGBColor(91, 155, 213),  // #5B9BD5
    RGBColor(112, 173, 71),  // #70AD47
    RGBColor(38, 68, 120),   // #264478
    RGBColor(158, 72, 14),   // #9E480E
    RGBColor(99, 99, 99),    // #636363
    RGBColor(153, 115, 0),   // #997300
];

const OLYMPIC6: [RGBColor; 6] = [
    RGBColor(149, 96, 101),  // #956065
    RGBColor(121, 61, 82),   // #793D52
    RGBColor(137, 161, 219), // #89A1DB
    RGBColor(151, 128, 161), // #9780A1
    RGBColor(191, 224, 241), // #BFE0F1
    RGBColor(184, 203, 231), // #B8CBE7
];

/// Pick the `idx`-th series color, cycling through the palette.
pub fn series_color(scheme: ColorScheme, idx: usize) -> RGBColor {
    match scheme {
        ColorScheme::Office => OFFICE10[idx % OFFICE10.len()],
        ColorScheme::Olympic => OLYMPIC6[idx % OLYMPIC6.len()],
    }
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Whole number with locale thousands separators (`1,234` vs `1.234`).
pub fn format_count(n: u64, locale_tag: &str) -> String {
    n.to_formatted_string(map_locale(locale_tag))
}

/// Heuristic pixel width of `text` (Plotters has no text measuring on this path).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Shorten `text` to fit `max_px`, ending in a single ellipsis when cut.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&format!("{out}…"), font_px) > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_locale_separators() {
        assert_eq!(format_count(1234567, "en"), "1,234,567");
        assert_eq!(format_count(1234567, "de"), "1.234.567");
        assert_eq!(format_count(12, "unknown"), "12");
    }

    #[test]
    fn palette_cycles() {
        let rgb = |c: RGBColor| (c.0, c.1, c.2);
        assert_eq!(
            rgb(series_color(ColorScheme::Olympic, 0)),
            rgb(series_color(ColorScheme::Olympic, 6))
        );
        assert_eq!(
            rgb(series_color(ColorScheme::Office, 1)),
            (237, 125, 49)
        );
    }

    #[test]
    fn truncation_adds_ellipsis_only_when_needed() {
        assert_eq!(truncate_to_width("France", 10, 200), "France");
        let t = truncate_to_width("United States of America", 10, 60);
        assert!(t.ends_with('…'));
        assert!(estimate_text_width_px(&t, 10) <= 60);
    }
}
