//! Presentation-boundary formatting. The core never rounds; only these helpers do.

use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets::UTF8_FULL};

/// Grams to one decimal, dropping a trailing `.0`.
pub fn fmt_g(x: f64) -> String {
    let v = (x * 10.0).round() / 10.0;
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0} g", v)
    } else {
        format!("{:.1} g", v)
    }
}

/// Small masses (yeast) need two decimals.
pub fn fmt_g_fine(x: f64) -> String {
    format!("{:.2} g", x)
}

pub fn fmt_pct(x: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, x)
}

pub fn fmt_hours(h: f64) -> String {
    format!("{:.1} h", h)
}

pub fn fmt_temp(v: f64, symbol: &str) -> String {
    format!("{:.1} {}", v, symbol)
}

pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}
