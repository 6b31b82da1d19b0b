//! Pretty output formatting.

use std::{collections::BTreeMap, fmt::Display};

use roofquote_core::quote::{FilterOptions, Quote, SummaryStats};

const MISSING: &str = "-";

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// Format a quote for display.
pub fn format_quote(quote: &Quote) -> String {
    let size = quote
        .roof_size
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| MISSING.to_string());

    format!(
        "#{} {} ({})\n  Roof: {} / {}\n  Location: {}, {}\n  Date: {}",
        quote.id,
        or_missing(quote.contractor_name.as_deref()),
        or_missing(quote.company.as_deref()),
        or_missing(quote.roof_type.as_deref()),
        size,
        or_missing(quote.city.as_deref()),
        or_missing(quote.state.as_deref()),
        or_missing(quote.project_date.as_deref()),
    )
}

/// Format quotes for display.
pub fn format_quotes(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found.".to_string();
    }
    let mut output = format!("QUOTES ({})\n", quotes.len());
    output.push_str(&"-".repeat(40));
    for quote in quotes {
        output.push_str(&format!("\n{}", format_quote(quote)));
        output.push('\n');
    }
    output
}

fn format_list(title: &str, values: &[Option<String>]) -> String {
    let items: Vec<&str> = values.iter().map(|v| or_missing(v.as_deref())).collect();
    format!("{} ({}): {}", title, values.len(), items.join(", "))
}

/// Format filter options for display.
pub fn format_filters(filters: &FilterOptions) -> String {
    [
        format_list("States", &filters.states),
        format_list("Roof types", &filters.roof_types),
        format_list("Dates", &filters.dates),
    ]
    .join("\n")
}

/// Format summary statistics for display.
pub fn format_summary(summary: &SummaryStats) -> String {
    format!(
        "SUMMARY\n  Total projects: {}\n  Average roof size: {:.2}\n  Most common roof type: {}",
        summary.total_projects,
        summary.average_roof_size,
        or_missing(summary.common_roof_type.as_deref()),
    )
}

/// Format a grouped statistic as aligned `key  value` rows.
pub fn format_map<V: Display>(title: &str, map: &BTreeMap<String, V>) -> String {
    if map.is_empty() {
        return format!("{}\n  (no data)", title);
    }
    let width = map.keys().map(String::len).max().unwrap_or(0);
    let mut output = title.to_string();
    for (key, value) in map {
        output.push_str(&format!("\n  {:<width$}  {}", key, value, width = width));
    }
    output
}
