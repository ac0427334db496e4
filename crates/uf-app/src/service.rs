//! Conversion and history services shared by the frontends.

use crate::error::AppResult;
use serde::Serialize;
use uf_catalog::Category;
use uf_core::format_sig;
use uf_engine::{Conversion, convert_many, formula_text, parse_values};
use uf_session::{HistoryEntry, Session};

/// Results for one conversion request, plus the formula shared by all of
/// its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutcome {
    pub results: Vec<Conversion>,
    pub formula: String,
}

/// All catalog categories, in display order.
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Ordered unit names for `category`.
pub fn list_units(category: Category) -> Vec<&'static str> {
    category.unit_names()
}

/// Convert already-parsed values.
pub fn convert_values(
    category: Category,
    values: &[f64],
    from_unit: &str,
    to_unit: &str,
) -> AppResult<ConversionOutcome> {
    let results = convert_many(category, values, from_unit, to_unit)?;
    let formula = formula_text(category, from_unit, to_unit)?;
    Ok(ConversionOutcome { results, formula })
}

/// Parse comma-separated numeric text, then convert.
///
/// A malformed token rejects the whole input; no values are converted.
pub fn convert_input(
    category: Category,
    input: &str,
    from_unit: &str,
    to_unit: &str,
) -> AppResult<ConversionOutcome> {
    let values = parse_values(input)?;
    convert_values(category, &values, from_unit, to_unit)
}

/// Append a conversion to the session history.
pub fn record_conversion(
    session: &mut Session,
    category: Category,
    outcome: &ConversionOutcome,
    from_unit: &str,
    to_unit: &str,
) {
    let originals: Vec<f64> = outcome.results.iter().map(|r| r.original).collect();
    let converted: Vec<f64> = outcome.results.iter().map(|r| r.converted).collect();
    session.record(HistoryEntry::new(
        category,
        format!("{} {}", describe_values(&originals), from_unit),
        format!("{} {}", describe_values(&converted), to_unit),
    ));
}

/// The full session history, oldest first.
pub fn list_history(session: &Session) -> &[HistoryEntry] {
    session.entries()
}

/// Session history as pretty-printed JSON.
pub fn history_json(session: &Session) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(session.entries())?)
}

fn describe_values(values: &[f64]) -> String {
    let rendered: Vec<String> = values.iter().map(|&v| format_sig(v, 6)).collect();
    format!("[{}]", rendered.join(", "))
}
