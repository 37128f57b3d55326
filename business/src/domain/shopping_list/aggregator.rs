use std::collections::BTreeMap;

use super::model::{AggregatedLine, CartLine};

/// First line of every rendered shopping-list report.
pub const REPORT_HEADER: &str = "Shopping list";

/// Groups cart lines by `(ingredient name, unit)` and sums their amounts.
///
/// Grouping happens in-process on a materialized row set, so it stays
/// testable independent of any storage engine. Output order is
/// deterministic: ingredient name ascending, unit ascending on ties.
/// Input order never affects the result.
pub fn aggregate(lines: Vec<CartLine>) -> Vec<AggregatedLine> {
    let mut totals: BTreeMap<(String, String), i64> = BTreeMap::new();

    for line in lines {
        *totals
            .entry((line.ingredient_name, line.unit))
            .or_insert(0) += i64::from(line.amount);
    }

    totals
        .into_iter()
        .map(|((ingredient_name, unit), total)| AggregatedLine {
            ingredient_name,
            unit,
            total,
        })
        .collect()
}

/// Renders the downloadable plain-text report: the fixed header line
/// followed by one `<name> - <total> (<unit>)` line per aggregated entry,
/// each terminated with a newline. An empty cart yields a header-only
/// report, which is a success, not an error.
pub fn render_report(lines: &[AggregatedLine]) -> String {
    let mut report = format!("{REPORT_HEADER}\n");

    for line in lines {
        report.push_str(&format!(
            "{} - {} ({})\n",
            line.ingredient_name, line.total, line.unit
        ));
    }

    report
}
