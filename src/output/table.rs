use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::comparison::{share_of_total, Comparison, Position};
use crate::factors::ReferenceAverages;
use crate::suggestions::Suggestion;
use crate::types::{Breakdown, Category, EstimateReport};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn render_breakdown_table(breakdown: &Breakdown) -> String {
    let mut table = new_table();
    table.set_header(vec!["Category", "kg CO2e / month", "Share"]);
    for (category, value) in breakdown.entries() {
        table.add_row(vec![
            category.to_string(),
            format!("{value:.1}"),
            format!("{:.0}%", share_of_total(breakdown, category)),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        format!("{:.1}", breakdown.total),
        "100%".to_string(),
    ]);
    table.to_string()
}

pub fn render_comparison_table(comparison: &Comparison) -> String {
    let mut table = new_table();
    table.set_header(vec!["Category", "You", "Average", "Difference"]);
    for c in &comparison.categories {
        let delta_cell = if c.delta > 0.0 {
            Cell::new(format!("{:+.1}", c.delta)).fg(Color::Red)
        } else {
            Cell::new(format!("{:+.1}", c.delta)).fg(Color::Green)
        };
        table.add_row(Row::from(vec![
            Cell::new(c.category.to_string()),
            Cell::new(format!("{:.1}", c.yours)),
            Cell::new(format!("{:.0}", c.average)),
            delta_cell,
        ]));
    }
    let headline_color = match comparison.position {
        Position::Below => Color::Green,
        Position::Above => Color::Red,
    };
    table.add_row(Row::from(vec![
        Cell::new("Total"),
        Cell::new(format!("{:.1}", comparison.total)),
        Cell::new(format!("{:.0}", comparison.average)),
        Cell::new(comparison.headline()).fg(headline_color),
    ]));
    table.to_string()
}

pub fn render_suggestions_table(suggestions: &[Suggestion]) -> String {
    let mut table = new_table();
    table.set_header(vec!["#", "Category", "Suggestion"]);
    for (idx, s) in suggestions.iter().enumerate() {
        let category = s
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![(idx + 1).to_string(), category, s.message.clone()]);
    }
    table.to_string()
}

pub fn render_averages_table(averages: &ReferenceAverages) -> String {
    let mut table = new_table();
    table.set_header(vec!["Category", "Average kg CO2e / month"]);
    for category in Category::ALL {
        table.add_row(vec![
            category.to_string(),
            format!("{:.0}", averages.category(category)),
        ]);
    }
    table.add_row(vec!["Overall".to_string(), format!("{:.0}", averages.overall)]);
    table.to_string()
}

pub fn render_report(report: &EstimateReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Your carbon footprint: {:.1} kg CO2 per month\n{}\n\n",
        report.breakdown.total,
        report.comparison.headline()
    ));
    out.push_str(&render_comparison_table(&report.comparison));
    out.push_str("\n\n");
    out.push_str(&render_breakdown_table(&report.breakdown));
    out.push_str("\n\n");
    out.push_str(&render_suggestions_table(&report.suggestions));
    out
}
