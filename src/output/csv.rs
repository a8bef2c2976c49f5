use anyhow::Result;

use crate::comparison::{share_of_total, Comparison};
use crate::factors::ReferenceAverages;
use crate::suggestions::Suggestion;
use crate::types::{Breakdown, Category};

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn breakdown_to_csv(breakdown: &Breakdown) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["category", "kg_co2e_per_month", "share_pct"])?;
    for (category, value) in breakdown.entries() {
        writer.write_record([
            category.as_slug().to_string(),
            format!("{value:.1}"),
            format!("{:.2}", share_of_total(breakdown, category)),
        ])?;
    }
    writer.write_record([
        "total".to_string(),
        format!("{:.1}", breakdown.total),
        "100.00".to_string(),
    ])?;
    finish(writer)
}

pub fn comparison_to_csv(comparison: &Comparison) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["category", "yours", "average", "delta"])?;
    for c in &comparison.categories {
        writer.write_record([
            c.category.as_slug().to_string(),
            format!("{:.1}", c.yours),
            format!("{:.1}", c.average),
            format!("{:.1}", c.delta),
        ])?;
    }
    writer.write_record([
        "total".to_string(),
        format!("{:.1}", comparison.total),
        format!("{:.1}", comparison.average),
        format!("{:.1}", comparison.total - comparison.average),
    ])?;
    finish(writer)
}

pub fn suggestions_to_csv(suggestions: &[Suggestion]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["rank", "category", "rule", "priority", "message"])?;
    for (idx, s) in suggestions.iter().enumerate() {
        writer.write_record([
            (idx + 1).to_string(),
            s.category.map(|c| c.as_slug().to_string()).unwrap_or_default(),
            s.rule.clone().unwrap_or_default(),
            s.priority.to_string(),
            s.message.clone(),
        ])?;
    }
    finish(writer)
}

pub fn averages_to_csv(averages: &ReferenceAverages) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["category", "average_kg_co2e_per_month"])?;
    for category in Category::ALL {
        writer.write_record([
            category.as_slug().to_string(),
            format!("{:.1}", averages.category(category)),
        ])?;
    }
    writer.write_record(["overall".to_string(), format!("{:.1}", averages.overall)])?;
    finish(writer)
}
