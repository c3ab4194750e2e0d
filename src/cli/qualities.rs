use tabled::Table;

use crate::{config::Settings, format::QualityTier, types::QualityTableRow};

/// Lists the quality tiers accepted by `--quality` and `QDL_QUALITY`.
pub fn qualities(settings: &Settings) {
    let rows: Vec<QualityTableRow> = QualityTier::ALL
        .iter()
        .map(|tier| QualityTableRow {
            id: tier.format_id(),
            quality: tier.label().to_string(),
            default: if *tier == settings.quality {
                "*".to_string()
            } else {
                String::new()
            },
        })
        .collect();

    println!("{}", Table::new(rows));
}
