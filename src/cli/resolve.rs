use tabled::Table;

use crate::{types::ResolvedUrlTableRow, url::parse_url, warning};

pub fn resolve(urls: Vec<String>) {
    let mut rows: Vec<ResolvedUrlTableRow> = Vec::new();

    for url in urls {
        match parse_url(&url) {
            Ok((kind, id)) => rows.push(ResolvedUrlTableRow {
                kind: kind.to_string(),
                id,
                url,
            }),
            Err(e) => warning!("{}. Skipping...", e),
        }
    }

    if rows.is_empty() {
        return;
    }

    println!("{}", Table::new(rows));
}
