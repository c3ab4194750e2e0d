use std::path::PathBuf;

use tabled::Table;

use super::{DownloadRequest, connect, download, spinner};
use crate::{
    config::{self, Settings},
    error,
    format::QualityTier,
    info,
    qobuz::{QobuzClient, SearchHit, SearchKind, validate_query},
    success,
    types::SearchTableRow,
    warning,
};

pub struct LuckyRequest {
    pub query: String,
    pub kind: SearchKind,
    /// How many of the first hits to download.
    pub number: u32,
    pub quality: Option<QualityTier>,
    pub no_fallback: bool,
    pub directory: Option<PathBuf>,
}

/// Prints the hits of a catalog search with the url of each one.
pub async fn search(query: String, kind: SearchKind, limit: u32, settings: &Settings) {
    let client = client(settings);
    let hits = run_search(&client, &query, kind, limit).await;

    if hits.is_empty() {
        warning!("Nothing found for \"{}\".", query.trim());
        return;
    }

    let count = hits.len();
    let rows: Vec<SearchTableRow> = hits
        .into_iter()
        .map(|hit| SearchTableRow {
            result: hit.text,
            url: hit.url,
        })
        .collect();

    println!("{}\n", Table::new(rows));
    success!("{} {} results.", count, kind);
}

/// Downloads the first `number` hits of a search without asking.
pub async fn lucky(request: LuckyRequest, settings: &Settings) {
    let client = client(settings);
    let hits = run_search(&client, &request.query, request.kind, request.number).await;

    if hits.is_empty() {
        warning!("Nothing found for \"{}\".", request.query.trim());
        return;
    }

    for hit in &hits {
        info!("Found: {}", hit.text);
    }

    download(
        DownloadRequest {
            targets: hits.into_iter().map(|hit| hit.url).collect(),
            quality: request.quality,
            no_fallback: request.no_fallback,
            directory: request.directory,
        },
        settings,
    )
    .await
}

fn client(settings: &Settings) -> QobuzClient {
    match connect(settings) {
        Ok(client) => client,
        Err(e) => error!(
            "{}. Add it to {}",
            e,
            config::data_dir().join(".env").display()
        ),
    }
}

async fn run_search(
    client: &QobuzClient,
    query: &str,
    kind: SearchKind,
    limit: u32,
) -> Vec<SearchHit> {
    let query = match validate_query(query) {
        Ok(query) => query,
        Err(e) => error!("{}", e),
    };

    let pb = spinner(format!("Searching {}s for \"{}\"...", kind, query));
    let hits = client.search(kind, query, limit).await;
    pb.finish_and_clear();

    match hits {
        Ok(hits) => hits,
        Err(e) => error!("Search failed: {}", e),
    }
}
