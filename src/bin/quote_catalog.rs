// Small dev utility: load a parts catalog and run queries against it without a UI.
//
// Usage:
//   cargo run --bin quote_catalog -- <catalog.xlsx|csv|tsv> [query ...]
//
// Optional JSON overrides are read from PARTS_QUOTATION_CONFIG when set.
// Set PARTS_QUOTATION_LOG_JSON to emit JSON log lines instead of plain text.

use parts_quotation::config::ConfigManager;
use parts_quotation::importer::CatalogImporter;
use parts_quotation::{logging, AppState, CatalogImporterImpl, UploadOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("PARTS_QUOTATION_LOG_JSON").is_some() {
        logging::init_json();
    } else {
        logging::init();
    }

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or("missing catalog path (usage: quote_catalog <file> [query ...])")?;

    let config = match std::env::var("PARTS_QUOTATION_CONFIG") {
        Ok(config_path) => ConfigManager::from_file(config_path)?,
        Err(_) => ConfigManager::new(),
    };

    let importer = CatalogImporterImpl::new(config.clone());
    let outcome = importer.ingest_path(&path).await?;

    let mut state = AppState::new(&config);
    let ticket = state.begin_upload();
    let report = match state.complete_upload(ticket, Ok(outcome)) {
        UploadOutcome::Loaded(report) => report,
        other => return Err(format!("catalog not loaded: {:?}", other).into()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    for query in args {
        let hits = state.query(&query).unwrap_or_default();
        println!("query={:?} hits={}", query, hits.len());
        for part in hits {
            println!(
                "  {}\t{}\t{}",
                part.item_no, part.item_description, part.mrp
            );
        }
    }
    Ok(())
}
