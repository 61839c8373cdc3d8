// Broadcast Grid
// Reads a batch of slot records and prints the positioned layout as JSON

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use broadcast_grid::services::airing::airing_now;
use broadcast_grid::services::settings::SettingsService;
use broadcast_grid::{Clock, GridEngine, RawEvent, SystemClock};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let events_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: broadcast-grid <events.json> [settings.toml]"))?;

    let settings_service = match args.next() {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_location()?,
    };
    let settings = settings_service.load()?;

    let content = fs::read_to_string(&events_path)
        .with_context(|| format!("Failed to read {}", events_path.display()))?;
    let batch: Vec<RawEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events in {}", events_path.display()))?;

    let engine = GridEngine::new(settings)?;
    let result = engine.layout(&batch);

    if result.skipped_count() > 0 {
        log::warn!(
            "{} of {} records could not be placed on the grid",
            result.skipped_count(),
            batch.len()
        );
    }

    let now = SystemClock.now();
    let airing: Vec<&str> = airing_now(&result.layout, now)
        .into_iter()
        .map(|block| block.event.id.as_str())
        .collect();
    log::info!("{} blocks laid out, {} airing now", result.block_count(), airing.len());

    let output = serde_json::json!({
        "generatedAt": now,
        "layout": &result.layout,
        "skipped": &result.skipped,
        "airingNow": airing,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
