use catalog::bands::group_by_band;
use catalog::pricing::{find_most_economical, price, price_per_cubic_yard};
use catalog::recommend::{capacity_description, recommend};
use catalog::stats::stats;
use catalog::{BrowseState, Catalog, SizeRange};
use common::config::Config;
use common::logging::setup_logging;
use std::error::Error;
use tracing::info;

const ECONOMY_WINDOW: SizeRange = SizeRange::new(4.0, 16.0);

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    setup_logging("analyze", &config.logging)?;

    let catalog = Catalog::from_config(&config.catalog)?;
    let state = BrowseState::from_config(&config)?;
    info!("catalog: {catalog:?}, postcode: `{}`", state.postcode);

    let visible = state.visible(&catalog);
    info!(
        "showing `{}` containers, filters: {:?}",
        visible.len(),
        state.filter_summary()
    );
    for record in &visible {
        let breakdown = price(record);
        info!(
            "#{} {} yards: {} + {} VAT = {} ({}/yard)",
            record.id,
            record.size,
            breakdown.formatted_base,
            breakdown.formatted_vat,
            breakdown.formatted_total,
            price_per_cubic_yard(record).round()
        );
    }

    for (band, records) in group_by_band(catalog.records()) {
        let sizes = records.iter().map(|r| r.size).collect::<Vec<_>>();
        info!("{band}: {sizes:?}");
    }

    if let Some(best) = find_most_economical(catalog.records(), ECONOMY_WINDOW) {
        info!(
            "most economical in {ECONOMY_WINDOW} yards: #{} ({})",
            best.id,
            capacity_description(best.size)
        );
    }

    let recommended = recommend(catalog.records(), state.project_type);
    info!(
        "recommended for `{}`: {:?}",
        state
            .project_type
            .map_or("any project".to_string(), |p| p.to_string()),
        recommended.iter().map(|r| r.size).collect::<Vec<_>>()
    );

    println!("{}", serde_json::to_string_pretty(&stats(catalog.records()))?);
    println!(
        "{}",
        serde_json::to_string_pretty(&state.browse_stats(&catalog))?
    );
    Ok(())
}
