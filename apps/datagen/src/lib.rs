//! Build-time generator for the county lookup table used by the campaign UI.
//!
//! One run fetches the county FeatureCollection, files every county under its
//! state, sorts each state's counties by name and writes the result as JSON.
//! Any failure aborts the run; nothing is retried and no partial file is
//! written.

pub mod collate;
pub mod config;
pub mod counties;
pub mod error;
pub mod fetch;
pub mod geojson;
pub mod logging;
pub mod output;
pub mod states;

pub use config::DatagenConfig;
pub use counties::{County, CountyIndex, StateCounties};
pub use error::DatagenError;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub features: usize,
    pub counties: usize,
    pub states: usize,
    pub output: PathBuf,
}

pub async fn generate(config: &DatagenConfig) -> Result<GenerationSummary, DatagenError> {
    println!("Fetching county boundaries from {}...", config.source_url);
    let collection = fetch::fetch_feature_collection(&config.source_url).await?;
    println!("Fetched {} features", collection.features.len());

    let summary = write_features(&collection.features, config)?;
    println!(
        "Wrote {} counties across {} states to {}",
        summary.counties,
        summary.states,
        summary.output.display()
    );

    Ok(summary)
}

/// Transform and write steps of [`generate`], without the network call.
pub fn write_features(
    features: &[geojson::Feature],
    config: &DatagenConfig,
) -> Result<GenerationSummary, DatagenError> {
    let index = CountyIndex::from_features(features)?;
    tracing::debug!(
        counties = index.county_count(),
        states = index.state_count(),
        "built county index"
    );

    output::write_index(&config.output_path, &index)?;

    Ok(GenerationSummary {
        features: features.len(),
        counties: index.county_count(),
        states: index.state_count(),
        output: config.output_path.clone(),
    })
}
