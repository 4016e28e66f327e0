use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/geojson-counties-fips.json";
pub const DEFAULT_OUTPUT_PATH: &str = "assets/data/counties.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatagenConfig {
    pub source_url: String,
    pub output_path: PathBuf,
}

impl DatagenConfig {
    /// Reads `COUNTIES_SOURCE_URL` and `COUNTIES_OUTPUT`, loading `.env` first.
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            source_url: env::var("COUNTIES_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            output_path: env::var("COUNTIES_OUTPUT")
                .map_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH), PathBuf::from),
        }
    }
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
