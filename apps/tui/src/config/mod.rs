use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TERRITORIES_FILE: &str = "./data/territories.json";
pub const DEFAULT_LOG_FILE: &str = "campaign-tui.log";

/// Runtime settings, resolved from the environment after CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub territories_path: PathBuf,
    pub locked: bool,
    pub seed: Option<u64>,
    pub debug: bool,
    pub log_path: PathBuf,
}

impl Settings {
    /// Loads `.env` and reads the process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("SPINNER_SEED").and_then(|value| value.trim().parse().ok());

        Self {
            territories_path: lookup("TERRITORIES_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_TERRITORIES_FILE), PathBuf::from),
            locked: lookup("SPINNER_LOCKED").is_some_and(|value| is_truthy(&value)),
            seed,
            debug: lookup("DEBUG").is_some_and(|value| is_truthy(&value)),
            log_path: lookup("CAMPAIGN_LOG")
                .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
