use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "campaign-tui", version, about = "Campaign territory spinner")]
pub struct CliArgs {
    /// Spin once without a UI and print the result
    #[arg(long)]
    pub headless: bool,

    /// Print the headless result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the territories file
    #[arg(long, value_name = "PATH")]
    pub territories: Option<String>,

    /// Start with the spinner disabled
    #[arg(long)]
    pub locked: bool,

    /// Seed the spinner for repeatable spins
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.territories {
            std::env::set_var("TERRITORIES_FILE", path);
        }
        if let Some(seed) = self.seed {
            std::env::set_var("SPINNER_SEED", seed.to_string());
        }
        if self.locked {
            std::env::set_var("SPINNER_LOCKED", "1");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
