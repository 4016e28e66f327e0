use campaign_datagen::{generate, logging, DatagenConfig};
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let config = DatagenConfig::from_env();
    generate(&config).await?;

    Ok(())
}
