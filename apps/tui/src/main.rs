use campaign_tui::app::App;
use campaign_tui::cli::CliArgs;
use campaign_tui::config::Settings;
use campaign_tui::{event, logging, terminal};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let settings = Settings::from_env();
    logging::init(&settings)?;

    let mut app = App::new(&settings);

    match app.load_roster() {
        Ok(0) => eprintln!("Roster is empty; nothing to spin"),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error loading territories: {e}");
            eprintln!("Will continue with an empty roster");
        }
    }

    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
