use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::domain::{Owner, Territory};
use crate::ui;

/// Roughly one frame at 60 fps, short enough for the fastest spin ticks.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Apply due spin ticks before drawing them
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Blocking poll; keep the spin timer task runnable in between
        if matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        tokio::task::yield_now().await;
    }

    // Leaving the loop tears the spinner down with any running timer
    app.spinner.cancel();
    Ok(())
}

/// Outcome of one headless spin.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HeadlessSpin {
    pub selected: Option<HeadlessTerritory>,
    pub candidates: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlessTerritory {
    pub id: String,
    pub name: String,
    pub owner: Owner,
    pub victory_points: u32,
}

impl From<&Territory> for HeadlessTerritory {
    fn from(territory: &Territory) -> Self {
        Self {
            id: territory.id.clone(),
            name: territory.name.clone(),
            owner: territory.owner,
            victory_points: territory.victory_points,
        }
    }
}

/// Spins once and waits for it to settle, with no terminal UI.
pub async fn spin_once(app: &mut App) -> HeadlessSpin {
    app.spin();

    if app.spinner.is_spinning() {
        let settled = app.spinner.settle(&mut app.selection).await;
        tracing::info!(id = ?settled, "headless spin settled");
    }

    HeadlessSpin {
        selected: app.selected_territory().map(HeadlessTerritory::from),
        candidates: app.territories.len(),
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let outcome = spin_once(app).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome.selected {
        Some(territory) => {
            println!("\nNext Campaign");
            println!("=============");
            println!("{}", territory.name);
            println!("Held by: {}", territory.owner.label());
            println!("Victory points: {}", territory.victory_points);
        }
        None => println!("No territory chosen ({} candidates)", outcome.candidates),
    }

    Ok(())
}
