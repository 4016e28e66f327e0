use crate::config::Settings;
use crate::domain::{find_territory, load_roster, Territory, TerritoryError};
use crate::spinner::{SelectionSink, SpinnerPhase, TerritorySpinner};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

/// How often the throbber glyph advances while a spin runs.
const THROBBER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Main,
    Picker,
}

/// The controlled selection the spinner reports into.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    id: String,
}

impl Selection {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl SelectionSink for Selection {
    fn on_select(&mut self, id: &str) {
        id.clone_into(&mut self.id);
    }
}

/// Filter text and highlighted row of the manual pick screen.
#[derive(Debug, Default, Clone)]
pub struct PickerState {
    pub query: String,
    pub index: usize,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub territories: Vec<Territory>,
    pub roster_path: PathBuf,
    pub selection: Selection,
    pub spinner: TerritorySpinner,
    pub locked: bool,
    pub show_help: bool,
    pub status_message: String,
    pub picker: PickerState,
    pub throbber: ThrobberState,
    throbber_elapsed: Duration,
    last_frame: Instant,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let spinner = settings
            .seed
            .map_or_else(TerritorySpinner::new, TerritorySpinner::with_seed);

        Self {
            running: true,
            screen: AppScreen::Main,
            territories: Vec::new(),
            roster_path: settings.territories_path.clone(),
            selection: Selection::default(),
            spinner,
            locked: settings.locked,
            show_help: false,
            status_message: String::new(),
            picker: PickerState::default(),
            throbber: ThrobberState::default(),
            throbber_elapsed: Duration::ZERO,
            last_frame: Instant::now(),
        }
    }

    /// Replaces the roster from disk. A selection that no longer resolves
    /// simply renders as "none chosen".
    pub fn load_roster(&mut self) -> Result<usize, TerritoryError> {
        self.territories = load_roster(&self.roster_path)?;
        tracing::info!(
            count = self.territories.len(),
            path = %self.roster_path.display(),
            "loaded territories"
        );
        Ok(self.territories.len())
    }

    pub fn selected_territory(&self) -> Option<&Territory> {
        find_territory(&self.territories, self.selection.id())
    }

    pub fn phase(&self) -> SpinnerPhase {
        self.spinner.phase(&self.territories, self.selection.id())
    }

    /// Per-frame housekeeping: advances the throbber and applies due spin ticks.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.spinner.is_spinning() {
            self.throbber_elapsed += delta;
            if self.throbber_elapsed >= THROBBER_STEP {
                self.throbber.calc_next();
                self.throbber_elapsed = Duration::ZERO;
            }
        }

        if self.spinner.poll(&mut self.selection).is_some() {
            self.announce_selection();
        }
    }

    pub(crate) fn announce_selection(&mut self) {
        self.status_message = self.selected_territory().map_or_else(String::new, |territory| {
            format!(
                "Next campaign: {} ({}, {} VP)",
                territory.name,
                territory.owner.label(),
                territory.victory_points
            )
        });
    }

    /// Roster indices matching the picker query, best match first.
    pub fn picker_matches(&self) -> Vec<usize> {
        let query = self.picker.query.trim();
        if query.is_empty() {
            return (0..self.territories.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .territories
            .iter()
            .enumerate()
            .filter_map(|(index, territory)| {
                matcher
                    .fuzzy_match(&territory.name, query)
                    .map(|score| (score, index))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, index)| index).collect()
    }

    pub fn reset_picker(&mut self) {
        self.picker = PickerState::default();
    }
}

#[cfg(test)]
pub(crate) fn app_with(roster: &[(&str, &str)]) -> App {
    let settings = Settings::from_lookup(|key| (key == "SPINNER_SEED").then(|| "1".to_string()));
    let mut app = App::new(&settings);
    app.territories = roster
        .iter()
        .map(|(id, name)| crate::domain::territory(id, name))
        .collect();
    app
}
