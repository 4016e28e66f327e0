use crate::app::state::{App, AppScreen};
use crate::spinner::SpinnerPhase;

impl App {
    /// Starts a spin from the idle state. Guarded actions are silent.
    pub fn spin(&mut self) {
        if self.phase() != SpinnerPhase::Idle {
            return;
        }

        if self.spinner.spin(&self.territories, self.locked) {
            self.status_message = "Spinning...".to_string();
        }
    }

    /// Commits the highlighted picker row without animating.
    pub fn pick_highlighted(&mut self) {
        let matches = self.picker_matches();
        let Some(id) = matches
            .get(self.picker.index)
            .map(|&index| self.territories[index].id.clone())
        else {
            return;
        };

        if self
            .spinner
            .pick(&self.territories, &id, self.locked, &mut self.selection)
        {
            self.screen = AppScreen::Main;
            self.reset_picker();
            self.announce_selection();
        }
    }

    /// The "Change" action: hands the selection back so the next spin can run.
    pub fn change_selection(&mut self) {
        if self.phase() != SpinnerPhase::Settled {
            return;
        }

        if self.spinner.change(&mut self.selection) {
            self.status_message.clear();
        }
    }

    pub fn open_picker(&mut self) {
        if self.phase() != SpinnerPhase::Idle || self.locked || self.territories.is_empty() {
            return;
        }

        self.reset_picker();
        self.screen = AppScreen::Picker;
    }

    pub fn close_picker(&mut self) {
        self.reset_picker();
        self.screen = AppScreen::Main;
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
        self.status_message = if self.locked {
            "Spinner locked".to_string()
        } else {
            "Spinner unlocked".to_string()
        };
    }

    pub fn quit(&mut self) {
        self.spinner.cancel();
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::{app_with, AppScreen};
    use crate::spinner::{SelectionSink, SpinnerPhase};
    use std::time::Duration;

    const ROSTER: &[(&str, &str)] = &[
        ("richmond", "Richmond"),
        ("vicksburg", "Vicksburg"),
        ("atlanta", "Atlanta"),
    ];

    #[tokio::test(start_paused = true)]
    async fn spin_settles_into_the_host_selection() {
        let mut app = app_with(ROSTER);

        app.spin();
        assert_eq!(app.phase(), SpinnerPhase::Spinning);

        tokio::time::sleep(Duration::from_secs(4)).await;
        app.update();

        assert_eq!(app.phase(), SpinnerPhase::Settled);
        let chosen = app.selected_territory().map(|t| t.id.clone());
        assert!(chosen.is_some_and(|id| ROSTER.iter().any(|(roster_id, _)| *roster_id == id)));
        assert!(app.status_message.starts_with("Next campaign:"));
    }

    #[tokio::test]
    async fn locked_or_empty_spinner_stays_idle_and_quiet() {
        let mut app = app_with(ROSTER);
        app.locked = true;
        app.status_message.clear();
        app.spin();
        assert_eq!(app.phase(), SpinnerPhase::Idle);
        assert!(app.status_message.is_empty());

        let mut empty = app_with(&[]);
        empty.spin();
        assert_eq!(empty.phase(), SpinnerPhase::Idle);
        assert!(empty.status_message.is_empty());
    }

    #[tokio::test]
    async fn settled_selection_blocks_spin_until_changed() {
        let mut app = app_with(ROSTER);
        app.selection.on_select("atlanta");

        app.spin();
        assert_eq!(app.phase(), SpinnerPhase::Settled);

        app.change_selection();
        assert_eq!(app.phase(), SpinnerPhase::Idle);
        assert_eq!(app.selection.id(), "");

        app.spin();
        assert_eq!(app.phase(), SpinnerPhase::Spinning);
    }

    #[tokio::test]
    async fn picker_commits_the_highlighted_match() {
        let mut app = app_with(ROSTER);

        app.open_picker();
        assert_eq!(app.screen, AppScreen::Picker);

        app.picker.query = "vicks".to_string();
        app.pick_highlighted();

        assert_eq!(app.screen, AppScreen::Main);
        assert_eq!(app.selection.id(), "vicksburg");
        assert_eq!(app.phase(), SpinnerPhase::Settled);
    }

    #[tokio::test]
    async fn picker_stays_closed_while_locked() {
        let mut app = app_with(ROSTER);
        app.toggle_lock();
        app.open_picker();
        assert_eq!(app.screen, AppScreen::Main);
        assert_eq!(app.status_message, "Spinner locked");
    }
}
