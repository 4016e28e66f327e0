// UI module for campaign-tui
// Immediate-mode rendering of the spinner host screens

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Main => screens::main::render_main(app, f),
        AppScreen::Picker => screens::picker::render_picker(app, f),
    }
}
