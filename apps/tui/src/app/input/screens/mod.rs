use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod help;
mod main;
mod picker;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Main => main::handle_main_input(app, key),
        AppScreen::Picker => picker::handle_picker_input(app, key),
    }
}
