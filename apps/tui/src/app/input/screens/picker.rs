use crate::app::input::helpers::{cycle_highlight, Step};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_picker_input(app: &mut App, key: KeyCode) {
    let total_rows = app.picker_matches().len();

    match key {
        KeyCode::Esc => app.close_picker(),
        KeyCode::Enter => app.pick_highlighted(),
        KeyCode::Up => {
            app.picker.index = cycle_highlight(app.picker.index, total_rows, Step::Back);
        }
        KeyCode::Down => {
            app.picker.index = cycle_highlight(app.picker.index, total_rows, Step::Forward);
        }
        KeyCode::Home => {
            app.picker.index = 0;
        }
        KeyCode::End => {
            app.picker.index = total_rows.saturating_sub(1);
        }
        KeyCode::Backspace => {
            app.picker.query.pop();
            app.picker.index = 0;
        }
        KeyCode::Char(ch) => {
            app.picker.query.push(ch);
            app.picker.index = 0;
        }
        _ => {}
    }
}
