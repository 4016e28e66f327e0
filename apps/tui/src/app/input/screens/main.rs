use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('s' | ' ') => app.spin(),
        KeyCode::Char('p') | KeyCode::Enter => app.open_picker(),
        KeyCode::Char('c') => app.change_selection(),
        KeyCode::Char('l') => app.toggle_lock(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
