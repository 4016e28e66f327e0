// Host application for the territory spinner
// Owns the roster, the controlled selection and the screens around the spinner

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, PickerState, Selection};
