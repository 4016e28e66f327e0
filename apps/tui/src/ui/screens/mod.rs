pub mod main;
pub mod picker;
