pub mod popup;
pub mod spinner;
pub mod tables;
