//! Terminal app that picks the next campaign territory.
//!
//! A [`spinner::TerritorySpinner`] cycles through the roster on a slowing
//! timer and settles on one territory. The app owns the selection; the
//! spinner only reports into it.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod logging;
pub mod spinner;
pub mod terminal;
pub mod ui;
