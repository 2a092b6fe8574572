pub mod badge;
pub mod cache;
pub mod cancellation;
pub mod catalog;
pub mod client;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod filters;
pub mod fixtures;
pub mod formatting;
pub mod selection;
pub mod stats;
pub mod tui;
pub mod types;

#[cfg(feature = "development")]
pub mod dev;

#[cfg(test)]
mod testing;
