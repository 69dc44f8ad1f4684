#![warn(clippy::pedantic)]

pub mod config;
pub mod date;
pub mod dom;
pub mod error;
pub mod filter;
pub mod forms;
pub mod nav;
pub mod schedule;
pub mod snapshot;

pub use config::{Config, Messages};
pub use error::Error;
pub use filter::FilterController;

/// Option value meaning "no filtering on this column".
pub const ALL: &str = "all";
