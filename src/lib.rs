// src/lib.rs
pub mod config;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod ui;
pub mod utils;

pub use error::{ExplorerError, Result};
