pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod locator;
pub mod logging;
pub mod outputs;
pub mod ui;
pub mod writer;

pub use error::{BumpError, Result};
