mod config;

pub use config::{Config, Settings};
