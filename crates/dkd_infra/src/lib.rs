#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod report;

pub use config::{CalculatorConfig, ConfigError, OutputFormat};
pub use input::{InputError, MeasurementForm, parse_age_flag, parse_measurement};
