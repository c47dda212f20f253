//! Configuration management for ytscribe.

mod settings;

pub use settings::{ExtractionSettings, GeneralSettings, ResponseSettings, Settings};
