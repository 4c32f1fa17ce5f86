pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleNotifier, HttpContactEndpoint, RecordingNotifier};
pub use catalog::Portfolio;
pub use config::{ContactSettings, TomlConfig};
pub use crate::core::controller::ContactForm;
pub use domain::model::{
    ConnectionStatus, ContactMessage, Field, SubmitFailure, SubmitOutcome, ValidationFailure,
};
pub use utils::error::{ContactError, Result};
