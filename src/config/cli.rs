use crate::config::{ContactSettings, TomlConfig};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{parse_key_value, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-contact")]
#[command(about = "Portfolio contact form client and content catalog")]
pub struct CliConfig {
    /// Contact endpoint URL (hosted database/webhook)
    #[arg(long, env = "CONTACT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// TOML file with an [endpoint] section
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra request header, repeatable
    #[arg(long = "header", value_name = "KEY=VALUE")]
    pub headers: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check whether the contact endpoint is reachable
    Probe,
    /// Probe the endpoint, then send one contact message
    Send {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Print a section of the built-in portfolio content
    Catalog {
        #[arg(value_enum, default_value_t = CatalogSection::Projects)]
        section: CatalogSection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogSection {
    About,
    Projects,
    Certifications,
    Experience,
    TechStack,
    Links,
    Sections,
}

impl CliConfig {
    /// Merges the config file (if any) with command-line overrides and validates the result.
    pub fn settings(&self) -> Result<ContactSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                ContactSettings::new(
                    file.endpoint.url.unwrap_or_default(),
                    file.endpoint.headers.unwrap_or_default(),
                )
            }
            None => ContactSettings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }

        for raw in &self.headers {
            let (key, value) = parse_key_value("header", raw)?;
            settings.headers.insert(key, value);
        }

        if settings.endpoint.trim().is_empty() {
            return Err(ContactError::MissingConfigError {
                field: "endpoint".to_string(),
            });
        }

        settings.validate()?;
        Ok(settings)
    }
}
