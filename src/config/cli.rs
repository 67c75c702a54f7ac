use crate::core::datetime::ChronoLocaleFormat;
use crate::core::summary::DisplayOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "solve-stats")]
#[command(about = "Best/worst and formatted times for a puzzle solving session")]
pub struct CliConfig {
    /// Path to the session TOML file
    #[arg(short, long)]
    pub session: String,

    #[arg(long, help = "Show milliseconds instead of centiseconds")]
    pub millis: bool,

    #[arg(long, help = "Use a 12-hour clock with AM/PM")]
    pub hour12: bool,

    #[arg(long, default_value = "%Y-%m-%d")]
    pub date_pattern: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write every solve to this CSV file
    #[arg(long)]
    pub export_csv: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            include_millis: self.millis,
        }
    }

    pub fn locale_format(&self) -> ChronoLocaleFormat {
        ChronoLocaleFormat::new(self.date_pattern.clone(), self.hour12)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("session", &self.session)?;
        validate_non_empty_string("date_pattern", &self.date_pattern)?;
        if let Some(path) = &self.export_csv {
            validate_path("export_csv", path)?;
        }
        Ok(())
    }
}
