pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};
pub use crate::config::SessionFile;

pub use crate::core::aggregate::{best_solve, times_excluding_dnf, worst_solve};
pub use crate::core::datetime::{format_date_time, ChronoLocaleFormat};
pub use crate::core::duration::{format_duration, format_duration_string, parse_duration};
pub use crate::core::summary::{DisplayOptions, SessionSummary};
pub use crate::domain::model::{DurationParts, Penalty, Session, Solve, PLUS_TWO_PENALTY_NS};
pub use crate::domain::ports::LocaleFormatter;
pub use crate::utils::error::{Result, StatsError};
