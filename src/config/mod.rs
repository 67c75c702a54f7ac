#[cfg(feature = "cli")]
pub mod cli;
pub mod session_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use session_file::SessionFile;
