pub mod aggregate;
pub mod datetime;
pub mod duration;
pub mod summary;

pub use crate::domain::model::{DurationParts, Penalty, Session, Solve};
pub use crate::domain::ports::LocaleFormatter;
pub use crate::utils::error::Result;
