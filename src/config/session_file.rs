use crate::core::duration::parse_duration;
use crate::domain::model::{Penalty, Session, Solve};
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of a session.
///
/// Each solve gives its time either as `raw_ns` or as a human string in
/// `time` (e.g. `"1:02.34"`), never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub puzzle_type: String,
    #[serde(default)]
    pub solves: Vec<SolveEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveEntry {
    pub raw_ns: Option<i64>,
    pub time: Option<String>,
    #[serde(default)]
    pub penalty: Penalty,
    pub timestamp: DateTime<Utc>,
}

impl SolveEntry {
    fn raw_time(&self, position: usize) -> Result<i64> {
        match (self.raw_ns, self.time.as_deref()) {
            (Some(ns), None) => Ok(ns),
            (None, Some(text)) => parse_duration(text),
            _ => Err(StatsError::InvalidConfigValueError {
                field: format!("solves[{}]", position),
                value: format!("raw_ns={:?}, time={:?}", self.raw_ns, self.time),
                reason: "Exactly one of raw_ns or time must be set".to_string(),
            }),
        }
    }
}

impl SessionFile {
    /// 從 TOML 檔案載入 session
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("📁 Loading session file: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析 session
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SessionFile = toml::from_str(content)?;
        tracing::debug!(
            puzzle_type = %file.puzzle_type,
            solves = file.solves.len(),
            "parsed session file"
        );
        Ok(file)
    }

    /// 轉換為已驗證的 Session
    pub fn into_session(self) -> Result<Session> {
        self.validate()?;

        let solves = self
            .solves
            .iter()
            .enumerate()
            .map(|(i, entry)| Solve::new(entry.raw_time(i)?, entry.penalty, entry.timestamp))
            .collect::<Result<Vec<_>>>()?;

        Ok(Session::with_solves(self.puzzle_type, solves))
    }
}

impl Validate for SessionFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("puzzle_type", &self.puzzle_type)?;
        for (i, entry) in self.solves.iter().enumerate() {
            entry.raw_time(i)?;
        }
        Ok(())
    }
}
