use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{validate_index, validate_non_negative_nanos};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset added to the raw time of a `+2` solve.
pub const PLUS_TWO_PENALTY_NS: i64 = 2_000_000_000;

/// Largest raw time whose `+2` adjustment still fits in an `i64`.
pub const MAX_RAW_TIME_NS: i64 = i64::MAX - PLUS_TWO_PENALTY_NS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Penalty {
    #[default]
    None,
    PlusTwo,
    Dnf,
}

impl fmt::Display for Penalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Penalty::None => "none",
            Penalty::PlusTwo => "+2",
            Penalty::Dnf => "DNF",
        };
        f.write_str(label)
    }
}

/// One timed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solve {
    raw_time: i64,
    penalty: Penalty,
    timestamp: DateTime<Utc>,
}

impl Solve {
    pub fn new(raw_time: i64, penalty: Penalty, timestamp: DateTime<Utc>) -> Result<Self> {
        validate_non_negative_nanos("raw_time", raw_time)?;
        if raw_time > MAX_RAW_TIME_NS {
            return Err(StatsError::invalid_argument(format!(
                "raw_time {} ns exceeds the maximum of {} ns",
                raw_time, MAX_RAW_TIME_NS
            )));
        }

        Ok(Self {
            raw_time,
            penalty,
            timestamp,
        })
    }

    pub fn raw_time(&self) -> i64 {
        self.raw_time
    }

    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    pub fn set_penalty(&mut self, penalty: Penalty) {
        self.penalty = penalty;
    }

    pub fn is_dnf(&self) -> bool {
        self.penalty == Penalty::Dnf
    }

    /// Time used for comparisons. `None` for a DNF, which has no ordinal time.
    pub fn adjusted_time(&self) -> Option<i64> {
        match self.penalty {
            Penalty::None => Some(self.raw_time),
            Penalty::PlusTwo => Some(self.raw_time + PLUS_TWO_PENALTY_NS),
            Penalty::Dnf => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Wall-clock time of the solve in the host's local zone.
    pub fn local_timestamp(&self) -> NaiveDateTime {
        self.timestamp.with_timezone(&Local).naive_local()
    }

    /// Text shown in solve lists: `DNF`, `12.34+` for a `+2`, otherwise `12.34`.
    pub fn display_time(&self, include_millis: bool) -> Result<String> {
        match self.adjusted_time() {
            None => Ok("DNF".to_string()),
            Some(adjusted) => {
                let time = crate::core::duration::format_duration(adjusted, include_millis)?;
                if self.penalty == Penalty::PlusTwo {
                    Ok(format!("{}+", time))
                } else {
                    Ok(time.to_string())
                }
            }
        }
    }
}

/// Whole-second part and subsecond digits of a formatted duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationParts {
    pub main: String,
    pub fractional: String,
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.main, self.fractional)
    }
}

/// Ordered solves for one puzzle type, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub puzzle_type: String,
    solves: Vec<Solve>,
}

impl Session {
    pub fn new(puzzle_type: impl Into<String>) -> Self {
        Self {
            puzzle_type: puzzle_type.into(),
            solves: Vec::new(),
        }
    }

    pub fn with_solves(puzzle_type: impl Into<String>, solves: Vec<Solve>) -> Self {
        Self {
            puzzle_type: puzzle_type.into(),
            solves,
        }
    }

    pub fn solves(&self) -> &[Solve] {
        &self.solves
    }

    pub fn len(&self) -> usize {
        self.solves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solves.is_empty()
    }

    pub fn add_solve(&mut self, solve: Solve) {
        self.solves.push(solve);
    }

    pub fn delete_solve(&mut self, index: usize) -> Result<Solve> {
        validate_index("solve index", index, self.solves.len())?;
        Ok(self.solves.remove(index))
    }

    pub fn solve_mut(&mut self, index: usize) -> Result<&mut Solve> {
        validate_index("solve index", index, self.solves.len())?;
        Ok(&mut self.solves[index])
    }

    pub fn last_solve(&self) -> Option<&Solve> {
        self.solves.last()
    }

    pub fn best_solve(&self) -> Option<&Solve> {
        crate::core::aggregate::best_solve(&self.solves)
    }

    pub fn worst_solve(&self) -> Option<&Solve> {
        crate::core::aggregate::worst_solve(&self.solves)
    }

    pub fn dnf_count(&self) -> usize {
        self.solves.iter().filter(|s| s.is_dnf()).count()
    }

    /// Session title: the recorded-at string of the most recent solve.
    pub fn timestamp_string<F: crate::domain::ports::LocaleFormatter>(
        &self,
        formatter: &F,
    ) -> Result<Option<String>> {
        self.last_solve()
            .map(|solve| crate::core::datetime::format_date_time(solve.local_timestamp(), formatter))
            .transpose()
    }
}
