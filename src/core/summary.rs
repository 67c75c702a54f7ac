use crate::core::aggregate::{best_solve, times_excluding_dnf, worst_solve};
use crate::core::datetime::format_date_time;
use crate::core::duration::format_duration_string;
use crate::domain::model::{Penalty, Session, Solve};
use crate::domain::ports::LocaleFormatter;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub include_millis: bool,
}

/// A highlighted solve, with its 1-based position in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveHighlight {
    pub number: usize,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveRow {
    pub number: usize,
    pub time: String,
    pub penalty: Penalty,
    pub recorded_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub puzzle_type: String,
    pub title: Option<String>,
    pub solve_count: usize,
    pub dnf_count: usize,
    pub best: Option<SolveHighlight>,
    pub worst: Option<SolveHighlight>,
    /// Sum of non-DNF adjusted times.
    pub total_time: String,
    pub solves: Vec<SolveRow>,
}

impl SessionSummary {
    pub fn from_session<F: LocaleFormatter>(
        session: &Session,
        options: &DisplayOptions,
        formatter: &F,
    ) -> Result<Self> {
        let solves = session.solves();

        let rows = solves
            .iter()
            .enumerate()
            .map(|(i, solve)| {
                Ok(SolveRow {
                    number: i + 1,
                    time: solve.display_time(options.include_millis)?,
                    penalty: solve.penalty(),
                    recorded_at: format_date_time(solve.local_timestamp(), formatter)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total: i64 = times_excluding_dnf(solves)
            .into_iter()
            .fold(0i64, |acc, t| acc.saturating_add(t));

        Ok(Self {
            puzzle_type: session.puzzle_type.clone(),
            title: session.timestamp_string(formatter)?,
            solve_count: solves.len(),
            dnf_count: session.dnf_count(),
            best: highlight(solves, best_solve(solves), options)?,
            worst: highlight(solves, worst_solve(solves), options)?,
            total_time: format_duration_string(total, options.include_millis)?,
            solves: rows,
        })
    }
}

fn highlight(
    solves: &[Solve],
    selected: Option<&Solve>,
    options: &DisplayOptions,
) -> Result<Option<SolveHighlight>> {
    let Some(selected) = selected else {
        return Ok(None);
    };
    let number = solves
        .iter()
        .position(|s| std::ptr::eq(s, selected))
        .map(|i| i + 1)
        .unwrap_or_default();

    Ok(Some(SolveHighlight {
        number,
        time: selected.display_time(options.include_millis)?,
    }))
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => writeln!(f, "{} session ({})", self.puzzle_type, title)?,
            None => writeln!(f, "{} session", self.puzzle_type)?,
        }
        writeln!(f, "Solves: {} ({} DNF)", self.solve_count, self.dnf_count)?;

        if let Some(best) = &self.best {
            writeln!(f, "Best:   {} (#{})", best.time, best.number)?;
        }
        if let Some(worst) = &self.worst {
            writeln!(f, "Worst:  {} (#{})", worst.time, worst.number)?;
        }
        writeln!(f, "Total:  {}", self.total_time)?;

        for row in &self.solves {
            writeln!(f, "{:>4}. {:>12}  {}", row.number, row.time, row.recorded_at)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datetime::ChronoLocaleFormat;
    use chrono::{TimeZone, Utc};

    fn session() -> Session {
        let at = |secs: i64| Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
        Session::with_solves(
            "3x3",
            vec![
                Solve::new(10_000_000_000, Penalty::None, at(0)).unwrap(),
                Solve::new(0, Penalty::Dnf, at(60)).unwrap(),
                Solve::new(8_000_000_000, Penalty::PlusTwo, at(120)).unwrap(),
                Solve::new(7_500_000_000, Penalty::None, at(180)).unwrap(),
            ],
        )
    }

    #[test]
    fn test_summary_highlights() {
        let summary = SessionSummary::from_session(
            &session(),
            &DisplayOptions::default(),
            &ChronoLocaleFormat::default(),
        )
        .unwrap();

        assert_eq!(summary.solve_count, 4);
        assert_eq!(summary.dnf_count, 1);
        assert_eq!(
            summary.best,
            Some(SolveHighlight {
                number: 4,
                time: "7.50".to_string()
            })
        );
        assert_eq!(
            summary.worst,
            Some(SolveHighlight {
                number: 2,
                time: "DNF".to_string()
            })
        );
        assert_eq!(summary.total_time, "27.50");
        assert_eq!(summary.solves[2].time, "10.00+");
        assert!(summary.title.is_some());
    }

    #[test]
    fn test_empty_session_summary() {
        let summary = SessionSummary::from_session(
            &Session::new("4x4"),
            &DisplayOptions {
                include_millis: true,
            },
            &ChronoLocaleFormat::default(),
        )
        .unwrap();

        assert_eq!(summary.title, None);
        assert_eq!(summary.best, None);
        assert_eq!(summary.worst, None);
        assert_eq!(summary.total_time, "0.000");
        assert!(summary.to_string().starts_with("4x4 session\n"));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = SessionSummary::from_session(
            &session(),
            &DisplayOptions::default(),
            &ChronoLocaleFormat::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["puzzle_type"], "3x3");
        assert_eq!(json["solves"][1]["penalty"], "dnf");
    }
}
