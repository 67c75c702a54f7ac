use anyhow::Result;
use solve_stats::utils::export::export_session_csv;
use solve_stats::{ChronoLocaleFormat, DisplayOptions, SessionFile, SessionSummary};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SESSION: &str = r#"
puzzle_type = "3x3"

[[solves]]
time = "14.21"
timestamp = "2023-11-14T22:13:20Z"

[[solves]]
time = "12.05"
penalty = "plus_two"
timestamp = "2023-11-14T22:14:00Z"

[[solves]]
raw_ns = 13000000000
penalty = "dnf"
timestamp = "2023-11-14T22:15:00Z"

[[solves]]
time = "11.50"
timestamp = "2023-11-14T22:16:00Z"
"#;

fn write_session() -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(SESSION.as_bytes())?;
    Ok(file)
}

#[test]
fn test_summary_from_session_file() -> Result<()> {
    let file = write_session()?;
    let session = SessionFile::from_file(file.path())?.into_session()?;

    let summary = SessionSummary::from_session(
        &session,
        &DisplayOptions {
            include_millis: false,
        },
        &ChronoLocaleFormat::default(),
    )?;

    assert_eq!(summary.puzzle_type, "3x3");
    assert_eq!(summary.solve_count, 4);
    assert_eq!(summary.dnf_count, 1);

    let best = summary.best.as_ref().unwrap();
    assert_eq!((best.number, best.time.as_str()), (4, "11.50"));
    let worst = summary.worst.as_ref().unwrap();
    assert_eq!((worst.number, worst.time.as_str()), (3, "DNF"));

    assert_eq!(summary.solves[1].time, "14.05+");
    assert_eq!(summary.total_time, "39.76");

    let text = summary.to_string();
    assert!(text.contains("Best:   11.50 (#4)"));
    assert!(text.contains("Worst:  DNF (#3)"));
    Ok(())
}

#[test]
fn test_missing_session_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = SessionFile::from_file(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(solve_stats::StatsError::IoError(_))));
}

#[test]
fn test_export_session_csv() -> Result<()> {
    let file = write_session()?;
    let session = SessionFile::from_file(file.path())?.into_session()?;

    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("solves.csv");
    export_session_csv(&session, &path, true)?;

    let content = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "index,time,penalty,adjusted_ns,timestamp");
    assert!(lines[2].starts_with("2,14.050+,+2,14050000000,"));
    assert!(lines[3].starts_with("3,DNF,DNF,,"));
    Ok(())
}
