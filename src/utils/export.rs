use crate::domain::model::Session;
use crate::utils::error::Result;
use std::io::Write;

/// Writes one CSV row per solve, oldest first.
pub fn write_session_csv<W: Write>(session: &Session, writer: W, include_millis: bool) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["index", "time", "penalty", "adjusted_ns", "timestamp"])?;

    for (i, solve) in session.solves().iter().enumerate() {
        let adjusted = solve
            .adjusted_time()
            .map(|ns| ns.to_string())
            .unwrap_or_default();
        csv_writer.write_record([
            (i + 1).to_string(),
            solve.display_time(include_millis)?,
            solve.penalty().to_string(),
            adjusted,
            solve.timestamp().to_rfc3339(),
        ])?;
    }

    csv_writer.flush()?;
    tracing::debug!(rows = session.len(), "exported session to CSV");
    Ok(())
}

pub fn export_session_csv<P: AsRef<std::path::Path>>(
    session: &Session,
    path: P,
    include_millis: bool,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_session_csv(session, file, include_millis)
}
