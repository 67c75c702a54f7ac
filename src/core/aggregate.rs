use crate::domain::model::Solve;

/// Adjusted times of all non-DNF solves, in input order.
pub fn times_excluding_dnf(solves: &[Solve]) -> Vec<i64> {
    solves.iter().filter_map(Solve::adjusted_time).collect()
}

/// Fastest solve. Ties go to the most recent one.
///
/// An all-DNF sequence yields its last solve; an empty one yields `None`.
pub fn best_solve(solves: &[Solve]) -> Option<&Solve> {
    let mut best: Option<(&Solve, i64)> = None;

    for solve in solves.iter().rev() {
        if let Some(time) = solve.adjusted_time() {
            if best.map_or(true, |(_, best_time)| time < best_time) {
                best = Some((solve, time));
            }
        }
    }

    let selected = best.map(|(solve, _)| solve).or_else(|| solves.last());
    tracing::debug!(
        solves = solves.len(),
        best = ?selected.and_then(Solve::adjusted_time),
        "selected best solve"
    );
    selected
}

/// Slowest solve. Any DNF is worse than every timed solve, so the most
/// recent DNF wins outright; otherwise ties go to the most recent solve.
pub fn worst_solve(solves: &[Solve]) -> Option<&Solve> {
    let mut worst: Option<(&Solve, i64)> = None;

    for solve in solves.iter().rev() {
        match solve.adjusted_time() {
            None => {
                tracing::debug!(solves = solves.len(), "worst solve is a DNF");
                return Some(solve);
            }
            Some(time) => {
                if worst.map_or(true, |(_, worst_time)| time > worst_time) {
                    worst = Some((solve, time));
                }
            }
        }
    }

    let selected = worst.map(|(solve, _)| solve);
    tracing::debug!(
        solves = solves.len(),
        worst = ?selected.and_then(Solve::adjusted_time),
        "selected worst solve"
    );
    selected
}
