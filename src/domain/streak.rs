//! Consecutive-win streak detection.

use super::trade::Trade;

/// Longest run of consecutive winning trades in chronological order
/// (close timestamp, falling back to trade date). The sort is stable:
/// trades sharing a timestamp keep their input order, so the caller's
/// list order is the tiebreak.
pub fn longest_win_streak(trades: &[Trade]) -> usize {
    let mut ordered: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.qualifying_pnl().is_some())
        .collect();
    ordered.sort_by_key(|t| t.sort_key());

    let mut longest = 0usize;
    let mut current = 0usize;

    for trade in ordered {
        if trade.outcome().is_some_and(|o| o.is_win()) {
            current += 1;
            if current > longest {
                longest = current;
            }
        } else {
            current = 0;
        }
    }
    longest
}
