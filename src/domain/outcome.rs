//! Scalar metric primitives shared by every calculator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Breakeven,
}

impl Outcome {
    pub fn classify(pnl: f64) -> Outcome {
        if pnl > 0.0 {
            Outcome::Win
        } else if pnl < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Breakeven
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }
}

/// Division with the zero-denominator policy used across the engine:
/// positive numerator over zero yields the infinity sentinel (profit
/// factor with no losing trades), anything else over zero yields 0.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        if numerator > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    } else {
        numerator / denominator
    }
}

/// Win rate as a percentage in `[0, 100]`; 0 when there are no decided
/// (win or loss) trades. Breakevens count toward neither side.
pub fn win_rate(wins: usize, losses: usize) -> f64 {
    let decided = wins + losses;
    if decided == 0 {
        return 0.0;
    }
    100.0 * wins as f64 / decided as f64
}
