//! The assembled analytics bundle handed to presentation.

use serde::Serialize;

use super::breakdown::{
    day_of_week_stats, direction_stats, emotion_stats, hour_of_day_stats, mistake_stats,
    setup_stats, tag_stats, BucketStats, DirectionStats,
};
use super::equity::{compute_drawdown_curve, compute_equity_curve, DrawdownPoint, EquityCurvePoint};
use super::heatmap::{compute_trade_heatmap, TradeHeatmapDay};
use super::histogram::{compute_rr_distribution, RiskRewardBucket};
use super::stats::TradeStats;
use super::summary::PortfolioSummary;
use super::trade::Trade;
use super::weekly::{compute_weekly_pnl, WeeklyPnl};

/// Every aggregate the engine produces, computed in one pass over the
/// same trade list. Purely a convenience bundle for callers that render
/// several views at once; it adds no semantics of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub stats: TradeStats,
    pub summary: PortfolioSummary,
    pub equity_curve: Vec<EquityCurvePoint>,
    pub drawdown_curve: Vec<DrawdownPoint>,
    pub weekly_pnl: Vec<WeeklyPnl>,
    pub day_of_week: Vec<BucketStats>,
    pub hour_of_day: Vec<BucketStats>,
    pub directions: Vec<DirectionStats>,
    pub emotions: Vec<BucketStats>,
    pub setups: Vec<BucketStats>,
    pub mistakes: Vec<BucketStats>,
    pub tags: Vec<BucketStats>,
    pub rr_distribution: Vec<RiskRewardBucket>,
}

impl AnalyticsReport {
    pub fn compute(trades: &[Trade]) -> Self {
        let equity_curve = compute_equity_curve(trades);
        let drawdown_curve = compute_drawdown_curve(&equity_curve);

        AnalyticsReport {
            stats: TradeStats::compute(trades),
            summary: PortfolioSummary::compute(trades),
            equity_curve,
            drawdown_curve,
            weekly_pnl: compute_weekly_pnl(trades),
            day_of_week: day_of_week_stats(trades),
            hour_of_day: hour_of_day_stats(trades),
            directions: direction_stats(trades),
            emotions: emotion_stats(trades),
            setups: setup_stats(trades),
            mistakes: mistake_stats(trades),
            tags: tag_stats(trades),
            rr_distribution: compute_rr_distribution(trades),
        }
    }

    /// One month of heatmap days from the same trade list; kept separate
    /// from [`AnalyticsReport::compute`] because it takes a target month.
    pub fn heatmap(trades: &[Trade], year: i32, month: u32) -> Vec<TradeHeatmapDay> {
        compute_trade_heatmap(trades, year, month)
    }
}
