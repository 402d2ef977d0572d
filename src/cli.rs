//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvJournalAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::domain::error::TradelensError;
use crate::domain::heatmap::compute_trade_heatmap;
use crate::domain::report::AnalyticsReport;
use crate::domain::stats::TradeStats;
use crate::domain::summary::PortfolioSummary;
use crate::domain::trade::{Trade, TradeFilter, TradeStatus};
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::trade_port::TradePort;

#[derive(Parser, Debug)]
#[command(name = "tradelens", about = "Trading journal analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the full analytics report and write it as JSON
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Print summary statistics for a journal file
    Stats {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Print the per-day P&L heatmap for one month
    Heatmap {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
    /// Show the journal's date range, trade count, and pairs
    Info {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Validate a configuration file and its journal input
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report {
            config,
            input,
            output,
            from,
            to,
        } => run_report(
            &config,
            input.as_ref(),
            output.as_ref(),
            from.as_deref(),
            to.as_deref(),
        ),
        Command::Stats { input, from, to } => run_stats(&input, from.as_deref(), to.as_deref()),
        Command::Heatmap { input, year, month } => run_heatmap(&input, year, month),
        Command::Info { input } => run_info(&input),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TradelensError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Build the trade filter from the optional `[filter]` config section.
pub fn build_trade_filter(adapter: &dyn ConfigPort) -> Result<TradeFilter, TradelensError> {
    let parse_date = |key: &str| -> Result<Option<NaiveDate>, TradelensError> {
        adapter
            .get_string("filter", key)
            .map(|s| {
                NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                    TradelensError::ConfigInvalid {
                        section: "filter".into(),
                        key: key.into(),
                        reason: "invalid date format (expected YYYY-MM-DD)".into(),
                    }
                })
            })
            .transpose()
    };

    let status = adapter
        .get_string("filter", "status")
        .map(|s| {
            TradeStatus::parse(&s).ok_or_else(|| TradelensError::ConfigInvalid {
                section: "filter".into(),
                key: "status".into(),
                reason: format!("unknown status '{s}'"),
            })
        })
        .transpose()?;

    Ok(TradeFilter {
        start_date: parse_date("start_date")?,
        end_date: parse_date("end_date")?,
        status,
        pair: adapter.get_string("filter", "pair"),
    })
}

fn parse_date_flag(value: &str, flag: &str) -> Result<NaiveDate, ExitCode> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        eprintln!("error: invalid --{flag} date (expected YYYY-MM-DD)");
        ExitCode::from(2)
    })
}

fn resolve_input(
    input_override: Option<&PathBuf>,
    adapter: &dyn ConfigPort,
) -> Result<PathBuf, ExitCode> {
    if let Some(path) = input_override {
        return Ok(path.clone());
    }
    match adapter.get_string("journal", "input") {
        Some(path) => Ok(PathBuf::from(path)),
        None => {
            let err = TradelensError::ConfigMissing {
                section: "journal".into(),
                key: "input".into(),
            };
            eprintln!("error: {err}");
            Err(ExitCode::from(&err))
        }
    }
}

fn fetch_trades(input: &PathBuf, filter: &TradeFilter) -> Result<Vec<Trade>, ExitCode> {
    let adapter = CsvJournalAdapter::new(input.clone());
    adapter.fetch_trades(filter).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn format_profit_factor(pf: f64) -> String {
    if pf.is_infinite() {
        "inf".to_string()
    } else {
        format!("{pf:.2}")
    }
}

fn print_summary(stats: &TradeStats, summary: &PortfolioSummary) {
    eprintln!("\n=== Journal Summary ===");
    eprintln!("Total Trades:     {}", stats.total_trades);
    eprintln!(
        "Wins / Losses:    {} / {} ({} breakeven)",
        stats.win_count, stats.loss_count, stats.breakeven_count
    );
    eprintln!("Win Rate:         {:.1}%", stats.win_rate);
    eprintln!("Total P&L:        {:+.2}", stats.total_pnl);
    eprintln!("Avg P&L:          {:+.2}", stats.avg_pnl);
    eprintln!(
        "Avg Win / Loss:   {:.2} / {:.2}",
        stats.avg_win, stats.avg_loss
    );
    eprintln!(
        "Profit Factor:    {}",
        format_profit_factor(stats.profit_factor)
    );
    eprintln!("Avg R:R:          {:.2}", stats.avg_rr);
    eprintln!(
        "Best / Worst:     {:+.2} / {:+.2}",
        stats.best_trade, stats.worst_trade
    );
    eprintln!("Max Drawdown:     {:.2}", summary.max_drawdown);
    eprintln!("Longest Streak:   {} wins", summary.longest_win_streak);
    eprintln!("Active Days:      {}", summary.active_days);
}

fn run_report(
    config_path: &PathBuf,
    input_override: Option<&PathBuf>,
    output_override: Option<&PathBuf>,
    from: Option<&str>,
    to: Option<&str>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let mut filter = match build_trade_filter(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 2: Apply CLI overrides
    if let Some(from) = from {
        filter.start_date = match parse_date_flag(from, "from") {
            Ok(d) => Some(d),
            Err(code) => return code,
        };
    }
    if let Some(to) = to {
        filter.end_date = match parse_date_flag(to, "to") {
            Ok(d) => Some(d),
            Err(code) => return code,
        };
    }

    let input = match resolve_input(input_override, &adapter) {
        Ok(p) => p,
        Err(code) => return code,
    };

    // Stage 3: Fetch trades
    eprintln!("Loading journal from {}", input.display());
    let trades = match fetch_trades(&input, &filter) {
        Ok(t) => t,
        Err(code) => return code,
    };
    eprintln!("  {} trades loaded", trades.len());

    // Stage 4: Compute analytics
    let report = AnalyticsReport::compute(&trades);
    print_summary(&report.stats, &report.summary);

    // Stage 5: Write report
    let output = output_override
        .cloned()
        .or_else(|| adapter.get_string("report", "output").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("report.json"));

    match JsonReportAdapter.write(&report, &output.display().to_string()) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_stats(input: &PathBuf, from: Option<&str>, to: Option<&str>) -> ExitCode {
    let mut filter = TradeFilter::default();
    if let Some(from) = from {
        filter.start_date = match parse_date_flag(from, "from") {
            Ok(d) => Some(d),
            Err(code) => return code,
        };
    }
    if let Some(to) = to {
        filter.end_date = match parse_date_flag(to, "to") {
            Ok(d) => Some(d),
            Err(code) => return code,
        };
    }

    let trades = match fetch_trades(input, &filter) {
        Ok(t) => t,
        Err(code) => return code,
    };

    let stats = TradeStats::compute(&trades);
    let summary = PortfolioSummary::compute(&trades);
    print_summary(&stats, &summary);
    ExitCode::SUCCESS
}

fn run_heatmap(input: &PathBuf, year: i32, month: u32) -> ExitCode {
    if !(1..=12).contains(&month) {
        eprintln!("error: --month must be between 1 and 12");
        return ExitCode::from(2);
    }

    let trades = match fetch_trades(input, &TradeFilter::default()) {
        Ok(t) => t,
        Err(code) => return code,
    };

    let days = compute_trade_heatmap(&trades, year, month);
    if days.is_empty() {
        eprintln!("No trades in {year}-{month:02}");
        return ExitCode::SUCCESS;
    }

    for day in &days {
        let plural = if day.trade_count == 1 { "trade" } else { "trades" };
        println!(
            "{}  {:+10.2}  ({} {})",
            day.date, day.pnl, day.trade_count, plural
        );
    }
    let total: f64 = days.iter().map(|d| d.pnl).sum();
    eprintln!("\n{}-{:02}: {:+.2} over {} active days", year, month, total, days.len());
    ExitCode::SUCCESS
}

fn run_info(input: &PathBuf) -> ExitCode {
    let adapter = CsvJournalAdapter::new(input.clone());

    let range = match adapter.journal_range() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match range {
        Some((first, last, count)) => {
            eprintln!("Journal: {}", input.display());
            eprintln!("  {} trades from {} to {}", count, first, last);
        }
        None => {
            eprintln!("Journal: {} (empty)", input.display());
            return ExitCode::SUCCESS;
        }
    }

    match adapter.list_pairs() {
        Ok(pairs) => {
            eprintln!("  pairs: {}", pairs.join(", "));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let filter = match build_trade_filter(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let input = match resolve_input(None, &adapter) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let trades = match fetch_trades(&input, &filter) {
        Ok(t) => t,
        Err(code) => return code,
    };

    eprintln!("\nJournal input: {}", input.display());
    eprintln!("  {} trades match the configured filter", trades.len());
    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
        eprintln!("  filter range: {} to {}", start, end);
    }

    let heatmap_year = adapter.get_int("heatmap", "year", 0);
    if heatmap_year > 0 {
        let month = adapter.get_int("heatmap", "month", 0);
        if !(1..=12).contains(&month) {
            eprintln!("error: [heatmap] month must be between 1 and 12");
            return ExitCode::from(2);
        }
        eprintln!("  heatmap target: {}-{:02}", heatmap_year, month);
    }

    eprintln!("\nConfig is valid");
    ExitCode::SUCCESS
}
