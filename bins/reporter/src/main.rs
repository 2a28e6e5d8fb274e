//! Ledgerly reporter
//!
//! Reads a snapshot of journal entries and prints derived books and reports.
//!
//! Usage: ledgerly <command> <entries.json | -> [--openings FILE]
//!                 [--from YYYY-MM-DD] [--to YYYY-MM-DD] [--text]

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ledgerly_core::accounts::CashAccountPolicy;
use ledgerly_core::books::{Books, LedgerOptions};
use ledgerly_core::journal::{JournalEntry, ValidationReport, validate};
use ledgerly_core::ledger::OpeningBalances;
use ledgerly_core::reports::{
    BalanceSheet, CategoryGroup, DateRange, IncomeStatement, PeriodTrialBalance, TrialBalanceRow,
    TrialBalanceTotals, non_zero_rows,
};
use ledgerly_shared::config::LoggingSettings;
use ledgerly_shared::types::format_amount;
use ledgerly_shared::{AppConfig, AppError, AppResult};

#[derive(Debug, Parser)]
#[command(name = "ledgerly", version, about = "Ledgers and financial reports from journal entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Per-account ledgers with running balances
    Ledgers {
        #[command(flatten)]
        source: Source,
    },

    /// Trial balance (non-zero rows) and totals
    TrialBalance {
        #[command(flatten)]
        source: Source,

        /// Plain-text table instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Trial balance over --from/--to (as-of when no bound is given)
    Period {
        #[command(flatten)]
        source: Source,

        #[command(flatten)]
        window: Window,

        /// Plain-text table instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Cash-flow statement over --from/--to
    CashFlow {
        #[command(flatten)]
        source: Source,

        #[command(flatten)]
        window: Window,
    },

    /// Headline figures
    Summary {
        #[command(flatten)]
        source: Source,
    },

    /// Income statement and balance sheet over --from/--to
    Statements {
        #[command(flatten)]
        source: Source,

        #[command(flatten)]
        window: Window,
    },

    /// Validate every entry; exits 1 if any entry is invalid
    Validate {
        /// Journal entries JSON file, or `-` for stdin
        input: String,
    },

    /// Closing balances as next year's opening balances
    YearEnd {
        #[command(flatten)]
        source: Source,
    },
}

/// Where the entries and declared openings come from.
#[derive(Debug, Args)]
struct Source {
    /// Journal entries JSON file, or `-` for stdin
    input: String,

    /// Account-level opening balances (JSON array)
    #[arg(long, value_name = "FILE")]
    openings: Option<String>,
}

/// Report window; both bounds inclusive.
#[derive(Debug, Args)]
struct Window {
    /// Window start (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from: Option<String>,

    /// Window end (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    to: Option<String>,
}

impl Window {
    fn range(&self) -> AppResult<DateRange> {
        Ok(DateRange::parse(self.from.as_deref(), self.to.as_deref())?)
    }
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Ledgers { .. } => "ledgers",
            Self::TrialBalance { .. } => "trial-balance",
            Self::Period { .. } => "period",
            Self::CashFlow { .. } => "cash-flow",
            Self::Summary { .. } => "summary",
            Self::Statements { .. } => "statements",
            Self::Validate { .. } => "validate",
            Self::YearEnd { .. } => "year-end",
        }
    }

    /// Entry source of a reporting command; `None` for `validate`.
    fn source(&self) -> Option<&Source> {
        match self {
            Self::Ledgers { source }
            | Self::TrialBalance { source, .. }
            | Self::Period { source, .. }
            | Self::CashFlow { source, .. }
            | Self::Summary { source }
            | Self::Statements { source, .. }
            | Self::YearEnd { source } => Some(source),
            Self::Validate { .. } => None,
        }
    }

    fn input(&self) -> &str {
        match self {
            Self::Ledgers { source }
            | Self::TrialBalance { source, .. }
            | Self::Period { source, .. }
            | Self::CashFlow { source, .. }
            | Self::Summary { source }
            | Self::Statements { source, .. }
            | Self::YearEnd { source } => &source.input,
            Self::Validate { input } => input,
        }
    }
}

/// A stored entry, either bare or wrapped as `{ "entry": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Wrapped { entry: JournalEntry },
    Bare(JournalEntry),
}

impl StoredEntry {
    fn into_entry(self) -> JournalEntry {
        match self {
            Self::Wrapped { entry } | Self::Bare(entry) => entry,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrialBalanceOutput {
    rows: Vec<TrialBalanceRow>,
    totals: TrialBalanceTotals,
}

#[derive(Serialize)]
struct PeriodOutput {
    #[serde(flatten)]
    report: PeriodTrialBalance,
    groups: Vec<CategoryGroup>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatementsOutput {
    income_statement: IncomeStatement,
    balance_sheet: BalanceSheet,
}

#[derive(Serialize)]
struct EntryValidation {
    id: String,
    #[serde(flatten)]
    report: ValidationReport,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;

    init_tracing(&config.logging);

    let command = &cli.command;
    match run(&config, command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_user_correctable() => {
            warn!(code = err.error_code(), command = command.name(), "{err}");
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            error!(code = err.error_code(), command = command.name(), "{err}");
            Err(err).with_context(|| format!("ledgerly {} failed", command.name()))
        }
    }
}

fn init_tracing(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));

    // Logs go to stderr; stdout carries the report.
    let (json, text) = if settings.json {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

fn run(config: &AppConfig, command: &Command) -> AppResult<()> {
    let entries = read_entries(command.input())?;
    info!(entries = entries.len(), source = %command.input(), "Loaded journal entries");

    let Some(source) = command.source() else {
        return validate_all(&entries);
    };

    let openings = match &source.openings {
        Some(path) => read_json::<OpeningBalances>(path)?,
        None => OpeningBalances::default(),
    };
    let options = LedgerOptions::from_settings(&config.ledger).with_opening_balances(openings);

    let books = Books::derive(&entries, &options)?;
    info!(
        ledgers = books.ledgers.len(),
        fiscal_year = options.resolved_fiscal_year(),
        "Derived books"
    );

    match command {
        Command::Ledgers { .. } => print_json(&books.ledgers)?,
        Command::TrialBalance { text, .. } => {
            let rows = non_zero_rows(books.trial_balance.clone());
            if *text {
                print_trial_balance(&rows, &books.trial_balance_totals);
            } else {
                print_json(&TrialBalanceOutput {
                    rows,
                    totals: books.trial_balance_totals,
                })?;
            }
        }
        Command::Period { window, text, .. } => {
            let report = books.period(&window.range()?);
            if *text {
                print_period(&report);
            } else {
                let groups = report.by_category();
                print_json(&PeriodOutput { report, groups })?;
            }
        }
        Command::CashFlow { window, .. } => {
            let policy = CashAccountPolicy::from_settings(&config.ledger);
            print_json(&books.cash_flow(&window.range()?, &policy))?;
        }
        Command::Summary { .. } => print_json(&books.summary)?,
        Command::Statements { window, .. } => {
            let range = window.range()?;
            print_json(&StatementsOutput {
                income_statement: books.income_statement(&range),
                balance_sheet: books.balance_sheet(&range),
            })?;
        }
        Command::YearEnd { .. } => print_json(&books.year_end())?,
        // Handled before derivation.
        Command::Validate { .. } => {}
    }

    Ok(())
}

/// Prints a report per entry; any invalid entry fails the run.
fn validate_all(entries: &[JournalEntry]) -> AppResult<()> {
    let results = validation_results(entries);
    print_json(&results)?;

    let invalid = results.iter().filter(|r| !r.report.valid).count();
    if invalid == 0 {
        return Ok(());
    }

    warn!(invalid, total = entries.len(), "Invalid journal entries");
    Err(AppError::Validation(format!(
        "{invalid} of {} journal entries are invalid",
        entries.len()
    )))
}

fn validation_results(entries: &[JournalEntry]) -> Vec<EntryValidation> {
    entries
        .iter()
        .map(|entry| EntryValidation {
            id: entry.id.to_string(),
            report: validate(entry),
        })
        .collect()
}

fn read_entries(path: &str) -> AppResult<Vec<JournalEntry>> {
    let stored: Vec<StoredEntry> = read_json(path)?;
    Ok(stored.into_iter().map(StoredEntry::into_entry).collect())
}

fn read_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let raw = if path == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        raw
    } else {
        fs::read_to_string(path)?
    };

    serde_json::from_str(&raw).map_err(|e| AppError::InvalidInput(format!("{path}: {e}")))
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize report: {e}")))?;
    println!("{out}");
    Ok(())
}

fn print_trial_balance(rows: &[TrialBalanceRow], totals: &TrialBalanceTotals) {
    println!("{:<32} {:>16} {:>16}", "Account", "Debit", "Credit");
    for row in rows {
        println!(
            "{:<32} {:>16} {:>16}",
            row.account_name,
            format_amount(row.debit),
            format_amount(row.credit)
        );
    }
    println!(
        "{:<32} {:>16} {:>16}",
        if totals.is_balanced { "Total" } else { "Total (unbalanced)" },
        format_amount(totals.total_debit),
        format_amount(totals.total_credit)
    );
}

fn print_period(report: &PeriodTrialBalance) {
    println!("{:<32} {:>16} {:>16}", "Account", "Debit", "Credit");
    for group in report.by_category() {
        println!("{:?}", group.category);
        for row in &group.rows {
            println!(
                "  {:<30} {:>16} {:>16}",
                row.account_name,
                format_amount(row.debit),
                format_amount(row.credit)
            );
        }
    }
    println!(
        "{:<32} {:>16} {:>16}",
        if report.is_balanced { "Total" } else { "Total (unbalanced)" },
        format_amount(report.total_debits),
        format_amount(report.total_credits)
    );
}
