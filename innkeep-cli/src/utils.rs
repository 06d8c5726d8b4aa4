//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, staff sessions
//! and argument parsing.

use crate::error::CliError;
use chrono::{DateTime, NaiveDate, Utc};
use innkeep::availability::parse_date;
use innkeep::config::ConfigValidator;
use innkeep::database::DATABASE_FILE_NAME;
use innkeep::output::OutputFormat;
use innkeep::{
    Config, ConfigBuilder, Database, DatabaseConfig, DateRange, ExecutionResult, Room, Session,
};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Staff member performing changes.
    pub staff: Option<String>,

    /// Output format for query results.
    pub format: Option<OutputFormat>,
}

/// Resolve the data directory: `--data-dir` (or `INNKEEP_DATA_DIR`) first,
/// then `~/.innkeep`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    innkeep::database::default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let working_dir = env::current_dir()?;

    let overrides = Config {
        maximum_lock_wait_seconds: global.busy_timeout.map(u64::from),
        output_format: global.format,
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_working_dir(&working_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);
    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit.unwrap_or(false);

    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(Duration::from_secs(config.lock_wait_seconds()));

    Database::open(db_config).map_err(CliError::from)
}

/// Start a staff session for a mutating command.
///
/// The staff name comes from `--staff`, then `default_staff` in the
/// configuration. Its lifetime is the configured session TTL.
pub fn start_session(
    global: &GlobalOptions,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<Session, CliError> {
    let staff = global
        .staff
        .as_deref()
        .or(config.default_staff.as_deref())
        .ok_or_else(|| {
            CliError::InvalidArguments(
                "no staff member given (use --staff or set default_staff)".to_string(),
            )
        })?;
    ConfigValidator::validate_staff_name("staff", staff)?;

    Session::start(staff, config.session_ttl(), now)
        .map_err(|e| CliError::Library(innkeep::Error::from(e)))
}

/// Parse a date argument in `YYYY-MM-DD` form.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, CliError> {
    parse_date(value).map_err(CliError::from)
}

/// Build the date range a command operates on.
///
/// `--date` selects one day; `--from`/`--to` select an inclusive span where a
/// missing end means a single day.
pub fn date_range_args(
    date: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<DateRange, CliError> {
    match (date, from, to) {
        (Some(date), None, None) => Ok(DateRange::single(parse_date_arg(date)?)),
        (None, Some(from), to) => {
            let start = parse_date_arg(from)?;
            let end = to.map(parse_date_arg).transpose()?.unwrap_or(start);
            DateRange::new(start, end).map_err(CliError::from)
        }
        (None, None, Some(_)) => Err(CliError::InvalidArguments(
            "--to requires --from".to_string(),
        )),
        (None, None, None) => Err(CliError::InvalidArguments(
            "either --date or --from is required".to_string(),
        )),
        _ => Err(CliError::InvalidArguments(
            "--date cannot be combined with --from/--to".to_string(),
        )),
    }
}

/// Parse a money amount such as `120`, `120.5` or `120.50` into cents.
pub fn parse_amount(value: &str) -> Result<i64, CliError> {
    let invalid = || CliError::InvalidArguments(format!("invalid amount '{value}'"));
    let trimmed = value.trim();

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };
    if whole.is_empty()
        || fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .ok_or_else(invalid)
}

/// Look up an active or inactive room by its number.
pub fn find_room(db: &Database, number: &str) -> Result<Room, CliError> {
    Database::get_room_by_number(db.connection(), number)?
        .ok_or_else(|| CliError::SemanticFailure(format!("No room numbered '{number}'")))
}

/// Print the planned actions of a mutation.
///
/// Dry runs always list what would happen; real runs list the actions only
/// with `--verbose`. Plan warnings are reported through the logger.
pub fn report_execution(global: &GlobalOptions, result: &ExecutionResult) {
    if result.dry_run {
        println!("Dry-run mode: no changes will be made");
        for action in &result.actions_taken {
            println!("  - {action}");
        }
    } else if global.verbose {
        for action in &result.actions_taken {
            println!("  - {action}");
        }
    }
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
