//! Data directory initialization.
//!
//! Creates the innkeep data directory and database, optionally with a
//! commented configuration file.

use std::fs;
use std::path::PathBuf;

use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of initialization.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# innkeep configuration

# Longest date range a calendar query may span (default: 366)
# resolver:
#   max_range_days: 366

# Reject check-ins outside the booked stay instead of warning (default: false)
# transitions:
#   enforce_check_in_window: false

# Staff session lifetime in minutes (default: 480)
# session:
#   ttl_minutes: 480

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Output format for query commands: table or json (default: table)
# output_format: table

# Staff name used when --staff is not given
# default_staff: front-desk
";

/// Initializes the data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is not set
/// - The database cannot be initialized
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use innkeep::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/innkeep-test")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// assert!(result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists {
        fs::remove_file(&db_path)?;
    }

    Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    log::debug!("initialized {}", options.data_dir.display());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigLoader};
    use tempfile::TempDir;

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("innkeep");

        let result = init_database(&InitOptions::new(data_dir.clone())).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert!(data_dir.join("innkeep.db").exists());
    }

    #[test]
    fn test_init_refuses_to_clobber() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("innkeep");
        init_database(&InitOptions::new(data_dir.clone())).unwrap();

        match init_database(&InitOptions::new(data_dir.clone())) {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "database");
                assert!(message.contains("--overwrite"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let result =
            init_database(&InitOptions::new(data_dir).with_overwrite(true)).unwrap();
        assert!(!result.data_dir_created);
        assert!(result.database_created);
    }

    #[test]
    fn test_config_template_parses_to_defaults() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("innkeep");

        let result =
            init_database(&InitOptions::new(data_dir.clone()).with_create_config(true)).unwrap();
        assert!(result.config_created);

        let config = ConfigLoader::load_file(&data_dir.join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_existing_config_kept() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("innkeep");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("config.yaml"), "default_staff: ana\n").unwrap();

        let result =
            init_database(&InitOptions::new(data_dir.clone()).with_create_config(true)).unwrap();
        assert!(!result.config_created);
        assert_eq!(
            fs::read_to_string(data_dir.join("config.yaml")).unwrap(),
            "default_staff: ana\n"
        );
    }
}
