//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the innkeep data directory and database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, shorten_path, GlobalOptions};
use clap::Args;
use innkeep::database::DATABASE_FILE_NAME;
use innkeep::operations::{init_database, InitOptions};
use std::path::Path;

/// Initialize the innkeep data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    fn planned_steps(&self, data_dir: &Path, db_path: &Path) -> Vec<String> {
        let mut steps = vec![
            "Dry-run mode: no changes will be made".to_string(),
            format!("Would initialize innkeep in {}", shorten_path(data_dir)),
        ];

        if !data_dir.exists() {
            steps.push("  create the data directory".to_string());
        }
        match (db_path.exists(), self.overwrite) {
            (false, _) => steps.push(format!("  create {}", db_path.display())),
            (true, true) => steps.push(format!("  replace {}", db_path.display())),
            (true, false) => steps.push(format!(
                "  stop: {} exists (pass --overwrite to replace it)",
                db_path.display()
            )),
        }
        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                steps.push("  keep the existing config.yaml".to_string());
            } else {
                steps.push(format!("  write {}", config_path.display()));
            }
        }
        steps
    }

    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        let db_path = data_dir.join(DATABASE_FILE_NAME);

        if self.dry_run {
            for step in self.planned_steps(&data_dir, &db_path) {
                println!("{step}");
            }
            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);
        let result = init_database(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized innkeep in: {}", shorten_path(&result.data_dir));
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
