//! Customer commands.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, Subcommand};
use innkeep::output::OutputFormat;
use innkeep::{Customer, CustomerId, Database};

/// Manage customers.
#[derive(Args)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub action: CustomerAction,
}

/// Customer subcommands.
#[derive(Subcommand)]
pub enum CustomerAction {
    /// Register a customer
    Add {
        /// Full name
        #[arg(value_name = "NAME")]
        name: String,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Show a customer
    Show {
        /// Customer id
        #[arg(value_name = "ID")]
        id: i64,
    },
}

impl CustomerCommand {
    /// Execute the customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let customer = match self.action {
            CustomerAction::Add { name, email, phone } => {
                let customer = Customer::new(CustomerId::UNASSIGNED, name, email, phone)
                    .map_err(innkeep::Error::from)?;
                let customer = db.create_customer(&customer)?;
                if global.quiet {
                    return Ok(());
                }
                customer
            }
            CustomerAction::Show { id } => {
                let id = CustomerId::from(id);
                Database::get_customer_by_id(db.connection(), id)?.ok_or_else(|| {
                    innkeep::Error::NotFound {
                        resource: format!("customer {id}"),
                    }
                })?
            }
        };

        match config.output_format() {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "id": customer.id().value(),
                    "name": customer.name(),
                    "email": customer.email(),
                    "phone": customer.phone(),
                });
                let text = serde_json::to_string_pretty(&json)
                    .map_err(|e| CliError::Library(innkeep::Error::from(e)))?;
                println!("{text}");
            }
            OutputFormat::Table => {
                println!("Customer {}: {}", customer.id(), customer.name());
                if let Some(email) = customer.email() {
                    println!("  email: {email}");
                }
                if let Some(phone) = customer.phone() {
                    println!("  phone: {phone}");
                }
            }
        }

        Ok(())
    }
}
