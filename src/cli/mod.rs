use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{SessionService, Snapshot};
use crate::domain::{format_cents, parse_cents, Advice, Category};
use crate::io::export::{expenses_to_csv_bytes, EXPORT_FILE_NAME};
use crate::io::import::import_expenses_csv;

/// SmartSpend - Personal Expense Analyzer
#[derive(Parser)]
#[command(name = "smartspend")]
#[command(about = "A session-based expense tracker with analytics and CSV export")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the spending dashboard for a ledger CSV
    Dashboard {
        /// Ledger CSV file (Date,Category,Amount,Description)
        input: String,

        /// Monthly budget (e.g., "500" or "500.00")
        #[arg(short, long)]
        budget: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Re-export a ledger CSV in normalized form
    Export {
        /// Ledger CSV file to load
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the valid expense categories
    Categories,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let verbose = self.verbose;
        match self.command {
            Commands::Dashboard {
                input,
                budget,
                format,
            } => {
                let mut service = load_session(&input, verbose)?;

                if let Some(budget) = budget {
                    let budget_cents = parse_cents(&budget)
                        .context("Invalid budget format. Use '500.00' or '500'")?;
                    service.set_budget(budget_cents)?;
                }

                let snapshot = service.snapshot();
                match format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                    "table" => print_dashboard(&snapshot),
                    other => anyhow::bail!("Unknown format: {} (use table or json)", other),
                }
            }

            Commands::Export { input, output } => {
                let service = load_session(&input, verbose)?;
                let bytes = expenses_to_csv_bytes(service.expenses())?;

                match output {
                    Some(path) => {
                        let mut file = File::create(&path)
                            .with_context(|| format!("Cannot create output file: {}", path))?;
                        file.write_all(&bytes)?;
                        println!(
                            "Exported {} expense(s) to {} (suggested name: {})",
                            service.expenses().len(),
                            path,
                            EXPORT_FILE_NAME
                        );
                    }
                    None => std::io::stdout().write_all(&bytes)?,
                }
            }

            Commands::Categories => {
                for category in Category::ALL {
                    println!("{}", category);
                }
            }
        }

        Ok(())
    }
}

/// Load a ledger CSV into a fresh in-memory session. Bad lines are
/// skipped; they are reported on stderr when verbose is set.
fn load_session(input: &str, verbose: bool) -> Result<SessionService> {
    let file = File::open(input).with_context(|| format!("Cannot open ledger file: {}", input))?;

    let mut service = SessionService::new();
    let result = import_expenses_csv(file, &mut service)?;

    if !result.errors.is_empty() {
        eprintln!("Skipped {} malformed line(s)", result.errors.len());
        if verbose {
            for error in &result.errors {
                match &error.field {
                    Some(field) => eprintln!("  line {}: {} ({})", error.line, error.error, field),
                    None => eprintln!("  line {}: {}", error.line, error.error),
                }
            }
        }
    }

    Ok(service)
}

fn print_dashboard(snapshot: &Snapshot) {
    println!("Expense Log");
    println!("{:<12} {:<15} {:>10}  Description", "Date", "Category", "Amount");
    for expense in &snapshot.expenses {
        println!(
            "{:<12} {:<15} {:>10}  {}",
            expense.date.format("%Y-%m-%d"),
            expense.category,
            format_cents(expense.amount_cents),
            expense.description
        );
    }

    println!();
    println!(
        "Total spent: {} (budget: {})",
        format_cents(snapshot.total_spent_cents),
        format_cents(snapshot.budget_cents)
    );
    if let Some(progress) = snapshot.budget_progress {
        println!("Budget used: {:.0}%", progress * 100.0);
    }

    if !snapshot.categories.is_empty() {
        println!();
        println!("Spending by Category");
        for total in &snapshot.categories {
            println!(
                "{:<15} {:>10}",
                total.category,
                format_cents(total.total_cents)
            );
        }
    }

    if !snapshot.daily.is_empty() {
        println!();
        println!("Daily Spending Trend");
        for total in &snapshot.daily {
            println!(
                "{:<12} {:>10}",
                total.date.format("%Y-%m-%d"),
                format_cents(total.total_cents)
            );
        }
    }

    println!();
    println!("Recommendations");
    match &snapshot.advice {
        Advice::NoData => println!("Add some expenses to see analytics and recommendations."),
        Advice::Balanced => println!("Your spending looks balanced. Great job!"),
        Advice::Advisories(advisories) => {
            for advisory in advisories {
                println!("- {}", advisory);
            }
        }
    }
}
