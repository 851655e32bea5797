use anyhow::Result;
use clap::{Parser, Subcommand};

use tracker::cli::{
    handle_expense_command, handle_income_command, handle_reset_command, print_summary,
    ExpenseCommands, IncomeCommands,
};
use tracker::config::{paths::TrackerPaths, settings::Settings};
use tracker::logging::{self, LogTarget};
use tracker::services::{BudgetStore, LoadStatus};
use tracker::storage::FileSlots;

#[derive(Parser)]
#[command(
    name = "tracker",
    author = "Kaylee Beyene",
    version,
    about = "Terminal income and expense tracker",
    long_about = "Record one income figure and a list of expenses, each either \
                  personal (you pay all of it) or shared (you pay half), and see \
                  what remains. Running without a subcommand opens the \
                  interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show totals and the expense list
    Summary,

    /// Clear the income and every expense
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if interactive {
        paths.ensure_directories()?;
        logging::init(LogTarget::File(&paths.log_file()))?;
    } else {
        logging::init(LogTarget::Stderr)?;
    }

    // Initialize storage
    let (mut store, status) = BudgetStore::open(FileSlots::new(paths.clone()))?;
    if let LoadStatus::Recovered(reason) = &status {
        eprintln!(
            "Warning: stored data at {} was unreadable ({}); starting with an empty budget.",
            paths.budget_file().display(),
            reason
        );
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            tracker::tui::run_tui(&mut store, &settings)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            print_summary(&store, &settings);
        }
        Some(Commands::Reset { yes }) => {
            handle_reset_command(&mut store, &settings, yes)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'tracker income set <amount>' to record your income.");
            println!("Run 'tracker expense add <description> <amount> [--shared]' to add expenses.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data file:       {}", paths.budget_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Decimal separator:  {:?}", settings.decimal_separator);
            println!("  Thousands separator: {:?}", settings.thousands_separator);
            println!("  Warning threshold:  {}", settings.warning_threshold);
            println!();
            println!("Remaining amounts from zero up to the warning threshold are shown as a");
            println!(
                "warning. Change it with \"warning_threshold\" in {}.",
                paths.settings_file().display()
            );
        }
    }

    Ok(())
}
