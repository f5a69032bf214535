use anyhow::Result;
use clap::{Parser, Subcommand};

use famspend::cli::{
    handle_budget_command, handle_classify_command, handle_export_command, handle_parse_command,
    handle_settle_command, handle_summary_command,
};
use famspend::config::{paths::FamspendPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "famspend",
    author = "Kaylee Beyene",
    version,
    about = "Household expense tracker",
    long_about = "famspend turns free-text expense messages like \"Spent 200 rs on taxi\" \
                  into categorized expenses, tracks monthly category budgets, and works \
                  out who owes whom so that everyone pays their fair share."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify text into an expense category
    Classify(famspend::cli::ClassifyArgs),

    /// Parse a free-text expense message
    Parse(famspend::cli::ParseArgs),

    /// Work out who pays whom to settle up
    Settle(famspend::cli::SettleArgs),

    /// Summarize spending per member and category
    Summary(famspend::cli::SummaryArgs),

    /// Show monthly budget status
    Budget(famspend::cli::BudgetArgs),

    /// Export expenses or a household report
    Export(famspend::cli::ExportArgs),

    /// Initialize the configuration directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let paths = FamspendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Classify(args)) => handle_classify_command(args)?,
        Some(Commands::Parse(args)) => handle_parse_command(args)?,
        Some(Commands::Settle(args)) => handle_settle_command(&settings, args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&settings, args)?,
        Some(Commands::Budget(args)) => handle_budget_command(&paths, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&settings, args)?,
        Some(Commands::Init) => {
            println!("Initializing famspend at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if !paths.budgets_file().exists() {
                std::fs::write(paths.budgets_file(), "[]\n")?;
            }
            println!("Initialization complete!");
            println!();
            println!("Edit {} to set household members", paths.settings_file().display());
            println!("and {} to set monthly budgets.", paths.budgets_file().display());
        }
        Some(Commands::Config) => {
            println!("famspend Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Budgets file:     {}", paths.budgets_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Household:            {}", settings.household_name);
            println!("  Default currency:     {}", settings.default_currency);
            println!("  Settlement tolerance: {}", settings.settlement_tolerance);
            println!("  Date format:          {}", settings.date_format);
            if settings.members.is_empty() {
                println!("  Members:              (none)");
            } else {
                println!("  Members:              {}", settings.members.join(", "));
            }
        }
        None => {
            println!("famspend - household expense tracker");
            println!();
            println!("Run 'famspend --help' for usage information.");
        }
    }

    Ok(())
}
