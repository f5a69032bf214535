//! Expense CLI commands
//!
//! Classify free text and parse single expense messages.

use clap::Args;

use crate::display::format_parsed_expense;
use crate::error::FamspendResult;
use crate::services::{classifier, parser};

/// Arguments for `classify`
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Text to classify (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for `parse`
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Expense message, e.g. "Spent 200 rs on taxi - late night ride"
    #[arg(required = true, allow_hyphen_values = true)]
    pub message: Vec<String>,

    /// Print the parsed expense as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the classify command
pub fn handle_classify_command(args: ClassifyArgs) -> FamspendResult<()> {
    let text = args.text.join(" ");
    println!("{}", classifier::classify(&text));
    Ok(())
}

/// Handle the parse command
pub fn handle_parse_command(args: ParseArgs) -> FamspendResult<()> {
    let message = args.message.join(" ");
    let expense = parser::parse(&message)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&expense)?);
    } else {
        print!("{}", format_parsed_expense(&expense));
    }
    Ok(())
}
