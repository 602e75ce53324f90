mod args;
mod output;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use rust_decimal::Decimal;
use std::process;

use args::ArgsError;

/// Loan repayment calculator
#[derive(Debug, Parser)]
#[command(
    name = "creditcalc",
    version,
    about = "Loan repayment calculator",
    long_about = "Solves annuity loans for the number of payments, the monthly payment or \
                  the principal (omit the one to solve for), or prints a differentiated \
                  payment schedule. Every amount is rounded up.")]
pub struct Cli {
    /// Loan type
    #[arg(long = "type", value_enum)]
    pub loan_type: Option<LoanType>,

    /// Loan principal
    #[arg(long, allow_negative_numbers = true)]
    pub principal: Option<Decimal>,

    /// Fixed monthly payment (annuity only)
    #[arg(long, allow_negative_numbers = true)]
    pub payment: Option<Decimal>,

    /// Number of monthly payments
    #[arg(long)]
    pub periods: Option<u32>,

    /// Annual interest rate in percent (10 = 10%)
    #[arg(long, allow_negative_numbers = true)]
    pub interest: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoanType {
    #[value(alias = "diff")]
    Differentiated,
    Annuity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

const EXIT_INVALID_INPUT: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    let invocation = match args::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(ArgsError::Display(e)) => e.exit(),
        Err(ArgsError::Usage(e)) => {
            init_logging(0);
            log::debug!("rejected arguments: {}", e.reason());
            println!("{e}");
            process::exit(EXIT_USAGE);
        }
    };

    init_logging(invocation.verbosity);
    log::info!("calculating {:?}", invocation.mode);

    let result = loan_calc_core::calculate(&invocation.mode)
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|out| output::render(invocation.output, &out));

    match result {
        Ok(text) => {
            println!("{text}");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(EXIT_INVALID_INPUT);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}
