//! Turns raw argument strings into a resolved calculation mode.
//!
//! Which annuity quantity to solve for is implied by the one flag left out;
//! every other combination is a usage error.

use std::ffi::OsString;
use std::fmt;

use clap::error::ErrorKind;
use clap::Parser;
use loan_calc_core::CalculationMode;

use crate::{Cli, LoanType, OutputFormat};

/// Minimum number of arguments after the program name.
const MIN_ARGS: usize = 4;

/// A fully validated invocation.
#[derive(Debug)]
pub struct Invocation {
    pub mode: CalculationMode,
    pub output: OutputFormat,
    pub verbosity: u8,
}

/// Missing or contradictory flags. Always shown to the user as
/// "Incorrect parameters"; the reason is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    reason: String,
}

impl UsageError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Incorrect parameters")
    }
}

impl std::error::Error for UsageError {}

#[derive(Debug)]
pub enum ArgsError {
    /// `--help` or `--version`: clap renders these itself.
    Display(clap::Error),
    Usage(UsageError),
}

impl From<UsageError> for ArgsError {
    fn from(e: UsageError) -> Self {
        ArgsError::Usage(e)
    }
}

/// Parse `argv` (program name first) into an [`Invocation`].
pub fn parse_args<I, T>(argv: I) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Err(ArgsError::Display(e));
        }
        Err(e) => return Err(UsageError::new(e.to_string()).into()),
    };

    let supplied = argv.len().saturating_sub(1);
    if supplied < MIN_ARGS {
        let reason = format!("expected at least {MIN_ARGS} arguments, got {supplied}");
        return Err(UsageError::new(reason).into());
    }

    Ok(Invocation {
        mode: resolve_mode(&cli)?,
        output: cli.output,
        verbosity: cli.verbose,
    })
}

/// Pick the calculation from which flags are present.
pub fn resolve_mode(cli: &Cli) -> Result<CalculationMode, UsageError> {
    let interest = cli
        .interest
        .ok_or_else(|| UsageError::new("--interest is required"))?;
    let loan_type = cli
        .loan_type
        .ok_or_else(|| UsageError::new("--type is required"))?;

    match (loan_type, cli.principal, cli.payment, cli.periods) {
        (LoanType::Differentiated, Some(principal), None, Some(periods)) => {
            Ok(CalculationMode::Differentiated {
                principal,
                periods,
                interest,
            })
        }
        (LoanType::Differentiated, ..) => Err(UsageError::new(
            "differentiated loans take --principal and --periods but no --payment",
        )),
        (LoanType::Annuity, Some(principal), Some(payment), None) => {
            Ok(CalculationMode::SolvePeriods {
                principal,
                payment,
                interest,
            })
        }
        (LoanType::Annuity, Some(principal), None, Some(periods)) => {
            Ok(CalculationMode::SolveAnnuity {
                principal,
                periods,
                interest,
            })
        }
        (LoanType::Annuity, None, Some(payment), Some(periods)) => {
            Ok(CalculationMode::SolvePrincipal {
                payment,
                periods,
                interest,
            })
        }
        (LoanType::Annuity, ..) => Err(UsageError::new(
            "annuity loans take exactly two of --principal, --payment and --periods",
        )),
    }
}
