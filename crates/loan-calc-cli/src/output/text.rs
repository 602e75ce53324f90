//! The line-oriented output printed by default.

use loan_calc_core::{CalculationOutput, Money};

pub fn render_text(output: &CalculationOutput) -> String {
    let mut lines: Vec<String> = Vec::new();

    match output {
        CalculationOutput::Periods { term, .. } => {
            lines.push(format!("It will take {term} to repay this loan!"));
        }
        CalculationOutput::Annuity { payment, .. } => {
            lines.push(format!("Your monthly payment = {}!", plain(*payment)));
        }
        CalculationOutput::Principal { principal, .. } => {
            lines.push(format!("Your loan principal = {}!", plain(*principal)));
        }
        CalculationOutput::Differentiated { schedule, .. } => {
            lines.extend(
                schedule
                    .iter()
                    .map(|p| format!("Month {}: payment is {}", p.month, plain(p.payment))),
            );
        }
    }

    lines.push(format!("Overpayment = {}", plain(output.overpayment())));
    lines.join("\n")
}

/// Whole amounts without a trailing scale ("21248", not "21248.00").
fn plain(amount: Money) -> String {
    amount.normalize().to_string()
}
