//! Mode dispatch: resolves which quantity to solve for and wraps the answer,
//! together with the overpayment, in the standard output envelope.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::amortization::annuity;
use crate::amortization::differentiated::{self, ScheduledPayment};
use crate::error::LoanCalcError;
use crate::rates::nominal_monthly_rate;
use crate::repayment::{self, RepaymentTerm};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanCalcResult;

/// What to solve for, with exactly the inputs that mode needs.
///
/// `interest` is always the annual percentage rate (10 = 10%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculationMode {
    /// Annuity loan: how many months until the loan is repaid.
    SolvePeriods {
        principal: Money,
        payment: Money,
        interest: Rate,
    },
    /// Annuity loan: the fixed monthly payment.
    SolveAnnuity {
        principal: Money,
        periods: u32,
        interest: Rate,
    },
    /// Annuity loan: the principal a payment can service.
    SolvePrincipal {
        payment: Money,
        periods: u32,
        interest: Rate,
    },
    /// Differentiated loan: the declining payment schedule.
    Differentiated {
        principal: Money,
        periods: u32,
        interest: Rate,
    },
}

impl CalculationMode {
    pub fn annual_interest(&self) -> Rate {
        match *self {
            CalculationMode::SolvePeriods { interest, .. }
            | CalculationMode::SolveAnnuity { interest, .. }
            | CalculationMode::SolvePrincipal { interest, .. }
            | CalculationMode::Differentiated { interest, .. } => interest,
        }
    }

    fn methodology(&self) -> &'static str {
        match self {
            CalculationMode::SolvePeriods { .. } => "Annuity loan - number of monthly payments",
            CalculationMode::SolveAnnuity { .. } => "Annuity loan - fixed monthly payment",
            CalculationMode::SolvePrincipal { .. } => "Annuity loan - serviceable principal",
            CalculationMode::Differentiated { .. } => {
                "Differentiated loan - declining payment schedule"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculationOutput {
    Periods {
        total_months: u32,
        term: RepaymentTerm,
        total_paid: Money,
        overpayment: Money,
    },
    Annuity {
        payment: Money,
        total_paid: Money,
        overpayment: Money,
    },
    Principal {
        principal: Money,
        total_paid: Money,
        overpayment: Money,
    },
    Differentiated {
        schedule: Vec<ScheduledPayment>,
        total_paid: Money,
        overpayment: Money,
    },
}

impl CalculationOutput {
    pub fn overpayment(&self) -> Money {
        match *self {
            CalculationOutput::Periods { overpayment, .. }
            | CalculationOutput::Annuity { overpayment, .. }
            | CalculationOutput::Principal { overpayment, .. }
            | CalculationOutput::Differentiated { overpayment, .. } => overpayment,
        }
    }
}

/// Solve the requested quantity and its overpayment.
pub fn calculate(
    mode: &CalculationMode,
) -> LoanCalcResult<ComputationOutput<CalculationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let monthly_rate = nominal_monthly_rate(mode.annual_interest())?;
    log::debug!("resolved {mode:?} at monthly rate {monthly_rate}");

    let output = match *mode {
        CalculationMode::SolvePeriods { principal, payment, .. } => {
            let total_months = annuity::number_of_payments(principal, payment, monthly_rate)?;
            let total_paid = total_of(payment, total_months)?;
            CalculationOutput::Periods {
                total_months,
                term: repayment::months_to_years_months(total_months),
                total_paid,
                overpayment: settle(principal, total_paid, &mut warnings),
            }
        }
        CalculationMode::SolveAnnuity { principal, periods, .. } => {
            let payment = annuity::annuity_payment(principal, periods, monthly_rate)?;
            let total_paid = total_of(payment, periods)?;
            CalculationOutput::Annuity {
                payment,
                total_paid,
                overpayment: settle(principal, total_paid, &mut warnings),
            }
        }
        CalculationMode::SolvePrincipal { payment, periods, .. } => {
            let principal = annuity::loan_principal(payment, periods, monthly_rate)?;
            let total_paid = total_of(payment, periods)?;
            CalculationOutput::Principal {
                principal,
                total_paid,
                overpayment: settle(principal, total_paid, &mut warnings),
            }
        }
        CalculationMode::Differentiated {
            principal,
            periods,
            interest,
        } => {
            let schedule = differentiated::differentiated_schedule(principal, periods, interest)?;
            let total_paid = schedule
                .iter()
                .try_fold(Money::ZERO, |total, p| total.checked_add(p.payment))
                .ok_or_else(|| LoanCalcError::overflow("principal", "Total paid"))?;
            CalculationOutput::Differentiated {
                schedule,
                total_paid,
                overpayment: settle(principal, total_paid, &mut warnings),
            }
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(mode.methodology(), mode, warnings, elapsed, output))
}

/// Sum of `periods` equal payments.
fn total_of(payment: Money, periods: u32) -> LoanCalcResult<Money> {
    payment
        .checked_mul(Money::from(periods))
        .ok_or_else(|| LoanCalcError::overflow("payment", "Total paid"))
}

fn settle(principal: Money, total_paid: Money, warnings: &mut Vec<String>) -> Money {
    if total_paid < principal {
        warnings.push(format!(
            "Total paid {total_paid} is below the principal {principal}; \
             overpayment reported as zero"
        ));
    }
    repayment::overpayment(principal, total_paid)
}
