//! Annuity loans: a fixed payment every month.
//!
//! Any two of principal, payment and term determine the third. Each solver
//! rounds its answer up: payment counts to the next whole month, money to the
//! next whole unit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::LoanCalcError;
use crate::rates::annuity_factor;
use crate::rounding::ceil_settled;
use crate::types::{Money, Rate};
use crate::LoanCalcResult;

/// Number of monthly payments needed to repay `principal` with a fixed
/// `payment`: ceil(log_(1+i)(a / (a - i*p))).
///
/// The payment must exceed the first month's interest, otherwise the balance
/// never shrinks and the logarithm is undefined.
pub fn number_of_payments(
    principal: Money,
    payment: Money,
    monthly_rate: Rate,
) -> LoanCalcResult<u32> {
    validate_positive("principal", principal)?;
    validate_positive("payment", payment)?;
    validate_positive("interest", monthly_rate)?;

    let first_interest = monthly_rate
        .checked_mul(principal)
        .ok_or_else(|| LoanCalcError::overflow("principal", "First month's interest"))?;
    if payment <= first_interest {
        return Err(LoanCalcError::invalid(
            "payment",
            format!(
                "Payment must exceed the first month's interest of {}",
                ceil_settled(first_interest)
            ),
        ));
    }

    let ratio = payment
        .checked_div(payment - first_interest)
        .ok_or_else(|| LoanCalcError::overflow("payment", "Repayment ratio"))?;
    let numerator = ratio.checked_ln().ok_or_else(|| {
        LoanCalcError::invalid("payment", "Repayment ratio is outside the logarithm's domain")
    })?;
    let base = (Decimal::ONE + monthly_rate).checked_ln().ok_or_else(|| {
        LoanCalcError::invalid(
            "interest",
            "Monthly growth factor is outside the logarithm's domain",
        )
    })?;

    if base.is_zero() {
        return Err(LoanCalcError::DivisionByZero {
            context: "payment count logarithm base".into(),
        });
    }

    ceil_settled(numerator / base).to_u32().ok_or_else(|| {
        LoanCalcError::invalid("payment", "Payment count does not fit in a month counter")
    })
}

/// Fixed monthly payment: ceil(p * i(1+i)^n / ((1+i)^n - 1)).
pub fn annuity_payment(
    principal: Money,
    periods: u32,
    monthly_rate: Rate,
) -> LoanCalcResult<Money> {
    validate_positive("principal", principal)?;
    let factor = annuity_factor(monthly_rate, periods)?;
    let payment = principal
        .checked_mul(factor)
        .ok_or_else(|| LoanCalcError::overflow("principal", "Annuity payment"))?;
    Ok(ceil_settled(payment))
}

/// Largest principal a fixed `payment` services over `periods` months:
/// ceil(a / (i(1+i)^n / ((1+i)^n - 1))).
pub fn loan_principal(payment: Money, periods: u32, monthly_rate: Rate) -> LoanCalcResult<Money> {
    validate_positive("payment", payment)?;
    let factor = annuity_factor(monthly_rate, periods)?;
    let principal = payment
        .checked_div(factor)
        .ok_or_else(|| LoanCalcError::overflow("payment", "Loan principal"))?;
    Ok(ceil_settled(principal))
}

fn validate_positive(field: &str, value: Decimal) -> LoanCalcResult<()> {
    if value <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            field,
            format!("{field} must be greater than zero"),
        ));
    }
    Ok(())
}
