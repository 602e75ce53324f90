//! Differentiated loans: equal principal each month, interest charged on the
//! declining balance, so the total payment shrinks month by month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LoanCalcError;
use crate::rates::PERCENT_MONTHS_PER_YEAR;
use crate::rounding::ceil_settled;
use crate::types::{Money, Rate};
use crate::LoanCalcResult;

/// One month of a differentiated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    /// 1-indexed month number.
    pub month: u32,
    /// Payment due that month, rounded up.
    pub payment: Money,
}

/// Monthly payments of a differentiated loan. Month `m` (1-indexed) pays
/// ceil(p/n + i * (p - p*(m-1)/n)) with i = r/1200.
///
/// Takes the annual percentage rate `r` rather than `i` and evaluates each
/// month as the single quotient p * (1200 + r*(n-m+1)) / (1200*n), so a
/// payment that is mathematically whole is not pushed up a unit by a rounded
/// repeating fraction.
pub fn differentiated_payments(
    principal: Money,
    periods: u32,
    annual_rate: Rate,
) -> LoanCalcResult<Vec<Money>> {
    if principal <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "principal",
            "principal must be greater than zero",
        ));
    }
    if periods == 0 {
        return Err(LoanCalcError::invalid(
            "periods",
            "Number of periods must be > 0",
        ));
    }
    if annual_rate <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "interest",
            "Annual interest rate must be greater than zero",
        ));
    }

    let denominator = PERCENT_MONTHS_PER_YEAR * Decimal::from(periods);

    (1..=periods)
        .map(|m| -> LoanCalcResult<Money> {
            let outstanding_months = Decimal::from(periods - m + 1);
            let numerator = annual_rate
                .checked_mul(outstanding_months)
                .and_then(|interest| interest.checked_add(PERCENT_MONTHS_PER_YEAR))
                .and_then(|share| principal.checked_mul(share))
                .ok_or_else(|| LoanCalcError::overflow("principal", "Differentiated payment"))?;
            Ok(ceil_settled(numerator / denominator))
        })
        .collect()
}

/// Same as [`differentiated_payments`], tagged with month numbers.
pub fn differentiated_schedule(
    principal: Money,
    periods: u32,
    annual_rate: Rate,
) -> LoanCalcResult<Vec<ScheduledPayment>> {
    let payments = differentiated_payments(principal, periods, annual_rate)?;
    Ok(payments
        .into_iter()
        .zip(1u32..)
        .map(|(payment, month)| ScheduledPayment { month, payment })
        .collect())
}
