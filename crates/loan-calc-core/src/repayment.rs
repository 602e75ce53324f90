//! Quantities derived from a resolved repayment plan: overpayment and the
//! term expressed in years and months.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

const MONTHS_PER_YEAR: u32 = 12;

/// Total interest paid over the loan: ceil(total_paid - principal).
///
/// Ceiling rounding of individual payments can in principle leave the total
/// below the principal; such a result is clamped to zero.
pub fn overpayment(principal: Money, total_paid: Money) -> Money {
    let raw = (total_paid - principal).ceil();
    if raw < Decimal::ZERO {
        log::warn!(
            "negative overpayment {raw} clamped to zero (principal {principal}, paid {total_paid})"
        );
        return Decimal::ZERO;
    }
    raw.normalize()
}

/// Loan term split into whole years and remaining months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentTerm {
    pub years: u32,
    pub months: u32,
}

impl RepaymentTerm {
    pub fn total_months(&self) -> u32 {
        self.years * MONTHS_PER_YEAR + self.months
    }
}

pub fn months_to_years_months(total_months: u32) -> RepaymentTerm {
    RepaymentTerm {
        years: total_months / MONTHS_PER_YEAR,
        months: total_months % MONTHS_PER_YEAR,
    }
}

impl fmt::Display for RepaymentTerm {
    /// "1 year and 1 month", "2 years", "5 months". Zero components are
    /// omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let years = (self.years > 0).then(|| plural(self.years, "year"));
        let months = (self.months > 0).then(|| plural(self.months, "month"));

        match (years, months) {
            (Some(y), Some(m)) => write!(f, "{y} and {m}"),
            (Some(y), None) => f.write_str(&y),
            (None, Some(m)) => f.write_str(&m),
            (None, None) => f.write_str("0 months"),
        }
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s")
    } else {
        format!("{count} {unit}")
    }
}
