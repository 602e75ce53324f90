//! Closed-form amortization formulas for monthly-compounded loans.

pub mod annuity;
pub mod differentiated;
