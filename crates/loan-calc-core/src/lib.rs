//! Loan repayment calculations.
//!
//! Solves for one of four quantities of a monthly-compounded loan: the
//! number of payments, the fixed annuity payment, the principal a payment
//! can service, or a differentiated (declining) payment schedule. Every
//! currency amount and payment count is rounded up, so results always
//! favour the lender.

pub mod amortization;
pub mod calculator;
pub mod error;
pub mod rates;
pub mod repayment;
pub mod rounding;
pub mod types;

pub use calculator::{calculate, CalculationMode, CalculationOutput};
pub use error::LoanCalcError;
pub use types::*;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
