use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::types::Rate;
use crate::LoanCalcResult;

/// Percent-per-year to monthly decimal: i = r / 1200.
pub const PERCENT_MONTHS_PER_YEAR: Decimal = dec!(1200);

/// Converts an annual percentage rate (10 = 10%) into the nominal monthly
/// decimal rate used by every formula.
pub fn nominal_monthly_rate(annual_rate: Rate) -> LoanCalcResult<Rate> {
    if annual_rate <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "interest",
            "Annual interest rate must be greater than zero",
        ));
    }

    Ok(annual_rate / PERCENT_MONTHS_PER_YEAR)
}

/// Compound growth factor (1 + i)^n
pub fn compound_factor(monthly_rate: Rate, periods: u32) -> LoanCalcResult<Decimal> {
    (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(periods))
        .ok_or_else(|| {
            LoanCalcError::invalid(
                "periods",
                format!("Compound factor overflows over {periods} periods"),
            )
        })
}

/// Annuity factor i(1 + i)^n / ((1 + i)^n - 1): the share of the principal
/// repaid by each fixed payment.
pub fn annuity_factor(monthly_rate: Rate, periods: u32) -> LoanCalcResult<Decimal> {
    if periods == 0 {
        return Err(LoanCalcError::invalid(
            "periods",
            "Number of periods must be > 0",
        ));
    }
    if monthly_rate <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "interest",
            "Monthly rate must be greater than zero",
        ));
    }

    let factor = compound_factor(monthly_rate, periods)?;
    let divisor = factor - Decimal::ONE;

    if divisor.is_zero() {
        return Err(LoanCalcError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(monthly_rate * factor / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_nominal_monthly_rate() {
        assert_eq!(nominal_monthly_rate(dec!(12)).unwrap(), dec!(0.01));
        assert_eq!(nominal_monthly_rate(dec!(7.8)).unwrap(), dec!(0.0065));
    }

    #[test]
    fn test_nominal_monthly_rate_rejects_non_positive() {
        assert!(matches!(
            nominal_monthly_rate(dec!(0)),
            Err(LoanCalcError::InvalidInput { .. })
        ));
        assert!(nominal_monthly_rate(dec!(-5)).is_err());
    }

    #[test]
    fn test_annuity_factor_single_period() {
        // One period: repay principal plus one month of interest.
        let factor = annuity_factor(dec!(0.01), 1).unwrap();
        assert_eq!(factor, dec!(1.01));
    }

    #[test]
    fn test_annuity_factor_zero_periods() {
        assert!(annuity_factor(dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_compound_factor_overflow_is_an_error() {
        let result = compound_factor(dec!(0.5), u32::MAX);
        assert!(matches!(result, Err(LoanCalcError::InvalidInput { .. })));
    }
}
