use loan_calc_core::amortization::{annuity, differentiated};
use loan_calc_core::rates::nominal_monthly_rate;
use loan_calc_core::LoanCalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Annuity round trip
// ===========================================================================

#[test]
fn test_principal_round_trips_through_annuity() {
    let cases = [
        (dec!(1_000_000), 60u32, dec!(10)),
        (dec!(500_000), 8, dec!(7.8)),
        (dec!(250_000), 360, dec!(4.5)),
        (dec!(12_000), 12, dec!(12)),
        (dec!(75_000), 1, dec!(20)),
    ];

    for (principal, periods, annual) in cases {
        let i = nominal_monthly_rate(annual).unwrap();
        let payment = annuity::annuity_payment(principal, periods, i).unwrap();
        let recovered = annuity::loan_principal(payment, periods, i).unwrap();

        // Rounding the payment up can only raise the recovered principal, by
        // at most one unit per period plus the final ceiling.
        assert!(
            recovered >= principal,
            "{principal}/{periods}/{annual}: recovered {recovered} below principal"
        );
        assert!(
            recovered - principal <= Decimal::from(periods) + Decimal::ONE,
            "{principal}/{periods}/{annual}: recovered {recovered} too far from principal"
        );
    }
}

#[test]
fn test_payment_count_matches_annuity_term() {
    // Paying exactly the annuity for a 60-month loan retires it in 60 months.
    let i = nominal_monthly_rate(dec!(10)).unwrap();
    let payment = annuity::annuity_payment(dec!(1_000_000), 60, i).unwrap();
    let months = annuity::number_of_payments(dec!(1_000_000), payment, i).unwrap();
    assert_eq!(months, 60);
}

#[test]
fn test_payment_equal_to_interest_never_amortizes() {
    let i = nominal_monthly_rate(dec!(12)).unwrap();
    let result = annuity::number_of_payments(dec!(100_000), dec!(1_000), i);
    assert!(matches!(result, Err(LoanCalcError::InvalidInput { .. })));
}

// ===========================================================================
// Differentiated schedule shape
// ===========================================================================

#[test]
fn test_schedule_has_one_positive_payment_per_month() {
    for periods in [1u32, 2, 7, 12, 60, 240] {
        let payments =
            differentiated::differentiated_payments(dec!(180_000), periods, dec!(9.5)).unwrap();

        assert_eq!(payments.len(), periods as usize);
        assert!(payments.iter().all(|p| *p > Decimal::ZERO && p.fract().is_zero()));
        assert!(
            payments.windows(2).all(|w| w[0] >= w[1]),
            "payments should never increase: {payments:?}"
        );
    }
}

#[test]
fn test_schedule_total_covers_principal() {
    let payments = differentiated::differentiated_payments(dec!(1_000_000), 10, dec!(10)).unwrap();
    let total: Decimal = payments.iter().sum();
    assert_eq!(total, dec!(1_045_837));
}

// ===========================================================================
// Reference values from exact rational evaluation of each formula
// ===========================================================================

#[test]
fn test_differentiated_matches_exact_values() {
    // (principal, periods, annual %, first month, last month, overpayment)
    let cases = [
        (dec!(1_000_000), 12u32, dec!(20), dec!(100_000), dec!(84_723), dec!(108_339)),
        (dec!(100_000), 12, dec!(5.6), dec!(8_800), dec!(8_373), dec!(3_039)),
        (dec!(240_000), 12, dec!(3.5), dec!(20_700), dec!(20_059), dec!(4_554)),
        (dec!(360_000), 24, dec!(20), dec!(21_000), dec!(15_250), dec!(75_000)),
        (dec!(600_000), 12, dec!(5.6), dec!(52_800), dec!(50_234), dec!(18_204)),
        (dec!(500_000), 8, dec!(7.8), dec!(65_750), dec!(62_907), dec!(14_628)),
        (dec!(1_000_000), 10, dec!(10), dec!(108_334), dec!(100_834), dec!(45_837)),
    ];

    for (principal, periods, annual, first, last, overpaid) in cases {
        let payments = differentiated::differentiated_payments(principal, periods, annual).unwrap();
        let total: Decimal = payments.iter().sum();
        let label = format!("{principal}/{periods}/{annual}");

        assert_eq!(payments.first().copied(), Some(first), "{label}: first month");
        assert_eq!(payments.last().copied(), Some(last), "{label}: last month");
        assert_eq!(total - principal, overpaid, "{label}: overpayment");
    }
}

#[test]
fn test_annuity_payment_matches_exact_values() {
    // (principal, periods, annual %, payment)
    let cases = [
        (dec!(1_000_000), 12u32, dec!(20), dec!(92_635)),
        (dec!(100_000), 12, dec!(5.6), dec!(8_589)),
        (dec!(240_000), 36, dec!(3.5), dec!(7_033)),
        (dec!(350_000), 180, dec!(6.25), dec!(3_001)),
        (dec!(1_000_000), 60, dec!(10), dec!(21_248)),
        (dec!(75_000), 1, dec!(20), dec!(76_250)),
        (dec!(60_000), 1, dec!(5.6), dec!(60_280)),
    ];

    for (principal, periods, annual, expected) in cases {
        let i = nominal_monthly_rate(annual).unwrap();
        let payment = annuity::annuity_payment(principal, periods, i).unwrap();
        assert_eq!(payment, expected, "{principal}/{periods}/{annual}");
    }
}

#[test]
fn test_loan_principal_matches_exact_values() {
    // (payment, periods, annual %, principal)
    let cases = [
        (dec!(8_722), 120u32, dec!(5.6), dec!(800_019)),
        (dec!(1_500), 360, dec!(3.5), dec!(334_043)),
        (dec!(20_000), 12, dec!(20), dec!(215_903)),
        (dec!(76_250), 1, dec!(20), dec!(75_000)),
        (dec!(61), 1, dec!(20), dec!(60)),
    ];

    for (payment, periods, annual, expected) in cases {
        let i = nominal_monthly_rate(annual).unwrap();
        let principal = annuity::loan_principal(payment, periods, i).unwrap();
        assert_eq!(principal, expected, "{payment}/{periods}/{annual}");
    }
}
