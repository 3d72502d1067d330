//! Properties that must hold across the whole income range, exercised
//! through the public API only.

use std::thread;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::{FinancialProfile, Regime, TaxCalculator, TaxInput, compute_tax, suggest};

fn incomes(
    upto: i64,
    step: i64,
) -> impl Iterator<Item = Decimal> {
    (0..=upto / step).map(move |i| Decimal::from(i * step))
}

#[test]
fn new_regime_owes_nothing_up_to_twelve_lakh_taxable() {
    for income in incomes(1_200_000, 5_000) {
        assert_eq!(compute_tax(&TaxInput::new(income, Regime::New)), 0, "income {income}");
    }
}

#[test]
fn old_regime_owes_nothing_up_to_five_lakh_below_sixty() {
    for age in [18, 30, 59] {
        for income in incomes(500_000, 5_000) {
            let input = TaxInput::new(income, Regime::Old).with_age(age);
            assert_eq!(compute_tax(&input), 0, "income {income}, age {age}");
        }
    }
}

#[test]
fn marginal_relief_caps_tax_at_excess_over_rebate_limit() {
    let breakdown = TaxCalculator::breakdown(&TaxInput::new(dec!(1325000), Regime::New));

    assert_eq!(breakdown.taxable_income, dec!(1250000));
    assert_eq!(breakdown.income_tax, breakdown.slab_tax.min(dec!(50000)));
}

#[test]
fn relief_boundaries() {
    assert_eq!(compute_tax(&TaxInput::new(dec!(1275000), Regime::New)), 0);

    let above = TaxCalculator::breakdown(&TaxInput::new(dec!(1350001), Regime::New));
    assert_eq!(above.income_tax, above.slab_tax);
}

#[test]
fn tax_is_monotonic_in_income() {
    let deduction_sets = [
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        (dec!(150000), dec!(25000), dec!(200000)),
        (dec!(80000), dec!(60000), dec!(0)),
    ];

    for regime in [Regime::New, Regime::Old] {
        for age in [30, 65, 85] {
            for (c80, d80, home) in deduction_sets {
                let mut previous = 0;
                for income in incomes(6_000_000, 7_500) {
                    let input = TaxInput::new(income, regime)
                        .with_age(age)
                        .with_investments_80c(c80)
                        .with_medical_80d(d80)
                        .with_housing_loan_interest(home);
                    let tax = compute_tax(&input);
                    assert!(
                        tax >= previous,
                        "{regime} age {age}: tax fell from {previous} to {tax} at {income}"
                    );
                    previous = tax;
                }
            }
        }
    }
}

#[test]
fn monotonic_across_surcharge_thresholds() {
    for regime in [Regime::New, Regime::Old] {
        let mut previous = 0;
        for income in [
            dec!(5000000),
            dec!(5075001),
            dec!(10050000),
            dec!(10100000),
            dec!(20100000),
            dec!(50100000),
            dec!(50200000),
            dec!(90000000),
        ] {
            let tax = compute_tax(&TaxInput::new(income, regime));
            assert!(tax >= previous, "{regime}: {tax} < {previous} at {income}");
            previous = tax;
        }
    }
}

#[test]
fn calculator_and_advisor_are_safe_to_share_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let income = Decimal::from(900_000 + i * 250_000);
                let profile = FinancialProfile {
                    total_income: income,
                    regime: if i % 2 == 0 { Regime::New } else { Regime::Old },
                    ..FinancialProfile::default()
                };
                (
                    compute_tax(&TaxInput::new(income, Regime::Old)),
                    suggest(&profile),
                )
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (tax, advice) = handle.join().expect("worker thread panicked");
        let income = Decimal::from(900_000 + i as i64 * 250_000);
        assert_eq!(tax, compute_tax(&TaxInput::new(income, Regime::Old)));
        assert!(!advice.is_empty());
    }
}
