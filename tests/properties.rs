//! Property-based tests for the loan formulas and the cost model.
//!
//! Invariants verified:
//! - annuity and period derivations invert each other
//! - annuity and repayment rate derivations invert each other
//! - the last schedule row agrees with the single-balance call
//! - one period with the full principal as payment leaves exactly the interest
//! - loan and equity shares sum to one after any sequence of setters

use immo_loan_rs::{
    amortization_schedule, annuity_from_period, annuity_from_repayment_rate, period_from_annuity,
    remaining_balance, repayment_rate_from_annuity, BaseCost, Money, Rate,
};
use proptest::{prelude::*, test_runner::TestCaseError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fail(e: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(e.to_string())
}

/// principals in whole currency units [1, 2 000 000]
fn principal_strat() -> impl Strategy<Value = Money> {
    (1i64..=2_000_000i64).prop_map(Money::from_major)
}

/// positive rates [0.01%, 15%] in basis points
fn positive_rate_strat() -> impl Strategy<Value = Rate> {
    (1u32..=1_500u32).prop_map(Rate::from_bps)
}

/// rates [0%, 15%] in basis points
fn rate_strat() -> impl Strategy<Value = Rate> {
    (0u32..=1_500u32).prop_map(Rate::from_bps)
}

/// decimals in [-1 000 000, 1 000 000] with up to six fractional digits
fn input_strat() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=1_000_000i64, 0u32..=6u32).prop_map(|(raw, scale)| Decimal::new(raw, scale))
}

#[derive(Debug, Clone)]
enum CostChange {
    Price(Decimal),
    Modernisation(Decimal),
    Agent(Decimal),
    LoanRate(Decimal),
    EquityRate(Decimal),
    Loan(Decimal),
    Equity(Decimal),
}

fn cost_change_strat() -> impl Strategy<Value = CostChange> {
    prop_oneof![
        input_strat().prop_map(CostChange::Price),
        input_strat().prop_map(CostChange::Modernisation),
        input_strat().prop_map(CostChange::Agent),
        input_strat().prop_map(CostChange::LoanRate),
        input_strat().prop_map(CostChange::EquityRate),
        input_strat().prop_map(CostChange::Loan),
        input_strat().prop_map(CostChange::Equity),
    ]
}

fn apply(cost: &mut BaseCost, change: &CostChange) {
    // amount setters fail on a zero price or total and leave the shares alone
    match change {
        CostChange::Price(v) => cost.set_price(Money::from_decimal(*v)),
        CostChange::Modernisation(v) => cost.set_modernisation(Money::from_decimal(*v)),
        CostChange::Agent(v) => {
            let _ = cost.set_agent(Money::from_decimal(*v));
        }
        CostChange::LoanRate(v) => cost.set_loan_rate(Rate::from_decimal(*v)),
        CostChange::EquityRate(v) => cost.set_equity_rate(Rate::from_decimal(*v)),
        CostChange::Loan(v) => {
            let _ = cost.set_loan(Money::from_decimal(*v));
        }
        CostChange::Equity(v) => {
            let _ = cost.set_equity(Money::from_decimal(*v));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn period_roundtrip(
        principal in principal_strat(),
        rate in positive_rate_strat(),
        periods in 1u32..=40u32,
    ) {
        let annuity = annuity_from_period(principal, rate, periods).map_err(fail)?;
        let period = period_from_annuity(principal, annuity, rate).map_err(fail)?;
        prop_assert!((period - Decimal::from(periods)).abs() < dec!(0.000001));
    }

    #[test]
    fn repayment_rate_roundtrip(
        principal in principal_strat(),
        rate in rate_strat(),
        repayment_rate in rate_strat(),
    ) {
        let annuity = annuity_from_repayment_rate(principal, rate, repayment_rate);
        let derived = repayment_rate_from_annuity(principal, rate, annuity).map_err(fail)?;
        prop_assert!((derived.as_decimal() - repayment_rate.as_decimal()).abs() < dec!(0.000000001));
    }

    #[test]
    fn negative_principal_mirrors_annuity(
        principal in principal_strat(),
        rate in rate_strat(),
        periods in 1u32..=40u32,
    ) {
        let positive = annuity_from_period(principal, rate, periods).map_err(fail)?;
        let negative = annuity_from_period(-principal, rate, periods).map_err(fail)?;
        prop_assert!((positive + negative).abs() < Money::from_cents(1));
    }

    #[test]
    fn schedule_ends_at_remaining_balance(
        principal in principal_strat(),
        rate in rate_strat(),
        periods in 0u32..=60u32,
        annuity in (0i64..=200_000i64).prop_map(Money::from_major),
    ) {
        let schedule = amortization_schedule(principal, rate, periods, annuity).map_err(fail)?;
        let balance = remaining_balance(principal, rate, periods, annuity).map_err(fail)?;

        prop_assert_eq!(schedule.rows.len(), periods as usize);
        prop_assert_eq!(schedule.final_balance(), balance);
        for pair in schedule.rows.windows(2) {
            prop_assert_eq!(pair[0].balance_after, pair[1].balance_before);
        }
    }

    #[test]
    fn single_full_payment_leaves_interest(
        principal in principal_strat(),
        rate in rate_strat(),
    ) {
        let balance = remaining_balance(principal, rate, 1, principal).map_err(fail)?;
        prop_assert_eq!(balance, principal.apply_rate(rate).round_cents());
    }

    #[test]
    fn loan_and_equity_sum_to_one(
        price in (1i64..=2_000_000i64).prop_map(Money::from_major),
        changes in prop::collection::vec(cost_change_strat(), 1..20),
    ) {
        let mut cost = BaseCost::new(price);
        for change in &changes {
            apply(&mut cost, change);
            prop_assert_eq!(
                cost.loan_rate().as_decimal() + cost.equity_rate().as_decimal(),
                Decimal::ONE
            );
            prop_assert!(cost.loan_rate() >= Rate::ZERO && cost.loan_rate() <= Rate::ONE);
        }
    }
}
