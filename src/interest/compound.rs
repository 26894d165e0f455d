use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};
use crate::interest::installments::InstallmentPlan;

/// accumulated capital after a compounding horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundResult {
    /// capital including interest, rounded to cents
    pub total_with_interest: Money,
    /// starting capital plus all installments paid in
    pub total_contributed: Money,
}

impl CompoundResult {
    /// interest earned on top of the contributions
    pub fn interest(&self) -> Money {
        self.total_with_interest - self.total_contributed
    }
}

/// one sub-horizon of a detailed compounding run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundRow {
    pub period: u32,
    pub contributed: Money,
    pub interest: Money,
    pub total: Money,
}

/// engine for compound growth at a fixed per-period rate
#[derive(Debug, Clone, Copy)]
pub struct CompoundingEngine {
    pub rate: Rate,
}

impl CompoundingEngine {
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// compound a starting capital and an optional installment series.
    ///
    /// installment `i` earns interest for `periods - i` periods, so the first
    /// installment compounds over the whole horizon. An empty slice means no
    /// installments.
    pub fn compound(
        &self,
        principal: Money,
        periods: u32,
        installments: &[Money],
    ) -> Result<CompoundResult> {
        if !installments.is_empty() && installments.len() != periods as usize {
            return Err(ImmoError::InstallmentLengthMismatch {
                expected: periods,
                found: installments.len(),
            });
        }

        let capital = self.accumulate(principal, periods)?;
        let total = installments
            .iter()
            .enumerate()
            .try_fold(capital, |total, (i, installment)| {
                let grown = self.accumulate(*installment, periods - i as u32)?;
                total
                    .checked_add(grown)
                    .ok_or_else(|| ImmoError::overflow("compound total"))
            })?;

        let contributed: Money = installments.iter().sum();

        Ok(CompoundResult {
            total_with_interest: Money::from_decimal(total).round_cents(),
            total_contributed: principal + contributed,
        })
    }

    /// `amount * (1 + rate)^periods`, unrounded
    fn accumulate(&self, amount: Money, periods: u32) -> Result<Decimal> {
        self.rate
            .growth_factor(periods)
            .and_then(|factor| amount.as_decimal().checked_mul(factor))
            .ok_or_else(|| {
                ImmoError::overflow(format!("compounding {} at {} over {} periods", amount, self.rate, periods))
            })
    }

    /// compound with installments generated from a plan
    pub fn compound_with_plan(
        &self,
        principal: Money,
        periods: u32,
        plan: Option<&InstallmentPlan>,
    ) -> Result<CompoundResult> {
        match plan {
            Some(plan) => {
                let installments = plan.generate(periods)?;
                self.compound(principal, periods, &installments)
            }
            None => self.compound(principal, periods, &[]),
        }
    }

    /// one row per sub-horizon 1..=periods, each a full compound calculation
    /// over the first `k` installments of the plan
    pub fn compound_detailed(
        &self,
        principal: Money,
        periods: u32,
        plan: Option<&InstallmentPlan>,
    ) -> Result<Vec<CompoundRow>> {
        let installments = match plan {
            Some(plan) => plan.generate(periods)?,
            None => Vec::new(),
        };

        let mut rows = Vec::with_capacity(periods as usize);
        for k in 1..=periods {
            let horizon: &[Money] = if installments.is_empty() {
                &[]
            } else {
                &installments[..k as usize]
            };
            let result = self.compound(principal, k, horizon)?;
            rows.push(CompoundRow {
                period: k,
                contributed: result.total_contributed,
                interest: result.interest(),
                total: result.total_with_interest,
            });
        }

        Ok(rows)
    }
}

/// compound growth of a starting capital with optional installments
pub fn compound_interest(
    principal: Money,
    rate: Rate,
    periods: u32,
    installments: &[Money],
) -> Result<CompoundResult> {
    CompoundingEngine::new(rate).compound(principal, periods, installments)
}

/// average per-period growth rate turning `start` into `end` over `periods`
pub fn annualized_interest(end: Money, start: Money, periods: u32) -> Result<Rate> {
    if periods == 0 {
        return Err(ImmoError::division_by_zero("annualized interest over zero periods"));
    }
    let growth = end
        .ratio(start)
        .ok_or_else(|| ImmoError::division_by_zero("annualized interest from zero capital"))?;

    let exponent = Decimal::ONE / Decimal::from(periods);
    let root = growth
        .checked_powd(exponent)
        .ok_or_else(|| ImmoError::CalculationError {
            message: format!("cannot take root {} of growth {}", periods, growth),
        })?;

    Ok(Rate::from_decimal(root - Decimal::ONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn close(a: Money, b: Money, tolerance: Decimal) -> bool {
        (a - b).abs().as_decimal() <= tolerance
    }

    #[test]
    fn test_compound_without_installments() {
        let result = compound_interest(
            Money::from_major(1_000),
            Rate::from_percentage(10),
            2,
            &[],
        )
        .unwrap();

        assert_eq!(result.total_with_interest, Money::from_major(1_210));
        assert_eq!(result.total_contributed, Money::from_major(1_000));
        assert_eq!(result.interest(), Money::from_major(210));
    }

    #[test]
    fn test_compound_with_installments() {
        // 1000*1.1^2 + 100*1.1^2 + 100*1.1 = 1210 + 121 + 110
        let installments = vec![Money::from_major(100); 2];
        let result = compound_interest(
            Money::from_major(1_000),
            Rate::from_percentage(10),
            2,
            &installments,
        )
        .unwrap();

        assert_eq!(result.total_with_interest, Money::from_major(1_441));
        assert_eq!(result.total_contributed, Money::from_major(1_200));
    }

    #[test]
    fn test_total_is_rounded_to_cents() {
        let result = compound_interest(
            Money::from_major(1_000),
            Rate::from_decimal(dec!(0.0325)),
            3,
            &[],
        )
        .unwrap();

        // 1000 * 1.0325^3 = 1100.703...
        assert_eq!(result.total_with_interest, Money::from_decimal(dec!(1100.70)));
    }

    #[test]
    fn test_compound_overflow_is_an_error() {
        // doubling a thousand for a hundred periods leaves the decimal range
        let result = compound_interest(Money::from_major(1_000), Rate::ONE, 100, &[]);
        assert!(matches!(result, Err(ImmoError::CalculationError { .. })));

        let installments = vec![Money::from_major(1); 100];
        let result = compound_interest(Money::ZERO, Rate::ONE, 100, &installments);
        assert!(matches!(result, Err(ImmoError::CalculationError { .. })));
    }

    #[test]
    fn test_installment_length_mismatch() {
        let engine = CompoundingEngine::new(Rate::from_percentage(5));
        let result = engine.compound(Money::ZERO, 3, &[Money::from_major(1)]);
        assert!(matches!(
            result,
            Err(ImmoError::InstallmentLengthMismatch { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_compound_with_plan() {
        let engine = CompoundingEngine::new(Rate::from_percentage(10));
        let plan = InstallmentPlan::fixed(Money::from_major(100));

        let with_plan = engine
            .compound_with_plan(Money::from_major(1_000), 2, Some(&plan))
            .unwrap();
        assert_eq!(with_plan.total_with_interest, Money::from_major(1_441));

        let without = engine.compound_with_plan(Money::from_major(1_000), 2, None).unwrap();
        assert_eq!(without.total_with_interest, Money::from_major(1_210));
    }

    #[test]
    fn test_compound_detailed_rows() {
        let engine = CompoundingEngine::new(Rate::from_percentage(10));
        let plan = InstallmentPlan::fixed(Money::from_major(100));
        let rows = engine
            .compound_detailed(Money::from_major(1_000), 3, Some(&plan))
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].period, 1);
        assert_eq!(rows[0].contributed, Money::from_major(1_100));
        assert_eq!(rows[0].total, Money::from_major(1_210));
        assert_eq!(rows[1].total, Money::from_major(1_441));

        // last row equals the single full-horizon calculation
        let full = engine
            .compound_with_plan(Money::from_major(1_000), 3, Some(&plan))
            .unwrap();
        assert_eq!(rows[2].total, full.total_with_interest);
        for row in &rows {
            assert_eq!(row.total, row.contributed + row.interest);
        }
    }

    #[test]
    fn test_compound_detailed_custom_uses_prefix() {
        let engine = CompoundingEngine::new(Rate::ZERO);
        let plan = InstallmentPlan::custom(vec![
            Money::from_major(1),
            Money::from_major(2),
            Money::from_major(3),
        ]);
        let rows = engine.compound_detailed(Money::ZERO, 3, Some(&plan)).unwrap();
        let totals: Vec<Money> = rows.iter().map(|r| r.total).collect();
        assert_eq!(
            totals,
            vec![Money::from_major(1), Money::from_major(3), Money::from_major(6)]
        );
    }

    #[test]
    fn test_annualized_interest() {
        let rate = annualized_interest(Money::from_major(1_210), Money::from_major(1_000), 2).unwrap();
        assert!((rate.as_decimal() - dec!(0.1)).abs() < dec!(0.0000001));

        let flat = annualized_interest(Money::from_major(500), Money::from_major(500), 7).unwrap();
        assert!(flat.as_decimal().abs() < dec!(0.0000001));
    }

    #[test]
    fn test_annualized_interest_zero_inputs() {
        assert!(matches!(
            annualized_interest(Money::from_major(1), Money::ZERO, 1),
            Err(ImmoError::DivisionByZero { .. })
        ));
        assert!(matches!(
            annualized_interest(Money::from_major(1), Money::from_major(1), 0),
            Err(ImmoError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_roundtrip_with_annualized() {
        let start = Money::from_major(10_000);
        let result = compound_interest(start, Rate::from_percentage(4), 10, &[]).unwrap();
        let rate = annualized_interest(result.total_with_interest, start, 10).unwrap();
        assert!(close(
            Money::from_decimal(rate.as_decimal()),
            Money::from_decimal(dec!(0.04)),
            dec!(0.000001)
        ));
    }
}
