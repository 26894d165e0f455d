use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::CashFlowPeriod;

const MONTHS: Decimal = dec!(12);

/// one line of the cash-flow summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowLine {
    pub label: String,
    pub monthly: Money,
    pub annually: Money,
}

/// monthly rental cash flow of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    net_cold_rent: Money,
    operating_expenses: Money,
    operating_income: Money,
}

impl CashFlow {
    /// build from monthly amounts; negative inputs are clamped to zero
    pub fn new(net_cold_rent: Money, operating_expenses: Money, operating_income: Money) -> Self {
        let mut cash_flow = Self {
            net_cold_rent: Money::ZERO,
            operating_expenses: Money::ZERO,
            operating_income: Money::ZERO,
        };
        cash_flow.set_net_cold_rent(net_cold_rent);
        cash_flow.set_operating_expenses(operating_expenses);
        cash_flow.set_operating_income(operating_income);
        cash_flow
    }

    /// build from amounts given per `period`
    pub fn from_period(
        period: CashFlowPeriod,
        net_cold_rent: Money,
        operating_expenses: Money,
        operating_income: Money,
    ) -> Self {
        let monthly = |amount: Money| period.to_monthly(amount);
        Self::new(
            monthly(net_cold_rent),
            monthly(operating_expenses),
            monthly(operating_income),
        )
    }

    pub fn net_cold_rent(&self) -> Money {
        self.net_cold_rent
    }

    pub fn operating_expenses(&self) -> Money {
        self.operating_expenses
    }

    pub fn operating_income(&self) -> Money {
        self.operating_income
    }

    /// running cost not covered by operating income
    pub fn net_operating_cost(&self) -> Money {
        self.operating_expenses - self.operating_income
    }

    pub fn total_annually(&self) -> Money {
        (self.net_cold_rent + self.operating_income) * MONTHS
    }

    /// monthly surplus after running cost
    pub fn net(&self) -> Money {
        self.net_cold_rent - self.net_operating_cost()
    }

    pub fn net_annually(&self) -> Money {
        self.net() * MONTHS
    }

    pub fn set_net_cold_rent(&mut self, amount: Money) {
        self.net_cold_rent = clamp(amount, "net cold rent");
    }

    pub fn set_operating_income(&mut self, amount: Money) {
        self.operating_income = clamp(amount, "operating income");
    }

    pub fn set_operating_expenses(&mut self, amount: Money) {
        self.operating_expenses = clamp(amount, "operating expenses");
    }

    /// monthly and annual breakdown; `annuity` is the annual debt service and
    /// its line is omitted when zero
    pub fn summary(&self, annuity: Money) -> Vec<CashFlowLine> {
        let line = |label: &str, monthly: Money, annually: Money| CashFlowLine {
            label: label.to_string(),
            monthly,
            annually,
        };

        let monthly_annuity = annuity / MONTHS;
        let mut lines = vec![
            line("Net Cold Rent", self.net_cold_rent, self.net_cold_rent * MONTHS),
            line(
                "Net Operating Cost",
                -self.net_operating_cost(),
                -self.net_operating_cost() * MONTHS,
            ),
            line("Operating Income", self.operating_income, self.operating_income * MONTHS),
            line(
                "Operating Expenses",
                -self.operating_expenses,
                -self.operating_expenses * MONTHS,
            ),
        ];
        if !annuity.is_zero() {
            lines.push(line("Annuity", (-monthly_annuity).round_cents(), (-annuity).round_cents()));
        }
        lines.push(line(
            "Total",
            (self.net() - monthly_annuity).round_cents(),
            (self.net_annually() - annuity).round_cents(),
        ));
        lines
    }
}

fn clamp(amount: Money, what: &str) -> Money {
    if amount.is_negative() {
        log::info!("{} cannot be negative and was set to 0", what);
        return Money::ZERO;
    }
    amount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cash_flow() -> CashFlow {
        CashFlow::new(Money::from_major(900), Money::from_major(250), Money::from_major(150))
    }

    #[test]
    fn test_derived_values() {
        let cf = cash_flow();
        assert_eq!(cf.net_operating_cost(), Money::from_major(100));
        assert_eq!(cf.net(), Money::from_major(800));
        assert_eq!(cf.net_annually(), Money::from_major(9_600));
        assert_eq!(cf.total_annually(), Money::from_major(12_600));
    }

    #[test]
    fn test_income_above_expenses() {
        let cf = CashFlow::new(Money::from_major(900), Money::from_major(100), Money::from_major(150));
        assert_eq!(cf.net_operating_cost(), Money::from_major(-50));
        assert_eq!(cf.net(), Money::from_major(950));
    }

    #[test]
    fn test_setters_clamp_negative() {
        let mut cf = cash_flow();
        cf.set_net_cold_rent(Money::from_major(-1));
        cf.set_operating_income(Money::from_major(-1));
        cf.set_operating_expenses(Money::from_major(-1));
        assert_eq!(cf.net_cold_rent(), Money::ZERO);
        assert_eq!(cf.operating_income(), Money::ZERO);
        assert_eq!(cf.operating_expenses(), Money::ZERO);

        let clamped = CashFlow::new(Money::from_major(-900), Money::ZERO, Money::ZERO);
        assert_eq!(clamped.net_cold_rent(), Money::ZERO);
    }

    #[test]
    fn test_from_annual_period() {
        let cf = CashFlow::from_period(
            CashFlowPeriod::Annually,
            Money::from_major(10_800),
            Money::from_major(3_000),
            Money::from_major(1_800),
        );
        assert_eq!(cf.net_cold_rent(), Money::from_major(900));
        assert_eq!(cf.operating_expenses(), Money::from_major(250));
        assert_eq!(cf.operating_income(), Money::from_major(150));

        let monthly = CashFlow::from_period(
            CashFlowPeriod::Monthly,
            Money::from_major(900),
            Money::from_major(250),
            Money::from_major(150),
        );
        assert_eq!(monthly, cf);
    }

    #[test]
    fn test_summary_with_annuity() {
        let lines = cash_flow().summary(Money::from_major(6_000));
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Net Cold Rent", "Net Operating Cost", "Operating Income", "Operating Expenses", "Annuity", "Total"]
        );

        let annuity = &lines[4];
        assert_eq!(annuity.monthly, Money::from_major(-500));
        assert_eq!(annuity.annually, Money::from_major(-6_000));

        let total = &lines[5];
        assert_eq!(total.monthly, Money::from_major(300));
        assert_eq!(total.annually, Money::from_major(3_600));
    }

    #[test]
    fn test_summary_without_annuity() {
        let lines = cash_flow().summary(Money::ZERO);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.label != "Annuity"));
        assert_eq!(lines[4].annually, Money::from_major(9_600));
    }

    #[test]
    fn test_summary_rounds_annuity() {
        let lines = cash_flow().summary(Money::from_decimal(dec!(1000)));
        assert_eq!(lines[4].monthly, Money::from_decimal(dec!(-83.33)));
    }
}
