use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};
use crate::property::tax::BuyTaxTable;

/// one line of the purchase cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub label: String,
    pub total: Money,
    pub rate: Option<Rate>,
}

/// purchase costs of a property.
///
/// incidental costs are stored as rates against the price; amounts are
/// derived on read. Loan and equity are shares of the total and always sum
/// to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCost {
    price: Money,
    modernisation: Money,
    property_buy_tax_rate: Rate,
    agent_rate: Rate,
    notary_rate: Rate,
    land_registry_rate: Rate,
    equity_rate: Rate,
    loan_rate: Rate,
}

impl BaseCost {
    pub const DEFAULT_AGENT_RATE: Rate = Rate::from_decimal(dec!(0.0357));
    pub const DEFAULT_NOTARY_RATE: Rate = Rate::from_decimal(dec!(0.015));
    pub const DEFAULT_LAND_REGISTRY_RATE: Rate = Rate::from_decimal(dec!(0.005));
    pub const DEFAULT_EQUITY_RATE: Rate = Rate::from_decimal(dec!(0.2));

    /// default cost structure for `price`, buy tax at the median of the german states
    pub fn new(price: Money) -> Self {
        Self::with_buy_tax_rate(price, BuyTaxTable::germany().median())
    }

    pub fn with_buy_tax_rate(price: Money, property_buy_tax_rate: Rate) -> Self {
        Self {
            price,
            modernisation: Money::ZERO,
            property_buy_tax_rate,
            agent_rate: Self::DEFAULT_AGENT_RATE,
            notary_rate: Self::DEFAULT_NOTARY_RATE,
            land_registry_rate: Self::DEFAULT_LAND_REGISTRY_RATE,
            equity_rate: Self::DEFAULT_EQUITY_RATE,
            loan_rate: Self::DEFAULT_EQUITY_RATE.complement(),
        }
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn modernisation(&self) -> Money {
        self.modernisation
    }

    pub fn property_buy_tax_rate(&self) -> Rate {
        self.property_buy_tax_rate
    }

    pub fn agent_rate(&self) -> Rate {
        self.agent_rate
    }

    pub fn notary_rate(&self) -> Rate {
        self.notary_rate
    }

    pub fn land_registry_rate(&self) -> Rate {
        self.land_registry_rate
    }

    pub fn equity_rate(&self) -> Rate {
        self.equity_rate
    }

    pub fn loan_rate(&self) -> Rate {
        self.loan_rate
    }

    pub fn property_buy_tax(&self) -> Money {
        self.price.apply_rate(self.property_buy_tax_rate).round_cents()
    }

    pub fn agent(&self) -> Money {
        self.price.apply_rate(self.agent_rate).round_cents()
    }

    pub fn notary(&self) -> Money {
        self.price.apply_rate(self.notary_rate).round_cents()
    }

    pub fn land_registry(&self) -> Money {
        self.price.apply_rate(self.land_registry_rate).round_cents()
    }

    /// combined rate of all incidental costs
    pub fn extras_rate(&self) -> Rate {
        Rate::from_decimal(
            self.property_buy_tax_rate.as_decimal()
                + self.agent_rate.as_decimal()
                + self.notary_rate.as_decimal()
                + self.land_registry_rate.as_decimal(),
        )
    }

    pub fn extras(&self) -> Money {
        self.price.apply_rate(self.extras_rate()).round_cents()
    }

    /// price plus modernisation plus incidental costs
    pub fn total(&self) -> Money {
        (self.price + self.modernisation + self.extras()).round_cents()
    }

    pub fn equity(&self) -> Money {
        self.total().apply_rate(self.equity_rate).round_cents()
    }

    pub fn loan(&self) -> Money {
        self.total().apply_rate(self.loan_rate).round_cents()
    }

    pub fn set_price(&mut self, price: Money) {
        self.price = clamp_amount(price, "price");
    }

    pub fn set_modernisation(&mut self, amount: Money) {
        self.modernisation = clamp_amount(amount, "modernisation");
    }

    pub fn set_property_buy_tax(&mut self, amount: Money) -> Result<()> {
        self.property_buy_tax_rate = self.rate_of_price(amount, "property buy tax")?;
        Ok(())
    }

    pub fn set_property_buy_tax_rate(&mut self, rate: Rate) {
        self.property_buy_tax_rate = clamp_rate(rate, "property buy tax rate");
    }

    pub fn set_agent(&mut self, amount: Money) -> Result<()> {
        self.agent_rate = self.rate_of_price(amount, "agent")?;
        Ok(())
    }

    pub fn set_agent_rate(&mut self, rate: Rate) {
        self.agent_rate = clamp_rate(rate, "agent rate");
    }

    pub fn set_notary(&mut self, amount: Money) -> Result<()> {
        self.notary_rate = self.rate_of_price(amount, "notary")?;
        Ok(())
    }

    pub fn set_notary_rate(&mut self, rate: Rate) {
        self.notary_rate = clamp_rate(rate, "notary rate");
    }

    pub fn set_land_registry(&mut self, amount: Money) -> Result<()> {
        self.land_registry_rate = self.rate_of_price(amount, "land registry")?;
        Ok(())
    }

    pub fn set_land_registry_rate(&mut self, rate: Rate) {
        self.land_registry_rate = clamp_rate(rate, "land registry rate");
    }

    /// loan amount, clamped to [0, total]
    pub fn set_loan(&mut self, amount: Money) -> Result<()> {
        let rate = self.share_of_total(amount, "loan")?;
        self.set_loan_rate(rate);
        Ok(())
    }

    /// loan share, clamped to [0, 1]; equity takes the rest
    pub fn set_loan_rate(&mut self, rate: Rate) {
        let rate = clamp_share(rate, "loan rate");
        self.loan_rate = rate;
        self.equity_rate = rate.complement();
    }

    /// equity amount, clamped to [0, total]
    pub fn set_equity(&mut self, amount: Money) -> Result<()> {
        let rate = self.share_of_total(amount, "equity")?;
        self.set_equity_rate(rate);
        Ok(())
    }

    /// equity share, clamped to [0, 1]; the loan takes the rest
    pub fn set_equity_rate(&mut self, rate: Rate) {
        let rate = clamp_share(rate, "equity rate");
        self.equity_rate = rate;
        self.loan_rate = rate.complement();
    }

    /// breakdown of all cost components
    pub fn summary(&self) -> Vec<CostLine> {
        let line = |label: &str, total: Money, rate: Option<Rate>| CostLine {
            label: label.to_string(),
            total,
            rate,
        };

        vec![
            line("Price", self.price, None),
            line("Modernisation", self.modernisation, None),
            line("Extra Cost", self.extras(), Some(self.extras_rate())),
            line("Land Registry", self.land_registry(), Some(self.land_registry_rate)),
            line("Notary", self.notary(), Some(self.notary_rate)),
            line("Property Buy Tax", self.property_buy_tax(), Some(self.property_buy_tax_rate)),
            line("Agent", self.agent(), Some(self.agent_rate)),
            line("Total", self.total(), None),
            line("Equity", self.equity(), Some(self.equity_rate)),
            line("Loan", self.loan(), Some(self.loan_rate)),
        ]
    }

    fn rate_of_price(&self, amount: Money, what: &str) -> Result<Rate> {
        let amount = clamp_amount(amount, what);
        amount
            .ratio(self.price)
            .map(Rate::from_decimal)
            .ok_or_else(|| ImmoError::division_by_zero(format!("{} rate for a zero price", what)))
    }

    fn share_of_total(&self, amount: Money, what: &str) -> Result<Rate> {
        let total = self.total();
        if total.is_zero() {
            return Err(ImmoError::division_by_zero(format!("{} share of a zero total", what)));
        }

        let mut amount = clamp_amount(amount, what);
        if amount > total {
            log::info!("{} cannot exceed the total of {} and was set to the total", what, total);
            amount = total;
        }

        amount
            .ratio(total)
            .map(Rate::from_decimal)
            .ok_or_else(|| ImmoError::division_by_zero(format!("{} share of a zero total", what)))
    }
}

fn clamp_amount(amount: Money, what: &str) -> Money {
    if amount.is_negative() {
        log::info!("{} cannot be negative and was set to 0", what);
        return Money::ZERO;
    }
    amount
}

fn clamp_rate(rate: Rate, what: &str) -> Rate {
    if rate.is_negative() {
        log::info!("{} cannot be negative and was set to 0", what);
        return Rate::ZERO;
    }
    rate
}

fn clamp_share(rate: Rate, what: &str) -> Rate {
    if rate > Rate::ONE {
        log::info!("{} cannot be greater than 1 and was set to 1", what);
        return Rate::ONE;
    }
    clamp_rate(rate, what)
}
