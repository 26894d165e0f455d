use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::property::cash_flow::CashFlow;
use crate::property::costs::BaseCost;
use crate::property::details::Details;
use crate::property::tax::BuyTaxTable;
use crate::types::CashFlowPeriod;

/// input data of a property evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyConfig {
    pub details: Details,
    pub base_cost: BaseCostConfig,
    #[serde(default)]
    pub cash_flow: CashFlowConfig,
}

/// purchase cost input; omitted rates take the market defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCostConfig {
    pub price: Money,
    #[serde(default)]
    pub modernisation: Money,
    /// `None` uses the median of the buy tax table
    #[serde(default)]
    pub property_buy_tax_rate: Option<Rate>,
    #[serde(default = "default_agent_rate")]
    pub agent_rate: Rate,
    #[serde(default = "default_notary_rate")]
    pub notary_rate: Rate,
    #[serde(default = "default_land_registry_rate")]
    pub land_registry_rate: Rate,
    #[serde(default = "default_equity_rate")]
    pub equity_rate: Rate,
    /// informational; the loan share is always `1 - equity_rate`
    #[serde(default)]
    pub loan_rate: Option<Rate>,
}

fn default_agent_rate() -> Rate {
    BaseCost::DEFAULT_AGENT_RATE
}

fn default_notary_rate() -> Rate {
    BaseCost::DEFAULT_NOTARY_RATE
}

fn default_land_registry_rate() -> Rate {
    BaseCost::DEFAULT_LAND_REGISTRY_RATE
}

fn default_equity_rate() -> Rate {
    BaseCost::DEFAULT_EQUITY_RATE
}

impl BaseCostConfig {
    pub fn new(price: Money) -> Self {
        Self {
            price,
            modernisation: Money::ZERO,
            property_buy_tax_rate: None,
            agent_rate: default_agent_rate(),
            notary_rate: default_notary_rate(),
            land_registry_rate: default_land_registry_rate(),
            equity_rate: default_equity_rate(),
            loan_rate: None,
        }
    }

    /// build the cost model, normalizing the loan share to the equity share
    pub fn to_base_cost(&self, buy_tax: &BuyTaxTable) -> BaseCost {
        let buy_tax_rate = self.property_buy_tax_rate.unwrap_or_else(|| buy_tax.median());

        let mut cost = BaseCost::with_buy_tax_rate(Money::ZERO, Rate::ZERO);
        cost.set_price(self.price);
        cost.set_modernisation(self.modernisation);
        cost.set_property_buy_tax_rate(buy_tax_rate);
        cost.set_agent_rate(self.agent_rate);
        cost.set_notary_rate(self.notary_rate);
        cost.set_land_registry_rate(self.land_registry_rate);
        cost.set_equity_rate(self.equity_rate);

        if let Some(loan_rate) = self.loan_rate {
            if loan_rate != cost.loan_rate() {
                log::warn!(
                    "loan rate {} does not complement equity rate {}, using {}",
                    loan_rate,
                    cost.equity_rate(),
                    cost.loan_rate()
                );
            }
        }

        cost
    }
}

/// rental cash-flow input
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowConfig {
    #[serde(default)]
    pub period: CashFlowPeriod,
    #[serde(default)]
    pub net_cold_rent: Money,
    #[serde(default)]
    pub operating_expenses: Money,
    #[serde(default)]
    pub operating_income: Money,
}

impl CashFlowConfig {
    pub fn to_cash_flow(&self) -> CashFlow {
        CashFlow::from_period(
            self.period,
            self.net_cold_rent,
            self.operating_expenses,
            self.operating_income,
        )
    }
}

/// tax rates applied to rental income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    /// personal income tax rate
    pub personal: Rate,
    /// annual depreciation of the purchase price
    pub depreciation: Rate,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            personal: Rate::from_decimal(dec!(0.35)),
            depreciation: Rate::from_decimal(dec!(0.02)),
        }
    }
}
