/// serialization support for property evaluations
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::decimal::Money;
use crate::mortgage::MortgageSummary;
use crate::property::cash_flow::CashFlowLine;
use crate::property::costs::CostLine;
use crate::property::details::Details;
use crate::property::evaluation::Immo;
use crate::types::PropertyId;

/// key figures of an evaluation, rates in percent rounded to two decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub gross_rental_yield: Decimal,
    pub net_rental_yield: Decimal,
    pub multiplication_factor: Decimal,
    pub return_on_equity: Decimal,
    pub ten_year_net_capital_gain: Money,
    pub ten_year_roe: Decimal,
}

/// price and rent relative to living space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEffectiveness {
    pub living_space: Decimal,
    pub price_per_sqm: Money,
    pub rent_per_sqm: Money,
}

/// serializable view of a property evaluation
#[derive(Debug, Serialize, Deserialize)]
pub struct PropertyView {
    pub id: PropertyId,
    pub details: Details,
    pub base_cost: Vec<CostLine>,
    pub cash_flow: Vec<CashFlowLine>,
    pub mortgage: MortgageSummary,
    pub cost_effectiveness: CostEffectiveness,
    pub evaluation: Evaluation,
}

impl PropertyView {
    pub fn from_property(immo: &Immo) -> Result<Self> {
        Ok(PropertyView {
            id: immo.id(),
            details: immo.details().clone(),
            base_cost: immo.base_cost().summary(),
            cash_flow: immo.cash_flow().summary(immo.mortgage().annuity()),
            mortgage: immo.mortgage().summary()?,
            cost_effectiveness: immo.cost_effectiveness()?,
            evaluation: immo.evaluate()?,
        })
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Evaluation {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
