use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};

/// unique identifier for an evaluated property
pub type PropertyId = Uuid;

/// period in which cash-flow inputs are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowPeriod {
    #[default]
    Monthly,
    Annually,
}

impl CashFlowPeriod {
    /// convert an amount quoted in this period to a monthly amount
    pub fn to_monthly(self, amount: Money) -> Money {
        match self {
            CashFlowPeriod::Monthly => amount,
            CashFlowPeriod::Annually => amount / dec!(12),
        }
    }
}

/// which of the linked loan figures is fixed when planning a mortgage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum Financing {
    /// initial repayment rate per period
    RepaymentRate(Rate),
    /// debt service per period
    Annuity(Money),
    /// number of periods until repayment
    Period(u32),
}

/// field of a property evaluation that can be changed after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateField {
    // base cost
    Price,
    Modernisation,
    Agent,
    AgentRate,
    PropertyBuyTax,
    PropertyBuyTaxRate,
    Notary,
    NotaryRate,
    LandRegistry,
    LandRegistryRate,
    Equity,
    EquityRate,
    Loan,
    LoanRate,

    // cash flow
    NetColdRentMonthly,
    NetColdRentAnnually,
    OperatingIncomeMonthly,
    OperatingIncomeAnnually,
    OperatingExpensesMonthly,
    OperatingExpensesAnnually,
    AnnuityMonthly,
    AnnuityAnnually,

    // mortgage
    InterestRate,
    MortgageAnnuity,
    RepayTimeTotal,
    RepaymentRate,

    // cost effectiveness
    LivingSpace,
    PricePerSqm,
    RentPerSqm,
}

/// (card, field, attribute) keys used by form-style callers
const UPDATE_KEYS: &[(UpdateField, (&str, &str, &str))] = &[
    (UpdateField::Price, ("base_cost", "price", "total")),
    (UpdateField::Modernisation, ("base_cost", "modernisation", "total")),
    (UpdateField::Agent, ("base_cost", "agent", "total")),
    (UpdateField::AgentRate, ("base_cost", "agent", "rate")),
    (UpdateField::PropertyBuyTax, ("base_cost", "property buy tax", "total")),
    (UpdateField::PropertyBuyTaxRate, ("base_cost", "property buy tax", "rate")),
    (UpdateField::Notary, ("base_cost", "notary", "total")),
    (UpdateField::NotaryRate, ("base_cost", "notary", "rate")),
    (UpdateField::LandRegistry, ("base_cost", "land registry", "total")),
    (UpdateField::LandRegistryRate, ("base_cost", "land registry", "rate")),
    (UpdateField::Equity, ("base_cost", "proprietary capital", "total")),
    (UpdateField::EquityRate, ("base_cost", "proprietary capital", "rate")),
    (UpdateField::Loan, ("base_cost", "loan", "total")),
    (UpdateField::LoanRate, ("base_cost", "loan", "rate")),
    (UpdateField::NetColdRentMonthly, ("cash_flow", "net cold rent", "monthly")),
    (UpdateField::NetColdRentAnnually, ("cash_flow", "net cold rent", "annually")),
    (UpdateField::OperatingIncomeMonthly, ("cash_flow", "operating income", "monthly")),
    (UpdateField::OperatingIncomeAnnually, ("cash_flow", "operating income", "annually")),
    (UpdateField::OperatingExpensesMonthly, ("cash_flow", "operating expenses", "monthly")),
    (UpdateField::OperatingExpensesAnnually, ("cash_flow", "operating expenses", "annually")),
    (UpdateField::AnnuityMonthly, ("cash_flow", "annuity", "monthly")),
    (UpdateField::AnnuityAnnually, ("cash_flow", "annuity", "annually")),
    (UpdateField::InterestRate, ("mortgage", "interest rate", "-")),
    (UpdateField::MortgageAnnuity, ("mortgage", "annuity", "-")),
    (UpdateField::RepayTimeTotal, ("mortgage", "repay time total", "-")),
    (UpdateField::RepaymentRate, ("mortgage", "initial repayment rate", "-")),
    (UpdateField::LivingSpace, ("cost_effectiveness", "living space", "-")),
    (UpdateField::PricePerSqm, ("cost_effectiveness", "price/sqm", "-")),
    (UpdateField::RentPerSqm, ("cost_effectiveness", "net cold rent/sqm", "-")),
];

impl UpdateField {
    /// resolve a (card, field, attribute) triple
    pub fn from_keys(card: &str, field: &str, attribute: &str) -> Result<Self> {
        UPDATE_KEYS
            .iter()
            .find(|(_, keys)| *keys == (card, field, attribute))
            .map(|(update, _)| *update)
            .ok_or_else(|| ImmoError::UnknownUpdateField {
                card: card.to_string(),
                field: field.to_string(),
                attribute: attribute.to_string(),
            })
    }

    /// the (card, field, attribute) triple of this field
    pub fn keys(&self) -> (&'static str, &'static str, &'static str) {
        UPDATE_KEYS
            .iter()
            .find(|(update, _)| update == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(("", "", ""))
    }

    pub fn all() -> impl Iterator<Item = UpdateField> {
        UPDATE_KEYS.iter().map(|(update, _)| *update)
    }
}
