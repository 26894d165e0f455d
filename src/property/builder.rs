use crate::config::{PropertyConfig, TaxRates};
use crate::decimal::Rate;
use crate::errors::{ImmoError, Result};
use crate::mortgage::Mortgage;
use crate::property::evaluation::Immo;
use crate::property::tax::BuyTaxTable;
use crate::types::Financing;

/// builds a property evaluation from input data and a financing choice
#[derive(Debug, Clone, Default)]
pub struct PropertyBuilder {
    config: Option<PropertyConfig>,
    interest_rate: Option<Rate>,
    financing: Option<Financing>,
    buy_tax: Option<BuyTaxTable>,
    tax_rates: Option<TaxRates>,
}

impl PropertyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: PropertyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// interest rate per planning period
    pub fn interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn financing(mut self, financing: Financing) -> Self {
        self.financing = Some(financing);
        self
    }

    /// buy tax table used when the config leaves the rate open
    pub fn buy_tax_table(mut self, table: BuyTaxTable) -> Self {
        self.buy_tax = Some(table);
        self
    }

    pub fn tax_rates(mut self, tax_rates: TaxRates) -> Self {
        self.tax_rates = Some(tax_rates);
        self
    }

    pub fn build(self) -> Result<Immo> {
        let config = self.config.ok_or(ImmoError::InvalidConfiguration {
            message: "property config is required".to_string(),
        })?;
        let interest_rate = self.interest_rate.ok_or(ImmoError::InvalidConfiguration {
            message: "interest rate is required".to_string(),
        })?;
        let financing = self.financing.ok_or(ImmoError::InvalidConfiguration {
            message: "financing choice is required".to_string(),
        })?;

        let buy_tax = self.buy_tax.unwrap_or_default();
        let base_cost = config.base_cost.to_base_cost(&buy_tax);
        let cash_flow = config.cash_flow.to_cash_flow();

        let principal = base_cost.loan();
        let mortgage = match financing {
            Financing::RepaymentRate(repayment_rate) => {
                Mortgage::from_repayment_rate(principal, interest_rate, repayment_rate)?
            }
            Financing::Annuity(annuity) => Mortgage::from_annuity(principal, interest_rate, annuity)?,
            Financing::Period(period) => Mortgage::from_period(principal, interest_rate, period)?,
        };

        log::debug!(
            "planned loan of {} at {}: annuity {} over {} periods",
            principal,
            interest_rate,
            mortgage.annuity(),
            mortgage.period()
        );

        Ok(Immo::new(
            config.details,
            base_cost,
            cash_flow,
            mortgage,
            self.tax_rates.unwrap_or_default(),
        ))
    }
}
