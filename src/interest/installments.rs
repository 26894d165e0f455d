use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{compound_factor, Money};
use crate::errors::{ImmoError, Result};

/// installment input: a single amount or an explicit series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstallmentRate {
    Amount(Money),
    Series(Vec<Money>),
}

impl InstallmentRate {
    fn amount(&self, policy: &str) -> Result<Money> {
        match self {
            InstallmentRate::Amount(amount) => Ok(*amount),
            InstallmentRate::Series(_) => Err(ImmoError::InvalidInstallmentRate {
                message: format!("{} installments need a single amount, not a series", policy),
            }),
        }
    }
}

impl From<Money> for InstallmentRate {
    fn from(amount: Money) -> Self {
        InstallmentRate::Amount(amount)
    }
}

impl From<Vec<Money>> for InstallmentRate {
    fn from(series: Vec<Money>) -> Self {
        InstallmentRate::Series(series)
    }
}

/// installment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstallmentType {
    /// same amount every period
    Fixed,
    /// amount grows geometrically by `growth_factor` per period
    Dynamic { growth_factor: Decimal },
    /// caller supplies every amount
    Custom,
}

impl InstallmentType {
    /// resolve a policy by name; `growth_factor` is only read for "dynamic"
    pub fn from_name(name: &str, growth_factor: Option<Decimal>) -> Result<Self> {
        match name {
            "fixed" => Ok(InstallmentType::Fixed),
            "dynamic" => {
                let growth_factor = growth_factor.ok_or(ImmoError::InvalidConfiguration {
                    message: "dynamic installments require a growth factor".to_string(),
                })?;
                Ok(InstallmentType::Dynamic { growth_factor })
            }
            "custom" => Ok(InstallmentType::Custom),
            _ => Err(ImmoError::UnknownInstallmentType {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InstallmentType::Fixed => "fixed",
            InstallmentType::Dynamic { .. } => "dynamic",
            InstallmentType::Custom => "custom",
        }
    }
}

/// `periods` repetitions of one amount
pub fn fixed_installment(periods: u32, rate: &InstallmentRate) -> Result<Vec<Money>> {
    let amount = rate.amount("fixed")?;
    Ok(vec![amount; periods as usize])
}

/// geometric sequence `rate * (1 + growth_factor)^i` for i in [0, periods)
pub fn dynamic_installment(
    periods: u32,
    rate: &InstallmentRate,
    growth_factor: Decimal,
) -> Result<Vec<Money>> {
    let amount = rate.amount("dynamic")?;
    (0..periods)
        .map(|i| {
            compound_factor(growth_factor, i)
                .and_then(|factor| amount.checked_mul(factor))
                .ok_or_else(|| ImmoError::overflow(format!("installment {} of a dynamic series", i)))
        })
        .collect()
}

/// caller-supplied series, which must cover exactly `periods` entries
pub fn custom_installment(periods: u32, rate: &InstallmentRate) -> Result<Vec<Money>> {
    let series = match rate {
        InstallmentRate::Series(series) => series.clone(),
        // a single amount is a series of one
        InstallmentRate::Amount(amount) => vec![*amount],
    };

    if series.len() != periods as usize {
        return Err(ImmoError::InstallmentLengthMismatch {
            expected: periods,
            found: series.len(),
        });
    }
    Ok(series)
}

/// generate installments under the given policy
pub fn create_installment(
    periods: u32,
    rate: &InstallmentRate,
    installment_type: InstallmentType,
) -> Result<Vec<Money>> {
    match installment_type {
        InstallmentType::Fixed => fixed_installment(periods, rate),
        InstallmentType::Dynamic { growth_factor } => {
            dynamic_installment(periods, rate, growth_factor)
        }
        InstallmentType::Custom => custom_installment(periods, rate),
    }
}

/// installment input together with its policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub rate: InstallmentRate,
    pub installment_type: InstallmentType,
}

impl InstallmentPlan {
    pub fn new(rate: impl Into<InstallmentRate>, installment_type: InstallmentType) -> Self {
        Self {
            rate: rate.into(),
            installment_type,
        }
    }

    pub fn fixed(amount: Money) -> Self {
        Self::new(amount, InstallmentType::Fixed)
    }

    pub fn dynamic(amount: Money, growth_factor: Decimal) -> Self {
        Self::new(amount, InstallmentType::Dynamic { growth_factor })
    }

    pub fn custom(series: Vec<Money>) -> Self {
        Self::new(series, InstallmentType::Custom)
    }

    /// resolve from a policy name, as received from external input
    pub fn from_name(
        name: &str,
        rate: impl Into<InstallmentRate>,
        growth_factor: Option<Decimal>,
    ) -> Result<Self> {
        Ok(Self::new(rate, InstallmentType::from_name(name, growth_factor)?))
    }

    pub fn generate(&self, periods: u32) -> Result<Vec<Money>> {
        create_installment(periods, &self.rate, self.installment_type)
    }
}
