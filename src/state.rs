use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::credit::annuity::{
    annuity_from_period, annuity_from_repayment_rate, period_from_annuity,
    repayment_rate_from_annuity,
};
use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};

/// repayment plan of a loan.
///
/// annuity, repayment rate and period are linked: two of them determine the
/// third. `annuity == principal * (repayment_rate + interest_rate)` holds after
/// every constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationState {
    pub annuity: Money,
    pub repayment_rate: Rate,
    pub period: u32,
}

impl AmortizationState {
    /// plan that repays `principal` in exactly `period` periods
    pub fn from_period(principal: Money, interest_rate: Rate, period: u32) -> Result<Self> {
        let annuity = annuity_from_period(principal, interest_rate, period)?;
        let repayment_rate = repayment_rate_from_annuity(principal, interest_rate, annuity)?;

        Ok(Self {
            annuity,
            repayment_rate,
            period,
        })
    }

    /// plan for a fixed annuity
    pub fn from_annuity(principal: Money, interest_rate: Rate, annuity: Money) -> Result<Self> {
        let repayment_rate = repayment_rate_from_annuity(principal, interest_rate, annuity)?;
        let period = round_period(period_from_annuity(principal, annuity, interest_rate)?)?;

        Ok(Self {
            annuity,
            repayment_rate,
            period,
        })
    }

    /// plan for a fixed initial repayment rate
    pub fn from_repayment_rate(principal: Money, interest_rate: Rate, repayment_rate: Rate) -> Result<Self> {
        let annuity = annuity_from_repayment_rate(principal, interest_rate, repayment_rate);
        let period = round_period(period_from_annuity(principal, annuity, interest_rate)?)?;

        Ok(Self {
            annuity,
            repayment_rate,
            period,
        })
    }

    /// check the annuity against the linear relation, within a cent
    pub fn is_consistent(&self, principal: Money, interest_rate: Rate) -> bool {
        let expected = annuity_from_repayment_rate(principal, interest_rate, self.repayment_rate);
        (expected - self.annuity).abs() < Money::from_cents(1)
    }
}

/// round a fractional period count to whole periods, half to even
pub(crate) fn round_period(period: Decimal) -> Result<u32> {
    let rounded = period.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    rounded.to_u32().ok_or_else(|| ImmoError::CalculationError {
        message: format!("period {} is not a whole number of periods", period),
    })
}
