use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};

/// one period of an annuity amortization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub balance_before: Money,
    pub interest_portion: Money,
    pub repayment_portion: Money,
    pub balance_after: Money,
}

/// full period-by-period debt trajectory of a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub interest_rate: Rate,
    pub annuity: Money,
    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    /// build the schedule for `periods` periods of constant `annuity`
    pub fn generate(principal: Money, interest_rate: Rate, periods: u32, annuity: Money) -> Result<Self> {
        let mut rows = Vec::with_capacity(periods as usize);
        amortize(principal, interest_rate, periods, annuity, |row| rows.push(row))?;

        Ok(Self {
            principal,
            interest_rate,
            annuity,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// get row for a specific period (1-based)
    pub fn get_row(&self, period: u32) -> Option<&ScheduleRow> {
        if period == 0 {
            return None;
        }
        self.rows.get((period - 1) as usize)
    }

    /// remaining balance after the given period
    pub fn balance_after_period(&self, period: u32) -> Money {
        self.get_row(period)
            .map(|row| row.balance_after)
            .unwrap_or(self.principal)
    }

    /// remaining balance at the end of the schedule
    pub fn final_balance(&self) -> Money {
        match self.rows.last() {
            Some(row) => row.balance_after,
            None if self.principal.is_zero() => Money::ZERO,
            None => self.principal,
        }
    }

    /// interest paid in each period
    pub fn interest_portions(&self) -> Vec<Money> {
        self.rows.iter().map(|row| row.interest_portion).collect()
    }

    pub fn total_interest(&self) -> Money {
        self.rows.iter().map(|row| row.interest_portion).sum()
    }

    pub fn total_repayment(&self) -> Money {
        self.rows.iter().map(|row| row.repayment_portion).sum()
    }

    /// mean interest per period, zero for an empty schedule
    pub fn mean_interest(&self) -> Money {
        if self.rows.is_empty() {
            return Money::ZERO;
        }
        self.total_interest() / Decimal::from(self.rows.len())
    }
}

/// balance left after `periods` periods, without keeping the history
pub fn remaining_balance(principal: Money, interest_rate: Rate, periods: u32, annuity: Money) -> Result<Money> {
    amortize(principal, interest_rate, periods, annuity, |_| {})
}

/// full schedule, one row per period
pub fn amortization_schedule(
    principal: Money,
    interest_rate: Rate,
    periods: u32,
    annuity: Money,
) -> Result<AmortizationSchedule> {
    AmortizationSchedule::generate(principal, interest_rate, periods, annuity)
}

/// run the amortization recurrence, handing each row to `on_row`.
///
/// the recurrence stops at `periods`, never at a zero balance: a payment
/// smaller than the interest grows the balance (negative amortization) and an
/// oversized payment drives it below zero.
fn amortize(
    principal: Money,
    interest_rate: Rate,
    periods: u32,
    annuity: Money,
    mut on_row: impl FnMut(ScheduleRow),
) -> Result<Money> {
    if periods == 0 {
        return Ok(principal);
    }
    if principal.is_zero() {
        return Ok(Money::ZERO);
    }
    if interest_rate.is_negative() {
        return Err(ImmoError::NegativeRateUnsupported { rate: interest_rate });
    }

    let mut balance = principal;
    for period in 1..=periods {
        let interest = balance
            .checked_apply_rate(interest_rate)
            .ok_or_else(|| ImmoError::overflow(format!("interest of period {}", period)))?;
        let repayment = annuity
            .checked_sub(interest)
            .ok_or_else(|| ImmoError::overflow(format!("repayment of period {}", period)))?;
        let balance_after = balance
            .checked_sub(repayment)
            .ok_or_else(|| ImmoError::overflow(format!("balance of period {}", period)))?
            .round_cents();

        on_row(ScheduleRow {
            period,
            balance_before: balance,
            interest_portion: interest,
            repayment_portion: repayment,
            balance_after,
        });

        balance = balance_after;
    }

    log::debug!(
        "amortized {} at {} over {} periods with annuity {}: remaining {}",
        principal,
        interest_rate,
        periods,
        annuity,
        balance
    );

    Ok(balance)
}
