use serde::{Deserialize, Serialize};

use crate::credit::annuity::{period_from_annuity, repayment_rate_from_annuity};
use crate::credit::schedule::{amortization_schedule, remaining_balance, AmortizationSchedule};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::state::{round_period, AmortizationState};

/// key figures of a mortgage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub interest_rate: Rate,
    pub repayment_rate: Rate,
    pub annuity: Money,
    pub repay_time_total: u32,
}

/// annuity loan with a mutable repayment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mortgage {
    principal: Money,
    interest_rate: Rate,
    state: AmortizationState,
}

impl Mortgage {
    pub fn new(principal: Money, interest_rate: Rate, state: AmortizationState) -> Self {
        Self {
            principal,
            interest_rate,
            state,
        }
    }

    pub fn from_period(principal: Money, interest_rate: Rate, period: u32) -> Result<Self> {
        let state = AmortizationState::from_period(principal, interest_rate, period)?;
        Ok(Self::new(principal, interest_rate, state))
    }

    pub fn from_annuity(principal: Money, interest_rate: Rate, annuity: Money) -> Result<Self> {
        let state = AmortizationState::from_annuity(principal, interest_rate, annuity)?;
        Ok(Self::new(principal, interest_rate, state))
    }

    pub fn from_repayment_rate(principal: Money, interest_rate: Rate, repayment_rate: Rate) -> Result<Self> {
        let state = AmortizationState::from_repayment_rate(principal, interest_rate, repayment_rate)?;
        Ok(Self::new(principal, interest_rate, state))
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn annuity(&self) -> Money {
        self.state.annuity
    }

    pub fn repayment_rate(&self) -> Rate {
        self.state.repayment_rate
    }

    /// planned number of periods.
    ///
    /// set on construction and re-derived by every plan update (annuity,
    /// repayment rate, repay time). `set_principal` and `update_interest_rate`
    /// leave it at the last planned value.
    pub fn period(&self) -> u32 {
        self.state.period
    }

    pub fn state(&self) -> &AmortizationState {
        &self.state
    }

    /// replace the principal without touching the repayment plan
    pub fn set_principal(&mut self, principal: Money) {
        self.principal = principal;
    }

    /// set the annuity and re-derive the repayment rate and the period.
    ///
    /// fails with `InsufficientAnnuity` when the annuity no longer repays the
    /// loan; the plan is left unchanged on any error.
    pub fn update_annuity(&mut self, annuity: Money) -> Result<()> {
        self.state = AmortizationState::from_annuity(self.principal, self.interest_rate, annuity)?;
        Ok(())
    }

    /// set the repayment rate and re-derive the annuity and the period
    pub fn update_repayment_rate(&mut self, repayment_rate: Rate) -> Result<()> {
        self.state = AmortizationState::from_repayment_rate(self.principal, self.interest_rate, repayment_rate)?;
        Ok(())
    }

    /// set the interest rate only.
    ///
    /// annuity and repayment rate keep their values, so the linear relation
    /// between them no longer holds until the plan is recomputed. This
    /// compares rates without replanning; call
    /// [`recompute_repayment_rate`](Self::recompute_repayment_rate) to replan
    /// for the current annuity.
    pub fn update_interest_rate(&mut self, interest_rate: Rate) {
        self.interest_rate = interest_rate;
    }

    /// re-derive the repayment rate from the current annuity and rate
    pub fn recompute_repayment_rate(&mut self) -> Result<()> {
        self.state.repayment_rate =
            repayment_rate_from_annuity(self.principal, self.interest_rate, self.state.annuity)?;
        Ok(())
    }

    /// replan so the loan is repaid in `periods` periods
    pub fn update_repay_time(&mut self, periods: u32) -> Result<()> {
        self.state = AmortizationState::from_period(self.principal, self.interest_rate, periods)?;
        Ok(())
    }

    /// whole periods until the current annuity repays the loan
    pub fn current_repay_period_count(&self) -> Result<u32> {
        round_period(period_from_annuity(self.principal, self.state.annuity, self.interest_rate)?)
    }

    /// full schedule until repayment
    pub fn outlook(&self) -> Result<AmortizationSchedule> {
        amortization_schedule(
            self.principal,
            self.interest_rate,
            self.current_repay_period_count()?,
            self.state.annuity,
        )
    }

    /// interest paid in every period until repayment
    pub fn credit_costs(&self) -> Result<Vec<Money>> {
        Ok(self.outlook()?.interest_portions())
    }

    pub fn credit_cost_mean(&self) -> Result<Money> {
        Ok(self.outlook()?.mean_interest())
    }

    pub fn total_interest(&self) -> Result<Money> {
        Ok(self.outlook()?.total_interest())
    }

    /// outstanding debt after `period` periods
    pub fn rest_debt_by_period(&self, period: u32) -> Result<Money> {
        remaining_balance(self.principal, self.interest_rate, period, self.state.annuity)
    }

    pub fn summary(&self) -> Result<MortgageSummary> {
        Ok(MortgageSummary {
            interest_rate: self.interest_rate,
            repayment_rate: self.state.repayment_rate,
            annuity: self.state.annuity,
            repay_time_total: self.current_repay_period_count()?,
        })
    }
}
