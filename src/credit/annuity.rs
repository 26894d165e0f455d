//! closed-form relations between annuity, repayment rate and period.
//!
//! all derivations agree with `annuity = P * r / (1 - (1 + r)^-n)` and with the
//! linear relation `annuity = P * (repayment_rate + r)`.

use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};

/// annuity that amortizes `principal` in exactly `period` periods
pub fn annuity_from_period(principal: Money, interest_rate: Rate, period: u32) -> Result<Money> {
    if period == 0 {
        return Err(ImmoError::division_by_zero(
            "annuity over zero periods has a vanishing discount denominator",
        ));
    }
    if principal.is_zero() {
        return Ok(Money::ZERO);
    }
    if interest_rate.is_zero() {
        return Ok(principal / Decimal::from(period));
    }

    if (Decimal::ONE + interest_rate.as_decimal()).is_zero() {
        return Err(ImmoError::division_by_zero("discount factor for a rate of -100%"));
    }

    let discount = interest_rate
        .discount_factor(period)
        .ok_or_else(|| ImmoError::CalculationError {
            message: format!("discount factor of {} over {} periods", interest_rate, period),
        })?;
    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(ImmoError::division_by_zero("annuity discount denominator"));
    }

    principal
        .as_decimal()
        .checked_mul(interest_rate.as_decimal())
        .and_then(|interest| interest.checked_div(denominator))
        .map(Money::from_decimal)
        .ok_or_else(|| ImmoError::overflow("annuity from period"))
}

/// number of periods (fractional) until `annuity` repays `principal`.
///
/// the annuity must exceed the interest-only payment `rate * principal`,
/// otherwise the loan never amortizes.
pub fn period_from_annuity(principal: Money, annuity: Money, interest_rate: Rate) -> Result<Decimal> {
    if annuity.is_zero() {
        return Err(ImmoError::division_by_zero("loan period for a zero annuity"));
    }

    let rate = interest_rate.as_decimal();
    let interest_share = rate * principal.as_decimal() / annuity.as_decimal();
    if interest_share >= Decimal::ONE {
        return Err(ImmoError::InsufficientAnnuity {
            annuity,
            interest_only: principal.apply_rate(interest_rate),
        });
    }

    if rate.is_zero() {
        return Ok(principal.as_decimal() / annuity.as_decimal());
    }

    let numerator = (Decimal::ONE - interest_share)
        .checked_ln()
        .ok_or_else(|| ImmoError::CalculationError {
            message: format!("logarithm of remaining share {}", Decimal::ONE - interest_share),
        })?;
    let discount = (Decimal::ONE + rate)
        .checked_ln()
        .ok_or_else(|| ImmoError::CalculationError {
            message: format!("logarithm of growth factor {}", Decimal::ONE + rate),
        })?;

    // ln(1/(1+r)) == -ln(1+r)
    Ok(numerator / -discount)
}

/// annuity implied by an initial repayment rate
pub fn annuity_from_repayment_rate(principal: Money, interest_rate: Rate, repayment_rate: Rate) -> Money {
    principal * (repayment_rate.as_decimal() + interest_rate.as_decimal())
}

/// initial repayment rate implied by an annuity
pub fn repayment_rate_from_annuity(principal: Money, interest_rate: Rate, annuity: Money) -> Result<Rate> {
    let share = annuity
        .ratio(principal)
        .ok_or_else(|| ImmoError::division_by_zero("repayment rate for a zero principal"))?;
    Ok(Rate::from_decimal(share - interest_rate.as_decimal()))
}
