use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImmoError {
    #[error("division by zero: {context}")]
    DivisionByZero {
        context: String,
    },

    #[error("insufficient annuity: {annuity} must exceed the interest-only payment {interest_only}")]
    InsufficientAnnuity {
        annuity: Money,
        interest_only: Money,
    },

    #[error("negative interest rates are not supported for amortization: {rate}")]
    NegativeRateUnsupported {
        rate: Rate,
    },

    #[error("unknown installment type: {name}")]
    UnknownInstallmentType {
        name: String,
    },

    #[error("invalid installment rate: {message}")]
    InvalidInstallmentRate {
        message: String,
    },

    #[error("installment series length mismatch: expected {expected}, found {found}")]
    InstallmentLengthMismatch {
        expected: u32,
        found: usize,
    },

    #[error("cannot update {field} {attribute} on {card}")]
    UnknownUpdateField {
        card: String,
        field: String,
        attribute: String,
    },

    #[error("unknown region: {code}")]
    UnknownRegion {
        code: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl ImmoError {
    pub(crate) fn division_by_zero(context: impl Into<String>) -> Self {
        ImmoError::DivisionByZero {
            context: context.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        ImmoError::CalculationError {
            message: format!("arithmetic overflow in {}", context.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImmoError>;
