pub mod config;
pub mod credit;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod mortgage;
pub mod property;
pub mod state;
pub mod types;

// re-export key types
pub use config::{BaseCostConfig, CashFlowConfig, PropertyConfig, TaxRates};
pub use credit::{
    amortization_schedule, annuity_from_period, annuity_from_repayment_rate, period_from_annuity,
    remaining_balance, repayment_rate_from_annuity, AmortizationSchedule, ScheduleRow,
};
pub use decimal::{Money, Rate};
pub use errors::{ImmoError, Result};
pub use events::{Event, EventStore};
pub use interest::{
    annualized_interest, compound_interest, CompoundResult, CompoundingEngine, InstallmentPlan,
    InstallmentRate, InstallmentType,
};
pub use mortgage::{Mortgage, MortgageSummary};
pub use property::{
    BaseCost, BuyTaxTable, CashFlow, CostEffectiveness, Details, Evaluation, Immo,
    PropertyBuilder, PropertyView,
};
pub use state::AmortizationState;
pub use types::{CashFlowPeriod, Financing, PropertyId, UpdateField};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
