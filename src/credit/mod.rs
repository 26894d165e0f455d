pub mod annuity;
pub mod schedule;

pub use annuity::{
    annuity_from_period, annuity_from_repayment_rate, period_from_annuity,
    repayment_rate_from_annuity,
};
pub use schedule::{amortization_schedule, remaining_balance, AmortizationSchedule, ScheduleRow};
