pub mod compound;
pub mod installments;

pub use compound::{
    annualized_interest, compound_interest, CompoundResult, CompoundRow, CompoundingEngine,
};
pub use installments::{
    create_installment, custom_installment, dynamic_installment, fixed_installment,
    InstallmentPlan, InstallmentRate, InstallmentType,
};
