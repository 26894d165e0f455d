pub mod builder;
pub mod cash_flow;
pub mod costs;
pub mod details;
pub mod evaluation;
pub mod serialization;
pub mod tax;

pub use builder::PropertyBuilder;
pub use cash_flow::{CashFlow, CashFlowLine};
pub use costs::{BaseCost, CostLine};
pub use details::Details;
pub use evaluation::Immo;
pub use serialization::{CostEffectiveness, Evaluation, PropertyView};
pub use tax::{BuyTaxTable, RegionRate};
