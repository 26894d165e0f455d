/// evaluate a rented flat financed over 25 years
use immo_loan_rs::{
    BaseCostConfig, CashFlowConfig, CashFlowPeriod, Details, Financing, Money, PropertyBuilder,
    PropertyConfig, PropertyView, Rate, UpdateField,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== property evaluation example ===\n");

    let config = PropertyConfig {
        details: Details {
            city: Some("Hannover".to_string()),
            year_built: Some(1994),
            rooms: Some(3),
            ..Details::new(dec!(78))
        },
        base_cost: BaseCostConfig {
            modernisation: Money::from_major(15_000),
            ..BaseCostConfig::new(Money::from_major(265_000))
        },
        cash_flow: CashFlowConfig {
            period: CashFlowPeriod::Monthly,
            net_cold_rent: Money::from_major(980),
            operating_expenses: Money::from_major(260),
            operating_income: Money::from_major(190),
        },
    };

    let mut immo = PropertyBuilder::new()
        .config(config)
        .interest_rate(Rate::from_decimal(dec!(0.0325)))
        .financing(Financing::Period(25))
        .build()?;

    let mortgage = immo.mortgage().summary()?;
    println!("loan:        {}", immo.mortgage().principal());
    println!("annuity:     {}", mortgage.annuity.round_cents());
    println!("repay time:  {} years", mortgage.repay_time_total);

    let evaluation = immo.evaluate()?;
    println!("\nkey figures:");
    println!("{}", evaluation.to_json_pretty()?);

    // what if the bank offers a better rate without replanning?
    immo.update(UpdateField::InterestRate, dec!(0.029))?;
    println!("\nat 2.9% the loan is repaid after {} years", immo.mortgage().current_repay_period_count()?);

    // and with a shorter loan?
    immo.update_by_keys("mortgage", "repay time total", "-", dec!(20))?;
    println!("over 20 years the annuity is {}", immo.mortgage().annuity().round_cents());

    println!("\nfull report:");
    println!("{}", PropertyView::from_property(&immo)?.to_json_pretty()?);

    Ok(())
}
