use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::config::TaxRates;
use crate::decimal::{Money, Rate};
use crate::errors::{ImmoError, Result};
use crate::events::{Event, EventStore};
use crate::mortgage::Mortgage;
use crate::property::cash_flow::CashFlow;
use crate::property::costs::BaseCost;
use crate::property::details::Details;
use crate::property::serialization::{CostEffectiveness, Evaluation};
use crate::state::round_period;
use crate::types::{PropertyId, UpdateField};

const MONTHS: Decimal = dec!(12);

/// maximum horizon of the ten-year figures
const TEN_YEARS: u32 = 10;

/// investment evaluation of a single financed property
#[derive(Debug, Clone)]
pub struct Immo {
    id: PropertyId,
    details: Details,
    base_cost: BaseCost,
    cash_flow: CashFlow,
    mortgage: Mortgage,
    tax_rates: TaxRates,
    events: EventStore,
}

impl Immo {
    /// assemble an evaluation; the mortgage principal is expected to be the
    /// loan share of `base_cost`
    pub fn new(
        details: Details,
        base_cost: BaseCost,
        cash_flow: CashFlow,
        mortgage: Mortgage,
        tax_rates: TaxRates,
    ) -> Self {
        let id = Uuid::new_v4();
        let mut events = EventStore::new();
        events.emit(Event::PropertyEvaluated {
            property_id: id,
            total_cost: base_cost.total(),
            loan: base_cost.loan(),
            timestamp: Utc::now(),
        });

        Self {
            id,
            details,
            base_cost,
            cash_flow,
            mortgage,
            tax_rates,
            events,
        }
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn base_cost(&self) -> &BaseCost {
        &self.base_cost
    }

    pub fn cash_flow(&self) -> &CashFlow {
        &self.cash_flow
    }

    pub fn mortgage(&self) -> &Mortgage {
        &self.mortgage
    }

    pub fn tax_rates(&self) -> &TaxRates {
        &self.tax_rates
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// annual cold rent over total cost
    pub fn gross_rental_yield(&self) -> Result<Rate> {
        let annual_rent = self.cash_flow.net_cold_rent() * MONTHS;
        annual_rent
            .ratio(self.base_cost.total())
            .map(Rate::from_decimal)
            .ok_or_else(|| ImmoError::division_by_zero("gross rental yield of a zero total cost"))
    }

    /// annual surplus after debt service over total cost
    pub fn net_rental_yield(&self) -> Result<Rate> {
        let surplus = self.cash_flow.net_annually() - self.mortgage.annuity();
        surplus
            .ratio(self.base_cost.total())
            .map(Rate::from_decimal)
            .ok_or_else(|| ImmoError::division_by_zero("net rental yield of a zero total cost"))
    }

    /// annual net cash flow over equity, zero without equity
    pub fn return_on_equity(&self) -> Rate {
        self.cash_flow
            .net_annually()
            .ratio(self.base_cost.equity())
            .map(Rate::from_decimal)
            .unwrap_or(Rate::ZERO)
    }

    /// whole years of net rent needed to cover the total cost
    pub fn multiplication_factor(&self) -> Result<Decimal> {
        self.base_cost
            .total()
            .ratio(self.cash_flow.net_annually())
            .map(|factor| factor.floor())
            .ok_or_else(|| ImmoError::division_by_zero("multiplication factor without net rent"))
    }

    /// horizon of the ten-year figures, shortened to the planned loan period
    pub fn ten_year_horizon(&self) -> u32 {
        TEN_YEARS.min(self.mortgage.period())
    }

    /// equity gained in the property plus accumulated cash surplus over the
    /// horizon
    pub fn ten_year_net_capital_gain(&self) -> Result<Money> {
        let horizon = self.ten_year_horizon();
        let rest_debt = self.mortgage.rest_debt_by_period(horizon)?;

        let property_gain = (self.base_cost.price() + self.base_cost.modernisation()
            - self.base_cost.equity()
            - rest_debt)
            .round_cents();
        let surplus = (self.cash_flow.net_annually() - self.mortgage.annuity()) * Decimal::from(horizon);

        Ok(property_gain + surplus)
    }

    /// return on equity over the ten-year horizon, zero without equity
    pub fn ten_year_roe(&self) -> Result<Rate> {
        let equity = self.base_cost.equity();
        if equity.is_zero() {
            return Ok(Rate::ZERO);
        }
        let gain = self.ten_year_net_capital_gain()?;
        let growth = (gain + equity)
            .ratio(equity)
            .ok_or_else(|| ImmoError::division_by_zero("ten year return on equity"))?;
        Ok(Rate::from_decimal(growth - Decimal::ONE))
    }

    pub fn price_per_sqm(&self) -> Result<Money> {
        self.per_sqm(self.base_cost.price(), "price per square metre")
    }

    pub fn rent_per_sqm(&self) -> Result<Money> {
        self.per_sqm(self.cash_flow.net_cold_rent(), "rent per square metre")
    }

    pub fn cost_effectiveness(&self) -> Result<CostEffectiveness> {
        Ok(CostEffectiveness {
            living_space: self.details.living_space,
            price_per_sqm: self.price_per_sqm()?,
            rent_per_sqm: self.rent_per_sqm()?,
        })
    }

    /// income tax on the rental result of every loan period.
    ///
    /// the taxable result is the annual rent minus running cost, the interest
    /// paid in that period and the depreciation of the price. Rent and running
    /// cost are annualized so they share a basis with the per-period interest;
    /// a monthly rent against annual interest would understate the result
    /// twelvefold. Depreciation is deducted as the tax rates define it.
    pub fn total_taxes(&self) -> Result<Vec<Money>> {
        let rental_result = self.cash_flow.net_cold_rent() * MONTHS
            - self.cash_flow.net_operating_cost() * MONTHS;
        let depreciation = self.base_cost.price().apply_rate(self.tax_rates.depreciation);

        Ok(self
            .mortgage
            .credit_costs()?
            .into_iter()
            .map(|interest| (rental_result - interest - depreciation).apply_rate(self.tax_rates.personal))
            .collect())
    }

    /// key figures as percentages rounded to two decimals
    pub fn evaluate(&self) -> Result<Evaluation> {
        let percent = |rate: Rate| rate.as_percentage().round_dp(2);

        Ok(Evaluation {
            gross_rental_yield: percent(self.gross_rental_yield()?),
            net_rental_yield: percent(self.net_rental_yield()?),
            multiplication_factor: self.multiplication_factor()?,
            return_on_equity: percent(self.return_on_equity()),
            ten_year_net_capital_gain: self.ten_year_net_capital_gain()?.round_cents(),
            ten_year_roe: percent(self.ten_year_roe()?),
        })
    }

    pub fn set_price(&mut self, price: Money) {
        self.base_cost.set_price(price);
        self.sync_principal();
    }

    pub fn set_modernisation(&mut self, amount: Money) {
        self.base_cost.set_modernisation(amount);
        self.sync_principal();
    }

    pub fn set_agent(&mut self, amount: Money) -> Result<()> {
        self.base_cost.set_agent(amount)?;
        self.sync_principal();
        Ok(())
    }

    pub fn set_agent_rate(&mut self, rate: Rate) {
        self.base_cost.set_agent_rate(rate);
        self.sync_principal();
    }

    pub fn set_property_buy_tax(&mut self, amount: Money) -> Result<()> {
        self.base_cost.set_property_buy_tax(amount)?;
        self.sync_principal();
        Ok(())
    }

    pub fn set_property_buy_tax_rate(&mut self, rate: Rate) {
        self.base_cost.set_property_buy_tax_rate(rate);
        self.sync_principal();
    }

    pub fn set_notary(&mut self, amount: Money) -> Result<()> {
        self.base_cost.set_notary(amount)?;
        self.sync_principal();
        Ok(())
    }

    pub fn set_notary_rate(&mut self, rate: Rate) {
        self.base_cost.set_notary_rate(rate);
        self.sync_principal();
    }

    pub fn set_land_registry(&mut self, amount: Money) -> Result<()> {
        self.base_cost.set_land_registry(amount)?;
        self.sync_principal();
        Ok(())
    }

    pub fn set_land_registry_rate(&mut self, rate: Rate) {
        self.base_cost.set_land_registry_rate(rate);
        self.sync_principal();
    }

    pub fn set_equity(&mut self, amount: Money) -> Result<()> {
        self.base_cost.set_equity(amount)?;
        self.sync_principal();
        Ok(())
    }

    pub fn set_equity_rate(&mut self, rate: Rate) {
        self.base_cost.set_equity_rate(rate);
        self.sync_principal();
    }

    pub fn set_loan(&mut self, amount: Money) -> Result<()> {
        self.base_cost.set_loan(amount)?;
        self.sync_principal();
        Ok(())
    }

    pub fn set_loan_rate(&mut self, rate: Rate) {
        self.base_cost.set_loan_rate(rate);
        self.sync_principal();
    }

    pub fn set_net_cold_rent_monthly(&mut self, amount: Money) {
        self.cash_flow.set_net_cold_rent(amount);
    }

    pub fn set_net_cold_rent_annually(&mut self, amount: Money) {
        self.cash_flow.set_net_cold_rent(amount / MONTHS);
    }

    pub fn set_operating_income_monthly(&mut self, amount: Money) {
        self.cash_flow.set_operating_income(amount);
    }

    pub fn set_operating_income_annually(&mut self, amount: Money) {
        self.cash_flow.set_operating_income(amount / MONTHS);
    }

    /// expenses are taken by magnitude, so either sign is accepted
    pub fn set_operating_expenses_monthly(&mut self, amount: Money) {
        self.cash_flow.set_operating_expenses(amount.abs());
    }

    pub fn set_operating_expenses_annually(&mut self, amount: Money) {
        self.cash_flow.set_operating_expenses((amount / MONTHS).abs());
    }

    /// monthly debt service; the mortgage is planned per year
    pub fn set_annuity_monthly(&mut self, amount: Money) -> Result<()> {
        self.set_annuity_annually(amount * MONTHS)
    }

    pub fn set_annuity_annually(&mut self, amount: Money) -> Result<()> {
        self.mortgage.update_annuity(amount.abs())?;
        self.mortgage_replanned();
        Ok(())
    }

    /// change the rate without replanning annuity or repayment rate
    pub fn set_interest_rate(&mut self, rate: Rate) {
        self.mortgage.update_interest_rate(rate);
    }

    pub fn set_repay_time_total(&mut self, periods: u32) -> Result<()> {
        self.mortgage.update_repay_time(periods)?;
        self.mortgage_replanned();
        Ok(())
    }

    pub fn set_repayment_rate(&mut self, rate: Rate) -> Result<()> {
        self.mortgage.update_repayment_rate(rate)?;
        self.mortgage_replanned();
        Ok(())
    }

    pub fn set_living_space(&mut self, living_space: Decimal) {
        self.details.living_space = living_space;
    }

    pub fn set_price_per_sqm(&mut self, price: Money) {
        self.set_price(price * self.details.living_space);
    }

    pub fn set_rent_per_sqm(&mut self, rent: Money) {
        self.set_net_cold_rent_monthly(rent * self.details.living_space);
    }

    /// apply a single field change
    pub fn update(&mut self, field: UpdateField, value: Decimal) -> Result<()> {
        let amount = Money::from_decimal(value);
        let rate = Rate::from_decimal(value);

        match field {
            UpdateField::Price => self.set_price(amount),
            UpdateField::Modernisation => self.set_modernisation(amount),
            UpdateField::Agent => self.set_agent(amount)?,
            UpdateField::AgentRate => self.set_agent_rate(rate),
            UpdateField::PropertyBuyTax => self.set_property_buy_tax(amount)?,
            UpdateField::PropertyBuyTaxRate => self.set_property_buy_tax_rate(rate),
            UpdateField::Notary => self.set_notary(amount)?,
            UpdateField::NotaryRate => self.set_notary_rate(rate),
            UpdateField::LandRegistry => self.set_land_registry(amount)?,
            UpdateField::LandRegistryRate => self.set_land_registry_rate(rate),
            UpdateField::Equity => self.set_equity(amount)?,
            UpdateField::EquityRate => self.set_equity_rate(rate),
            UpdateField::Loan => self.set_loan(amount)?,
            UpdateField::LoanRate => self.set_loan_rate(rate),
            UpdateField::NetColdRentMonthly => self.set_net_cold_rent_monthly(amount),
            UpdateField::NetColdRentAnnually => self.set_net_cold_rent_annually(amount),
            UpdateField::OperatingIncomeMonthly => self.set_operating_income_monthly(amount),
            UpdateField::OperatingIncomeAnnually => self.set_operating_income_annually(amount),
            UpdateField::OperatingExpensesMonthly => self.set_operating_expenses_monthly(amount),
            UpdateField::OperatingExpensesAnnually => self.set_operating_expenses_annually(amount),
            UpdateField::AnnuityMonthly => self.set_annuity_monthly(amount)?,
            UpdateField::AnnuityAnnually | UpdateField::MortgageAnnuity => {
                self.set_annuity_annually(amount)?
            }
            UpdateField::InterestRate => self.set_interest_rate(rate),
            UpdateField::RepayTimeTotal => self.set_repay_time_total(round_period(value)?)?,
            UpdateField::RepaymentRate => self.set_repayment_rate(rate)?,
            UpdateField::LivingSpace => self.set_living_space(value),
            UpdateField::PricePerSqm => self.set_price_per_sqm(amount),
            UpdateField::RentPerSqm => self.set_rent_per_sqm(amount),
        }

        self.events.emit(Event::FieldUpdated {
            property_id: self.id,
            field,
            value,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// apply a field change addressed by (card, field, attribute)
    pub fn update_by_keys(&mut self, card: &str, field: &str, attribute: &str, value: Decimal) -> Result<()> {
        let field = UpdateField::from_keys(card, field, attribute)?;
        self.update(field, value)
    }

    fn per_sqm(&self, amount: Money, what: &str) -> Result<Money> {
        if self.details.living_space.is_zero() {
            return Err(ImmoError::division_by_zero(format!("{} without living space", what)));
        }
        Ok(amount / self.details.living_space)
    }

    /// keep the mortgage principal equal to the loan share of the cost
    fn sync_principal(&mut self) {
        let old_principal = self.mortgage.principal();
        let new_principal = self.base_cost.loan();
        if old_principal == new_principal {
            return;
        }

        self.mortgage.set_principal(new_principal);
        self.events.emit(Event::MortgagePrincipalSynced {
            property_id: self.id,
            old_principal,
            new_principal,
        });
    }

    fn mortgage_replanned(&mut self) {
        self.events.emit(Event::MortgageReplanned {
            property_id: self.id,
            annuity: self.mortgage.annuity(),
            repayment_rate: self.mortgage.repayment_rate(),
            period: self.mortgage.period(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // price 200000 at 5% buy tax: total 221140, equity 44228, loan 176912
    fn immo() -> Immo {
        let base_cost = BaseCost::with_buy_tax_rate(Money::from_major(200_000), Rate::from_decimal(dec!(0.05)));
        let mortgage =
            Mortgage::from_repayment_rate(base_cost.loan(), Rate::from_decimal(dec!(0.04)), Rate::from_decimal(dec!(0.02)))
                .unwrap();
        let cash_flow = CashFlow::new(Money::from_major(1_000), Money::from_major(200), Money::from_major(100));

        Immo::new(Details::new(dec!(80)), base_cost, cash_flow, mortgage, TaxRates::default())
    }

    #[test]
    fn test_yields() {
        let immo = immo();
        // 12000 / 221140
        let gross = immo.gross_rental_yield().unwrap();
        assert_eq!(gross.as_percentage().round_dp(2), dec!(5.43));

        // annuity 176912 * 0.06 = 10614.72; (10800 - 10614.72) / 221140
        let net = immo.net_rental_yield().unwrap();
        assert_eq!(net.as_percentage().round_dp(2), dec!(0.08));
    }

    #[test]
    fn test_return_on_equity() {
        let mut immo = immo();
        // 10800 / 44228
        assert_eq!(immo.return_on_equity().as_percentage().round_dp(2), dec!(24.42));

        immo.set_equity_rate(Rate::ZERO);
        assert_eq!(immo.return_on_equity(), Rate::ZERO);
    }

    #[test]
    fn test_multiplication_factor() {
        let mut immo = immo();
        // 221140 / 10800 = 20.47
        assert_eq!(immo.multiplication_factor().unwrap(), dec!(20));

        immo.set_net_cold_rent_monthly(Money::from_major(100));
        assert!(matches!(
            immo.multiplication_factor(),
            Err(ImmoError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_total_cost() {
        let mut immo = immo();
        immo.set_price(Money::ZERO);
        assert!(matches!(immo.gross_rental_yield(), Err(ImmoError::DivisionByZero { .. })));
        assert!(matches!(immo.net_rental_yield(), Err(ImmoError::DivisionByZero { .. })));
    }

    #[test]
    fn test_ten_year_figures() {
        let immo = immo();
        assert_eq!(immo.ten_year_horizon(), 10);

        let rest_debt = immo.mortgage().rest_debt_by_period(10).unwrap();
        let expected = (Money::from_major(200_000) - Money::from_major(44_228) - rest_debt).round_cents()
            + (Money::from_major(10_800) - immo.mortgage().annuity()) * dec!(10);
        let gain = immo.ten_year_net_capital_gain().unwrap();
        assert_eq!(gain, expected);

        let roe = immo.ten_year_roe().unwrap();
        let expected_roe = (gain + Money::from_major(44_228)).as_decimal() / dec!(44228) - Decimal::ONE;
        assert!((roe.as_decimal() - expected_roe).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_ten_year_horizon_short_loan() {
        let mut immo = immo();
        immo.set_repay_time_total(6).unwrap();
        assert_eq!(immo.ten_year_horizon(), 6);

        let gain = immo.ten_year_net_capital_gain().unwrap();
        let rest_debt = immo.mortgage().rest_debt_by_period(6).unwrap();
        assert!(rest_debt.abs() < Money::ONE);
        assert!(gain < Money::from_major(200_000));
    }

    #[test]
    fn test_ten_year_roe_without_equity() {
        let mut immo = immo();
        immo.set_loan_rate(Rate::ONE);
        assert_eq!(immo.ten_year_roe().unwrap(), Rate::ZERO);
    }

    #[test]
    fn test_per_sqm() {
        let mut immo = immo();
        assert_eq!(immo.price_per_sqm().unwrap(), Money::from_major(2_500));
        assert_eq!(immo.rent_per_sqm().unwrap(), Money::from_decimal(dec!(12.5)));

        let ce = immo.cost_effectiveness().unwrap();
        assert_eq!(ce.living_space, dec!(80));

        immo.set_price_per_sqm(Money::from_major(3_000));
        assert_eq!(immo.base_cost().price(), Money::from_major(240_000));
        immo.set_rent_per_sqm(Money::from_major(10));
        assert_eq!(immo.cash_flow().net_cold_rent(), Money::from_major(800));

        immo.set_living_space(Decimal::ZERO);
        assert!(matches!(immo.price_per_sqm(), Err(ImmoError::DivisionByZero { .. })));
    }

    #[test]
    fn test_cost_setters_sync_principal() {
        let mut immo = immo();
        immo.set_price(Money::from_major(300_000));
        assert_eq!(immo.mortgage().principal(), immo.base_cost().loan());

        immo.set_agent(Money::ZERO).unwrap();
        assert_eq!(immo.mortgage().principal(), immo.base_cost().loan());

        immo.set_modernisation(Money::from_major(20_000));
        assert_eq!(immo.mortgage().principal(), immo.base_cost().loan());

        let synced = immo
            .events()
            .iter()
            .filter(|e| matches!(e, Event::MortgagePrincipalSynced { .. }))
            .count();
        assert_eq!(synced, 3);
    }

    #[test]
    fn test_cash_flow_setters() {
        let mut immo = immo();
        immo.set_net_cold_rent_annually(Money::from_major(14_400));
        assert_eq!(immo.cash_flow().net_cold_rent(), Money::from_major(1_200));

        immo.set_operating_expenses_monthly(Money::from_major(-300));
        assert_eq!(immo.cash_flow().operating_expenses(), Money::from_major(300));

        immo.set_operating_income_annually(Money::from_major(-1_200));
        assert_eq!(immo.cash_flow().operating_income(), Money::ZERO);
    }

    #[test]
    fn test_annuity_setters() {
        let mut immo = immo();
        immo.set_annuity_monthly(Money::from_major(-1_000)).unwrap();
        assert_eq!(immo.mortgage().annuity(), Money::from_major(12_000));

        let loan = immo.base_cost().loan();
        let expected = Money::from_major(12_000).ratio(loan).unwrap() - dec!(0.04);
        assert_eq!(immo.mortgage().repayment_rate().as_decimal(), expected);
    }

    #[test]
    fn test_annuity_change_moves_horizon() {
        let mut immo = immo();
        assert_eq!(immo.mortgage().period(), 28);
        assert_eq!(immo.ten_year_horizon(), 10);

        // 176912 * 0.04 / 40000 leaves ln(0.823) / ln(1/1.04) = 4.96 periods
        immo.set_annuity_annually(Money::from_major(40_000)).unwrap();
        assert_eq!(immo.mortgage().period(), 5);
        assert_eq!(immo.mortgage().current_repay_period_count().unwrap(), 5);
        assert_eq!(immo.ten_year_horizon(), 5);

        let rest_debt = immo.mortgage().rest_debt_by_period(5).unwrap();
        let expected = (Money::from_major(200_000) - Money::from_major(44_228) - rest_debt).round_cents()
            + (Money::from_major(10_800) - Money::from_major(40_000)) * dec!(5);
        assert_eq!(immo.ten_year_net_capital_gain().unwrap(), expected);
    }

    #[test]
    fn test_repayment_rate_change_moves_horizon() {
        let mut immo = immo();
        immo.update(UpdateField::RepaymentRate, dec!(0.2)).unwrap();
        assert_eq!(immo.mortgage().period(), immo.mortgage().current_repay_period_count().unwrap());
        assert!(immo.ten_year_horizon() < 10);

        let before = immo.mortgage().clone();
        let result = immo.update(UpdateField::RepaymentRate, Decimal::ZERO);
        assert!(matches!(result, Err(ImmoError::InsufficientAnnuity { .. })));
        assert_eq!(immo.mortgage(), &before);
    }

    #[test]
    fn test_interest_rate_does_not_replan() {
        let mut immo = immo();
        let annuity = immo.mortgage().annuity();
        immo.set_interest_rate(Rate::from_decimal(dec!(0.03)));
        assert_eq!(immo.mortgage().annuity(), annuity);
        assert_eq!(immo.mortgage().repayment_rate(), Rate::from_decimal(dec!(0.02)));
    }

    #[test]
    fn test_total_taxes() {
        let immo = immo();
        let taxes = immo.total_taxes().unwrap();
        let interest = immo.mortgage().credit_costs().unwrap();
        assert_eq!(taxes.len(), interest.len());

        // (12000 - 1200 - interest - 4000) * 0.35
        let expected = (Money::from_major(6_800) - interest[0]).apply_rate(Rate::from_decimal(dec!(0.35)));
        assert_eq!(taxes[0], expected);
        // interest falls over time, so the tax rises
        assert!(taxes.last().unwrap() > &taxes[0]);
    }

    #[test]
    fn test_evaluate() {
        let evaluation = immo().evaluate().unwrap();
        assert_eq!(evaluation.gross_rental_yield, dec!(5.43));
        assert_eq!(evaluation.net_rental_yield, dec!(0.08));
        assert_eq!(evaluation.multiplication_factor, dec!(20));
        assert_eq!(evaluation.return_on_equity, dec!(24.42));
        assert_eq!(
            evaluation.ten_year_net_capital_gain,
            evaluation.ten_year_net_capital_gain.round_cents()
        );
    }

    #[test]
    fn test_update_dispatch() {
        let mut immo = immo();
        immo.update(UpdateField::EquityRate, dec!(0.3)).unwrap();
        assert_eq!(immo.base_cost().loan_rate().as_decimal(), dec!(0.7));
        assert_eq!(immo.mortgage().principal(), immo.base_cost().loan());

        immo.update(UpdateField::RepayTimeTotal, dec!(20)).unwrap();
        assert_eq!(immo.mortgage().period(), 20);

        immo.update_by_keys("cash_flow", "net cold rent", "annually", dec!(9600)).unwrap();
        assert_eq!(immo.cash_flow().net_cold_rent(), Money::from_major(800));

        immo.update_by_keys("cost_effectiveness", "living space", "-", dec!(100)).unwrap();
        assert_eq!(immo.details().living_space, dec!(100));

        let updates = immo
            .events()
            .iter()
            .filter(|e| matches!(e, Event::FieldUpdated { .. }))
            .count();
        assert_eq!(updates, 4);
    }

    #[test]
    fn test_update_unknown_keys() {
        let mut immo = immo();
        let result = immo.update_by_keys("mortgage", "duration", "-", dec!(5));
        assert!(matches!(result, Err(ImmoError::UnknownUpdateField { .. })));
    }

    #[test]
    fn test_update_failure_emits_nothing() {
        let mut immo = immo();
        immo.take_events();
        let result = immo.update(UpdateField::RepayTimeTotal, dec!(0));
        assert!(matches!(result, Err(ImmoError::DivisionByZero { .. })));
        assert!(immo.events().is_empty());
    }
}
