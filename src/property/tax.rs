use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{ImmoError, Result};

/// property buy tax rate of a single region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRate {
    pub code: String,
    pub name: String,
    pub rate: Rate,
}

/// lookup table of property buy tax rates by region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BuyTaxTableInput")]
pub struct BuyTaxTable {
    regions: Vec<RegionRate>,
    default_region: String,
}

/// unvalidated serde form of a `BuyTaxTable`
#[derive(Deserialize)]
struct BuyTaxTableInput {
    regions: Vec<RegionRate>,
    default_region: String,
}

impl TryFrom<BuyTaxTableInput> for BuyTaxTable {
    type Error = ImmoError;

    fn try_from(input: BuyTaxTableInput) -> Result<Self> {
        BuyTaxTable::new(input.regions, input.default_region)
    }
}

impl BuyTaxTable {
    /// build a table; `default_region` must be one of the region codes
    pub fn new(regions: Vec<RegionRate>, default_region: impl Into<String>) -> Result<Self> {
        let default_region = default_region.into();
        if regions.is_empty() {
            return Err(ImmoError::InvalidConfiguration {
                message: "buy tax table needs at least one region".to_string(),
            });
        }
        if !regions.iter().any(|r| r.code == default_region) {
            return Err(ImmoError::UnknownRegion { code: default_region });
        }
        Ok(Self {
            regions,
            default_region,
        })
    }

    /// rates of the 16 german federal states
    pub fn germany() -> Self {
        let states = [
            ("BW", "Baden-Württemberg", dec!(0.05)),
            ("BY", "Bayern", dec!(0.035)),
            ("BE", "Berlin", dec!(0.06)),
            ("BB", "Brandenburg", dec!(0.065)),
            ("HB", "Bremen", dec!(0.05)),
            ("HH", "Hamburg", dec!(0.055)),
            ("HE", "Hessen", dec!(0.06)),
            ("MV", "Mecklenburg-Vorpommern", dec!(0.06)),
            ("NI", "Niedersachsen", dec!(0.05)),
            ("NW", "Nordrhein-Westfalen", dec!(0.065)),
            ("RP", "Rheinland-Pfalz", dec!(0.05)),
            ("SL", "Saarland", dec!(0.065)),
            ("SN", "Sachsen", dec!(0.055)),
            ("ST", "Sachsen-Anhalt", dec!(0.05)),
            ("SH", "Schleswig-Holstein", dec!(0.065)),
            ("TH", "Thüringen", dec!(0.05)),
        ];

        Self {
            regions: states
                .iter()
                .map(|(code, name, rate)| RegionRate {
                    code: code.to_string(),
                    name: name.to_string(),
                    rate: Rate::from_decimal(*rate),
                })
                .collect(),
            default_region: "NI".to_string(),
        }
    }

    pub fn regions(&self) -> &[RegionRate] {
        &self.regions
    }

    /// rate for a region code
    pub fn rate(&self, code: &str) -> Result<Rate> {
        self.regions
            .iter()
            .find(|r| r.code == code)
            .map(|r| r.rate)
            .ok_or_else(|| ImmoError::UnknownRegion {
                code: code.to_string(),
            })
    }

    pub fn default_rate(&self) -> Rate {
        self.rate(&self.default_region).unwrap_or(Rate::ZERO)
    }

    /// arithmetic mean over all regions
    pub fn average(&self) -> Rate {
        let sum: Decimal = self.regions.iter().map(|r| r.rate.as_decimal()).sum();
        Rate::from_decimal(sum / Decimal::from(self.regions.len()))
    }

    /// median over all regions, mean of the two middle rates for an even count
    pub fn median(&self) -> Rate {
        let mut rates: Vec<Decimal> = self.regions.iter().map(|r| r.rate.as_decimal()).collect();
        rates.sort();

        let mid = rates.len() / 2;
        if rates.len() % 2 == 0 {
            Rate::from_decimal((rates[mid - 1] + rates[mid]) / Decimal::TWO)
        } else {
            Rate::from_decimal(rates[mid])
        }
    }
}

impl Default for BuyTaxTable {
    fn default() -> Self {
        Self::germany()
    }
}
