use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// descriptive data of a property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Details {
    /// living space in square metres
    pub living_space: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_renovated: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
}

impl Details {
    pub fn new(living_space: Decimal) -> Self {
        Self {
            living_space,
            ..Default::default()
        }
    }

    /// years since construction as of `today`
    pub fn building_age(&self, today: NaiveDate) -> Option<i32> {
        self.year_built.map(|year| today.year() - year)
    }

    /// years since the last renovation, falling back to construction
    pub fn years_since_renovation(&self, today: NaiveDate) -> Option<i32> {
        self.year_renovated
            .or(self.year_built)
            .map(|year| today.year() - year)
    }

    /// single-line address from whatever parts are known
    pub fn address(&self) -> Option<String> {
        let street = match (&self.street, &self.street_number) {
            (Some(street), Some(number)) => Some(format!("{} {}", street, number)),
            (Some(street), None) => Some(street.clone()),
            _ => None,
        };
        let place = match (&self.postal_code, &self.city) {
            (Some(code), Some(city)) => Some(format!("{} {}", code, city)),
            (None, Some(city)) => Some(city.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => None,
        };

        let parts: Vec<String> = [street, place].into_iter().flatten().collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
