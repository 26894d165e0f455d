use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{PropertyId, UpdateField};

/// all events that can be emitted by a property evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    PropertyEvaluated {
        property_id: PropertyId,
        total_cost: Money,
        loan: Money,
        timestamp: DateTime<Utc>,
    },
    FieldUpdated {
        property_id: PropertyId,
        field: UpdateField,
        value: Decimal,
        timestamp: DateTime<Utc>,
    },
    MortgagePrincipalSynced {
        property_id: PropertyId,
        old_principal: Money,
        new_principal: Money,
    },
    MortgageReplanned {
        property_id: PropertyId,
        annuity: Money,
        repayment_rate: Rate,
        period: u32,
    },
}

/// event store for collecting events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        log::debug!("event: {:?}", event);
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
